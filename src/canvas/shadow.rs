use crate::{
    canvas::{blur::gaussian_blur, surface::Surface},
    foundation::{core::Rgba8, error::CardResult},
};

/// Parameters of a soft drop shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSpec {
    /// Pixels added on every side of the source.
    pub margin: u32,
    /// Gaussian sigma applied to the outline stack.
    pub blur: f32,
    /// Alpha of the innermost outline.
    pub max_alpha: u8,
    /// Diagonal displacement of the outline stack.
    pub offset: i32,
}

/// Source framed by a soft shadow.
///
/// The result is `2 * margin` larger in both axes. Outlines are stacked from the source edge
/// outward with linearly decreasing alpha, the stack is blurred, and the source is composited on
/// top at `(margin, margin)`.
pub fn soft_shadow(source: &Surface, spec: ShadowSpec) -> CardResult<Surface> {
    let m = spec.margin as i32;
    let w = source.width() as i32 + 2 * m;
    let h = source.height() as i32 + 2 * m;
    let mut layer = Surface::new(w as u32, h as u32);

    for i in 0..m {
        let alpha = (f64::from(spec.max_alpha) * (1.0 - f64::from(i) / f64::from(m))) as u8;
        let color = Rgba8::BLACK.with_alpha(alpha);
        let off = spec.offset;
        stroke_replace(
            &mut layer,
            m - i + off,
            m - i + off,
            w - m + i + off,
            h - m + i + off,
            color,
        );
    }

    let mut out = gaussian_blur(&layer, spec.blur)?;
    out.draw(source, m, m);
    Ok(out)
}

// Outline strokes overwrite instead of blending.
fn stroke_replace(surface: &mut Surface, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) {
    for x in x1..=x2 {
        surface.put(x, y1, color);
        surface.put(x, y2, color);
    }
    for y in y1..=y2 {
        surface.put(x1, y, color);
        surface.put(x2, y, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/shadow.rs"]
mod tests;
