use crate::{canvas::surface::Surface, foundation::core::Rgba8};

/// Axis along which a linear gradient interpolates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    /// Top to bottom, one color per scanline.
    Vertical,
    /// Left to right, one color per column.
    Horizontal,
    /// Top-left to bottom-right, one color per anti-diagonal band (`x + y`).
    Diagonal,
}

/// Channel interpolation truncated toward zero.
pub fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    let v = f64::from(start) + (f64::from(end) - f64::from(start)) * ratio;
    v.clamp(0.0, 255.0) as u8
}

/// Per-channel interpolation of two colors, including alpha.
pub fn lerp_color(start: Rgba8, end: Rgba8, ratio: f64) -> Rgba8 {
    Rgba8::rgba(
        lerp_channel(start.r, end.r, ratio),
        lerp_channel(start.g, end.g, ratio),
        lerp_channel(start.b, end.b, ratio),
        lerp_channel(start.a, end.a, ratio),
    )
}

/// Opaque surface filled with a two-stop linear gradient.
///
/// `ratio = position / extent` where extent is the height, the width, or `width + height` for the
/// diagonal direction.
pub fn linear_gradient(
    width: u32,
    height: u32,
    direction: GradientDirection,
    start: Rgba8,
    end: Rgba8,
) -> Surface {
    match direction {
        GradientDirection::Vertical => {
            let extent = f64::from(height.max(1));
            vertical_gradient_by(width, height, |y| {
                lerp_color(start, end, f64::from(y) / extent)
            })
        }
        GradientDirection::Horizontal => {
            let extent = f64::from(width.max(1));
            let mut out = Surface::new(width, height);
            for x in 0..width {
                let c = lerp_color(start, end, f64::from(x) / extent);
                for y in 0..height {
                    out.put(x as i32, y as i32, c);
                }
            }
            out
        }
        GradientDirection::Diagonal => {
            let extent = f64::from((width + height).max(1));
            let mut out = Surface::new(width, height);
            for y in 0..height {
                for x in 0..width {
                    let c = lerp_color(start, end, f64::from(x + y) / extent);
                    out.put(x as i32, y as i32, c);
                }
            }
            out
        }
    }
}

/// Surface whose row `y` is filled with `color_at(y)`.
pub fn vertical_gradient_by(width: u32, height: u32, color_at: impl Fn(u32) -> Rgba8) -> Surface {
    let mut out = Surface::new(width, height);
    for y in 0..height {
        out.set_row(y as i32, color_at(y));
    }
    out
}

/// Darken the lower half toward `color`, alpha rising linearly from 0 at mid-height to 255 at the
/// bottom edge.
pub fn bottom_fade(surface: &mut Surface, color: Rgba8) {
    let h = surface.height();
    let half = h / 2;
    if half == 0 {
        return;
    }
    let w = surface.width();
    for y in half..h {
        let alpha = (255 * (y - half) / half).min(255) as u8;
        let c = color.with_alpha(alpha);
        for x in 0..w {
            surface.blend(x as i32, y as i32, c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/gradient.rs"]
mod tests;
