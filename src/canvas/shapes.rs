use kurbo::Point;

use crate::{
    canvas::surface::Surface,
    foundation::core::{PixelRect, Rgba8},
};

/// Corner of a rectangle, used to pick the quadrant of a quarter disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Fill and outline settings shared by the closed shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShapeStyle {
    pub fill: Option<Rgba8>,
    pub outline: Option<Rgba8>,
    pub outline_width: u32,
}

impl ShapeStyle {
    pub fn fill(color: Rgba8) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn with_outline(self, color: Rgba8, width: u32) -> Self {
        Self {
            outline: Some(color),
            outline_width: width,
            ..self
        }
    }
}

/// Binary coverage over a bounding rectangle.
///
/// Shapes are built as unions of rectangles and quarter discs, then blended once per covered pixel
/// so translucent fills never double up where the pieces overlap.
#[derive(Clone, Debug)]
pub struct Mask {
    rect: PixelRect,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(rect: PixelRect) -> Self {
        let len = rect.width() as usize * rect.height() as usize;
        Self {
            rect,
            bits: vec![false; len],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.rect.contains(x, y) {
            return None;
        }
        let row = (y - self.rect.y0) as usize * self.rect.width() as usize;
        Some(row + (x - self.rect.x0) as usize)
    }

    pub fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.bits[i] = true;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.bits[i])
    }

    pub fn add_rect(&mut self, rect: PixelRect) {
        let clip = rect.intersect(self.rect);
        for y in clip.y0..clip.y1 {
            for x in clip.x0..clip.x1 {
                self.set(x, y);
            }
        }
    }

    /// Quarter of the disc centered at `(cx, cy)` lying toward `corner`. Radius 0 adds nothing.
    pub fn add_quarter_disc(&mut self, cx: i32, cy: i32, radius: i32, corner: Corner) {
        if radius <= 0 {
            return;
        }
        let (xs, ys) = match corner {
            Corner::TopLeft => (cx - radius..=cx, cy - radius..=cy),
            Corner::TopRight => (cx..=cx + radius, cy - radius..=cy),
            Corner::BottomLeft => (cx - radius..=cx, cy..=cy + radius),
            Corner::BottomRight => (cx..=cx + radius, cy..=cy + radius),
        };
        let r2 = i64::from(radius) * i64::from(radius);
        for y in ys {
            for x in xs.clone() {
                let dx = i64::from(x - cx);
                let dy = i64::from(y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.set(x, y);
                }
            }
        }
    }

    /// Clear every pixel covered by `other`.
    pub fn subtract(&mut self, other: &Mask) {
        let clip = other.rect.intersect(self.rect);
        for y in clip.y0..clip.y1 {
            for x in clip.x0..clip.x1 {
                if other.get(x, y)
                    && let Some(i) = self.index(x, y)
                {
                    self.bits[i] = false;
                }
            }
        }
    }

    /// Blend `color` once into every covered pixel.
    pub fn paint(&self, surface: &mut Surface, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let clip = self.rect.intersect(surface.bounds());
        for y in clip.y0..clip.y1 {
            for x in clip.x0..clip.x1 {
                if self.get(x, y) {
                    surface.blend(x, y, color);
                }
            }
        }
    }
}

/// Coverage of a rounded box whose corner coordinates `[x1, y1, x2, y2]` are inclusive.
///
/// Two straight rectangles cover the non-corner spans and four quarter discs fill the corners.
/// The radius is clamped to half the shorter side; radius 0 yields a plain rectangle.
pub fn rounded_rect_mask(x1: i32, y1: i32, x2: i32, y2: i32, radius: i32) -> Mask {
    let outer = PixelRect::inclusive(x1, y1, x2, y2);
    let mut mask = Mask::new(outer);
    if outer.is_empty() {
        return mask;
    }
    let r = radius.clamp(0, (x2 - x1).min(y2 - y1) / 2);

    mask.add_rect(PixelRect::inclusive(x1 + r, y1, x2 - r, y2));
    mask.add_rect(PixelRect::inclusive(x1, y1 + r, x2, y2 - r));
    mask.add_quarter_disc(x1 + r, y1 + r, r, Corner::TopLeft);
    mask.add_quarter_disc(x2 - r, y1 + r, r, Corner::TopRight);
    mask.add_quarter_disc(x1 + r, y2 - r, r, Corner::BottomLeft);
    mask.add_quarter_disc(x2 - r, y2 - r, r, Corner::BottomRight);
    mask
}

/// Draw a rounded rectangle over the inclusive box `[x1, y1, x2, y2]`.
///
/// The outline is the ring between the outer shape and the same shape shrunk by the outline width.
pub fn rounded_rect(
    surface: &mut Surface,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    radius: i32,
    style: ShapeStyle,
) {
    let outer = rounded_rect_mask(x1, y1, x2, y2, radius);
    if let Some(fill) = style.fill {
        outer.paint(surface, fill);
    }
    if let Some(outline) = style.outline
        && style.outline_width > 0
    {
        let w = style.outline_width as i32;
        let mut ring = outer;
        if x2 - x1 > 2 * w && y2 - y1 > 2 * w {
            let inner = rounded_rect_mask(x1 + w, y1 + w, x2 - w, y2 - w, (radius - w).max(0));
            ring.subtract(&inner);
        }
        ring.paint(surface, outline);
    }
}

/// Filled rectangle over an inclusive box.
pub fn rect(surface: &mut Surface, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) {
    surface.fill_rect(PixelRect::inclusive(x1, y1, x2, y2), color);
}

/// Filled ellipse inscribed in the inclusive box `[x1, y1, x2, y2]`.
pub fn ellipse(surface: &mut Surface, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8) {
    if x2 < x1 || y2 < y1 {
        return;
    }
    let cx = f64::from(x1 + x2) / 2.0;
    let cy = f64::from(y1 + y2) / 2.0;
    let rx = (f64::from(x2 - x1) / 2.0).max(0.5);
    let ry = (f64::from(y2 - y1) / 2.0).max(0.5);
    let mut mask = Mask::new(PixelRect::inclusive(x1, y1, x2, y2));
    for y in y1..=y2 {
        for x in x1..=x2 {
            let nx = (f64::from(x) - cx) / rx;
            let ny = (f64::from(y) - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                mask.set(x, y);
            }
        }
    }
    mask.paint(surface, color);
}

/// Filled circle of `radius` around `(cx, cy)`.
pub fn circle(surface: &mut Surface, cx: i32, cy: i32, radius: i32, color: Rgba8) {
    if radius <= 0 {
        return;
    }
    ellipse(
        surface,
        cx - radius,
        cy - radius,
        cx + radius,
        cy + radius,
        color,
    );
}

/// Even-odd scanline fill of a closed polygon, sampled at pixel centers.
pub fn polygon(surface: &mut Surface, points: &[Point], color: Rgba8) {
    if points.len() < 3 {
        return;
    }
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let bounds = surface.bounds();
    let y_start = (min_y.floor() as i32).max(bounds.y0);
    let y_end = (max_y.ceil() as i32).min(bounds.y1);

    let mut crossings = Vec::<f64>::new();
    for y in y_start..y_end {
        let sy = f64::from(y) + 0.5;
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                let t = (sy - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f64::total_cmp);
        for span in crossings.chunks_exact(2) {
            let x_from = ((span[0] - 0.5).ceil() as i32).max(bounds.x0);
            let x_to = ((span[1] - 0.5).ceil() as i32).min(bounds.x1);
            for x in x_from..x_to {
                surface.blend(x, y, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/shapes.rs"]
mod tests;
