use image::{RgbImage, RgbaImage};

use crate::{
    canvas::composite::{PremulRgba8, over, premultiply_in_place, unpremultiply},
    foundation::core::{PixelRect, Rgba8},
    foundation::error::{CardError, CardResult},
};

/// Row-major premultiplied RGBA8 raster.
///
/// Every drawing primitive in the crate writes into a `Surface`. Coordinates outside the surface
/// are clipped silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Surface uniformly filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let px = color.to_premul();
        Self {
            width,
            height,
            data: px.repeat(width as usize * height as usize),
        }
    }

    /// Wrap existing premultiplied bytes.
    pub fn from_premul_bytes(width: u32, height: u32, data: Vec<u8>) -> CardResult<Self> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(CardError::render(
                "surface byte length must equal width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Opaque surface from an RGB image.
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for px in img.pixels() {
            data.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Surface from a straight-alpha RGBA image.
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.as_raw().clone();
        premultiply_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full-surface rectangle.
    pub fn bounds(&self) -> PixelRect {
        PixelRect::from_origin_size(0, 0, self.width, self.height)
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Premultiplied pixel at `(x, y)`; transparent outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> PremulRgba8 {
        if !self.bounds().contains(x, y) {
            return [0, 0, 0, 0];
        }
        let i = self.index(x as u32, y as u32);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Straight-alpha color at `(x, y)`.
    pub fn color_at(&self, x: i32, y: i32) -> Rgba8 {
        let [r, g, b, a] = unpremultiply(self.pixel(x, y));
        Rgba8::rgba(r, g, b, a)
    }

    /// Overwrite one pixel with an opaque or translucent color, without blending.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba8) {
        if !self.bounds().contains(x, y) {
            return;
        }
        let i = self.index(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color.to_premul());
    }

    /// Source-over one premultiplied pixel.
    pub fn blend_premul(&mut self, x: i32, y: i32, src: PremulRgba8) {
        if src[3] == 0 || !self.bounds().contains(x, y) {
            return;
        }
        let i = self.index(x as u32, y as u32);
        let dst = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        self.data[i..i + 4].copy_from_slice(&over(dst, src, 1.0));
    }

    /// Source-over one straight color.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba8) {
        self.blend_premul(x, y, color.to_premul());
    }

    /// Fill a rectangle, blending translucent colors over the existing pixels.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba8) {
        let clip = rect.intersect(self.bounds());
        if clip.is_empty() || color.a == 0 {
            return;
        }
        let src = color.to_premul();
        for y in clip.y0..clip.y1 {
            let row = self.index(clip.x0 as u32, y as u32);
            let row_end = row + clip.width() as usize * 4;
            if color.is_opaque() {
                for px in self.data[row..row_end].chunks_exact_mut(4) {
                    px.copy_from_slice(&src);
                }
            } else {
                for px in self.data[row..row_end].chunks_exact_mut(4) {
                    let out = over([px[0], px[1], px[2], px[3]], src, 1.0);
                    px.copy_from_slice(&out);
                }
            }
        }
    }

    /// Fill an entire row span with one color (no blending).
    pub fn set_row(&mut self, y: i32, color: Rgba8) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let src = color.to_premul();
        let row = self.index(0, y as u32);
        let row_end = row + self.width as usize * 4;
        for px in self.data[row..row_end].chunks_exact_mut(4) {
            px.copy_from_slice(&src);
        }
    }

    /// Composite `layer` with its top-left corner at `(x, y)`.
    pub fn draw(&mut self, layer: &Surface, x: i32, y: i32) {
        self.draw_with_opacity(layer, x, y, 1.0);
    }

    /// Composite `layer` at `(x, y)` with an extra opacity multiplier.
    pub fn draw_with_opacity(&mut self, layer: &Surface, x: i32, y: i32, opacity: f32) {
        let target = PixelRect::from_origin_size(x, y, layer.width, layer.height);
        let clip = target.intersect(self.bounds());
        if clip.is_empty() {
            return;
        }
        for dy in clip.y0..clip.y1 {
            for dx in clip.x0..clip.x1 {
                let src = layer.pixel(dx - x, dy - y);
                if src[3] == 0 {
                    continue;
                }
                let i = self.index(dx as u32, dy as u32);
                let dst = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&over(dst, src, opacity));
            }
        }
    }

    /// Copy an opaque RGB image at `(x, y)`, replacing the covered pixels.
    pub fn paste_rgb(&mut self, img: &RgbImage, x: i32, y: i32) {
        let target = PixelRect::from_origin_size(x, y, img.width(), img.height());
        let clip = target.intersect(self.bounds());
        for dy in clip.y0..clip.y1 {
            for dx in clip.x0..clip.x1 {
                let p = img.get_pixel((dx - x) as u32, (dy - y) as u32);
                let i = self.index(dx as u32, dy as u32);
                self.data[i..i + 4].copy_from_slice(&[p[0], p[1], p[2], 255]);
            }
        }
    }

    /// Opaque RGB image, flattening any remaining transparency onto black.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        RgbImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/surface.rs"]
mod tests;
