use image::{DynamicImage, RgbImage, imageops};

use crate::{
    canvas::{blur::gaussian_blur, surface::Surface},
    foundation::{core::Rgba8, error::CardResult},
    model::build::PhotoSource,
    photo::decode::{decode_photo, flatten_onto},
};

/// Scaling policy for the photo target box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    /// Shrink (never enlarge) to fit inside the box and letterbox onto the backdrop.
    Contain,
    /// Scale to cover the box and crop the centered excess.
    Cover,
}

/// Per-style photo treatment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoRecipe {
    pub width: u32,
    pub height: u32,
    pub fit: Fit,
    /// Letterbox and transparency backdrop; also the placeholder color.
    pub backdrop: Rgba8,
    pub contrast: f32,
    /// Gaussian sigma; 0 disables.
    pub blur: f32,
}

impl PhotoRecipe {
    /// Contain-fit into `width x height` on black with no adjustments.
    pub const fn contain(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fit: Fit::Contain,
            backdrop: Rgba8::BLACK,
            contrast: 1.0,
            blur: 0.0,
        }
    }

    /// Cover-fit into `width x height` with no adjustments.
    pub const fn cover(width: u32, height: u32) -> Self {
        Self {
            fit: Fit::Cover,
            ..Self::contain(width, height)
        }
    }

    pub const fn with_backdrop(self, backdrop: Rgba8) -> Self {
        Self { backdrop, ..self }
    }

    pub const fn with_contrast(self, contrast: f32) -> Self {
        Self { contrast, ..self }
    }

    pub const fn with_blur(self, blur: f32) -> Self {
        Self { blur, ..self }
    }
}

/// Whether the real photo made it onto the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoOutcome {
    Loaded,
    /// The photo could not be used; the reason is kept for the caller's warning list.
    Placeholder(String),
}

/// Photo normalized to a recipe's box, plus how it was obtained.
#[derive(Clone, Debug)]
pub struct PreparedPhoto {
    pub image: RgbImage,
    pub outcome: PhotoOutcome,
}

/// Decode and normalize the source photo. Never fails: an unusable photo becomes a uniform
/// placeholder of the requested size.
pub fn prepare(source: &PhotoSource, recipe: &PhotoRecipe) -> PreparedPhoto {
    let prepared = decode_photo(source).and_then(|img| prepare_image(&img, recipe));
    match prepared {
        Ok(image) => PreparedPhoto {
            image,
            outcome: PhotoOutcome::Loaded,
        },
        Err(err) => {
            tracing::debug!(error = %err, "photo replaced by placeholder");
            PreparedPhoto {
                image: placeholder(recipe),
                outcome: PhotoOutcome::Placeholder(err.to_string()),
            }
        }
    }
}

/// Uniform image of the recipe's size in its backdrop color.
pub fn placeholder(recipe: &PhotoRecipe) -> RgbImage {
    let [r, g, b] = recipe.backdrop.channels();
    RgbImage::from_pixel(
        recipe.width.max(1),
        recipe.height.max(1),
        image::Rgb([r, g, b]),
    )
}

/// Fit and adjust an already decoded image.
pub fn prepare_image(img: &DynamicImage, recipe: &PhotoRecipe) -> CardResult<RgbImage> {
    let rgb = flatten_onto(img, recipe.backdrop);
    let (tw, th) = (recipe.width.max(1), recipe.height.max(1));
    let mut out = match recipe.fit {
        Fit::Contain => contain(&rgb, tw, th, recipe.backdrop),
        Fit::Cover => cover(&rgb, tw, th),
    };

    if (recipe.contrast - 1.0).abs() > f32::EPSILON {
        adjust_contrast(&mut out, recipe.contrast);
    }
    if recipe.blur > 0.0 {
        out = gaussian_blur(&Surface::from_rgb(&out), recipe.blur)?.to_rgb_image();
    }
    Ok(out)
}

/// Size `(w, h)` shrunk to fit `(tw, th)` with the aspect ratio kept; never enlarged.
pub fn contain_size(w: u32, h: u32, tw: u32, th: u32) -> (u32, u32) {
    if w <= tw && h <= th {
        return (w.max(1), h.max(1));
    }
    let scale = (f64::from(tw) / f64::from(w)).min(f64::from(th) / f64::from(h));
    let nw = ((f64::from(w) * scale).round() as u32).clamp(1, tw);
    let nh = ((f64::from(h) * scale).round() as u32).clamp(1, th);
    (nw, nh)
}

fn contain(img: &RgbImage, tw: u32, th: u32, backdrop: Rgba8) -> RgbImage {
    let (w, h) = img.dimensions();
    let (nw, nh) = contain_size(w, h, tw, th);
    let scaled = if (nw, nh) == (w, h) {
        img.clone()
    } else {
        imageops::resize(img, nw, nh, imageops::FilterType::Lanczos3)
    };
    let [r, g, b] = backdrop.channels();
    let mut out = RgbImage::from_pixel(tw, th, image::Rgb([r, g, b]));
    let ox = i64::from((tw - nw) / 2);
    let oy = i64::from((th - nh) / 2);
    imageops::replace(&mut out, &scaled, ox, oy);
    out
}

fn cover(img: &RgbImage, tw: u32, th: u32) -> RgbImage {
    let (w, h) = img.dimensions();
    let scale = (f64::from(tw) / f64::from(w)).max(f64::from(th) / f64::from(h));
    let nw = ((f64::from(w) * scale).ceil() as u32).max(tw);
    let nh = ((f64::from(h) * scale).ceil() as u32).max(th);
    let scaled = imageops::resize(img, nw, nh, imageops::FilterType::Lanczos3);
    let x = (nw - tw) / 2;
    let y = (nh - th) / 2;
    imageops::crop_imm(&scaled, x, y, tw, th).to_image()
}

/// Push channels away from (or toward) the mean luminance by `factor`.
pub fn adjust_contrast(img: &mut RgbImage, factor: f32) {
    let n = u64::from(img.width()) * u64::from(img.height());
    if n == 0 {
        return;
    }
    let sum: u64 = img.pixels().map(|p| u64::from(luma(p.0))).sum();
    let mean = (sum as f64 / n as f64 + 0.5).floor() as f32;
    for p in img.pixels_mut() {
        for c in p.0.iter_mut() {
            let v = mean + (f32::from(*c) - mean) * factor;
            *c = v.round().clamp(0.0, 255.0) as u8;
        }
    }
}

// ITU-R 601-2 luma, the same weights used for grayscale conversion.
fn luma([r, g, b]: [u8; 3]) -> u8 {
    let l = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    ((l + 500) / 1000) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/photo/prepare.rs"]
mod tests;
