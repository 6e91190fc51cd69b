use anyhow::Context;
use image::{DynamicImage, RgbImage};

use crate::{
    foundation::{
        core::Rgba8,
        error::{CardError, CardResult},
    },
    model::build::PhotoSource,
};

/// Read and decode the source photograph.
///
/// Every failure (no photo supplied, unreadable file, undecodable bytes) is reported as
/// [`CardError::PhotoUnreadable`].
pub fn decode_photo(source: &PhotoSource) -> CardResult<DynamicImage> {
    match source {
        PhotoSource::None => Err(CardError::photo_unreadable("no photo supplied")),
        PhotoSource::Path(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read photo {}", path.display()))
                .map_err(|e| CardError::photo_unreadable(format!("{e:#}")))?;
            decode_photo_bytes(&bytes)
        }
        PhotoSource::Bytes(bytes) => decode_photo_bytes(bytes),
    }
}

/// Decode encoded raster bytes in any format the `image` crate was built with.
pub fn decode_photo_bytes(bytes: &[u8]) -> CardResult<DynamicImage> {
    image::load_from_memory(bytes)
        .context("decode photo from memory")
        .map_err(|e| CardError::photo_unreadable(format!("{e:#}")))
}

/// Opaque RGB copy of `img`; transparent regions show `backdrop`.
pub fn flatten_onto(img: &DynamicImage, backdrop: Rgba8) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let [br, bg, bb] = backdrop.channels();
    RgbImage::from_fn(w, h, |x, y| {
        let p = rgba.get_pixel(x, y);
        let a = u32::from(p[3]);
        let mix = |c: u8, b: u8| -> u8 {
            ((u32::from(c) * a + u32::from(b) * (255 - a) + 127) / 255) as u8
        };
        image::Rgb([mix(p[0], br), mix(p[1], bg), mix(p[2], bb)])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/photo/decode.rs"]
mod tests;
