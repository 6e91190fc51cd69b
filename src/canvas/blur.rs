use image::{RgbaImage, imageops};

use crate::{
    canvas::surface::Surface,
    foundation::error::{CardError, CardResult},
};

/// Largest sigma blurred at full resolution. Larger radii go through a downsampled pass.
const DIRECT_SIGMA_LIMIT: f32 = 4.0;

/// Gaussian blur of a whole surface.
///
/// `sigma <= 0` returns an unchanged copy. Wide blurs are computed on a reduced raster and scaled
/// back, which keeps the cost flat for the large soft shadows and glass backgrounds.
pub fn gaussian_blur(src: &Surface, sigma: f32) -> CardResult<Surface> {
    if !sigma.is_finite() || sigma <= 0.0 || src.width() == 0 || src.height() == 0 {
        return Ok(src.clone());
    }
    if sigma <= DIRECT_SIGMA_LIMIT {
        return blur_direct(src, sigma);
    }

    let factor = (sigma / DIRECT_SIGMA_LIMIT).ceil().max(1.0) as u32;
    let (w, h) = (src.width(), src.height());
    let small_w = (w / factor).max(1);
    let small_h = (h / factor).max(1);

    let full = RgbaImage::from_raw(w, h, src.data().to_vec())
        .ok_or_else(|| CardError::render("surface buffer does not match its dimensions"))?;
    let small = imageops::resize(&full, small_w, small_h, imageops::FilterType::Triangle);
    let small = Surface::from_premul_bytes(small_w, small_h, small.into_raw())?;
    let blurred = blur_direct(&small, sigma / factor as f32)?;

    let small = RgbaImage::from_raw(small_w, small_h, blurred.data().to_vec())
        .ok_or_else(|| CardError::render("blurred buffer does not match its dimensions"))?;
    let restored = imageops::resize(&small, w, h, imageops::FilterType::Triangle);
    let mut data = restored.into_raw();
    clamp_premul(&mut data);
    Surface::from_premul_bytes(w, h, data)
}

fn blur_direct(src: &Surface, sigma: f32) -> CardResult<Surface> {
    let radius = (sigma * 3.0).ceil() as u32;
    let out = blur_rgba8_premul(src.data(), src.width(), src.height(), radius, sigma)?;
    Surface::from_premul_bytes(src.width(), src.height(), out)
}

// Resampling can push a color channel one step above alpha.
fn clamp_premul(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        px[0] = px[0].min(a);
        px[1] = px[1].min(a);
        px[2] = px[2].min(a);
    }
}

/// Separable Gaussian blur over premultiplied RGBA8 with Q16 fixed-point weights.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> CardResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CardError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(CardError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> CardResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CardError::render("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(CardError::render("gaussian kernel sum is zero"));
    }

    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let new_mid = (i64::from(weights[mid]) + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/blur.rs"]
mod tests;
