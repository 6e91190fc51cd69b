use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = blur_rgba8_premul(&src, 1, 2, 0, 1.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat((w * h) as usize);
    let out = blur_rgba8_premul(&src, w, h, 3, 2.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((2 * w + 2) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_rgba8_premul(&src, w, h, 2, 1.2).unwrap();

    let nonzero = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);

    let sum_a: u32 = out.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 4);
}

#[test]
fn mismatched_buffer_is_rejected() {
    assert!(blur_rgba8_premul(&[0u8; 7], 1, 2, 1, 1.0).is_err());
}

#[test]
fn zero_sigma_returns_copy() {
    let s = Surface::filled(3, 3, Rgba8::rgb(1, 2, 3));
    assert_eq!(gaussian_blur(&s, 0.0).unwrap(), s);
}

#[test]
fn wide_blur_keeps_dimensions_and_flat_color() {
    let s = Surface::filled(64, 40, Rgba8::rgb(90, 120, 200));
    let out = gaussian_blur(&s, 15.0).unwrap();
    assert_eq!((out.width(), out.height()), (64, 40));
    let c = out.color_at(32, 20);
    assert!((i32::from(c.r) - 90).abs() <= 1);
    assert!((i32::from(c.b) - 200).abs() <= 1);
}

#[test]
fn wide_blur_softens_an_edge() {
    let mut s = Surface::filled(80, 80, Rgba8::BLACK);
    s.fill_rect(
        crate::foundation::core::PixelRect::new(40, 0, 80, 80),
        Rgba8::WHITE,
    );
    let out = gaussian_blur(&s, 10.0).unwrap();
    let mid = out.color_at(40, 40).r;
    assert!(mid > 30 && mid < 225, "edge value {mid}");
}
