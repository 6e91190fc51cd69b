use super::*;

#[test]
fn filled_surface_reports_color() {
    let s = Surface::filled(3, 2, Rgba8::rgb(10, 20, 30));
    assert_eq!(s.data().len(), 3 * 2 * 4);
    assert_eq!(s.color_at(2, 1), Rgba8::rgb(10, 20, 30));
    assert_eq!(s.pixel(5, 5), [0, 0, 0, 0]);
}

#[test]
fn fill_rect_clips_to_bounds() {
    let mut s = Surface::filled(4, 4, Rgba8::BLACK);
    s.fill_rect(PixelRect::new(-10, 2, 100, 100), Rgba8::WHITE);
    assert_eq!(s.color_at(0, 1), Rgba8::BLACK);
    assert_eq!(s.color_at(0, 2), Rgba8::WHITE);
    assert_eq!(s.color_at(3, 3), Rgba8::WHITE);
}

#[test]
fn translucent_fill_blends() {
    let mut s = Surface::filled(1, 1, Rgba8::WHITE);
    s.fill_rect(s.bounds(), Rgba8::rgba(0, 0, 0, 128));
    let c = s.color_at(0, 0);
    assert_eq!(c.a, 255);
    assert_eq!(c.r, 127);
}

#[test]
fn draw_layer_composites_with_offset() {
    let mut base = Surface::filled(4, 4, Rgba8::BLACK);
    let layer = Surface::filled(2, 2, Rgba8::rgb(255, 0, 0));
    base.draw(&layer, 3, 3);
    assert_eq!(base.color_at(3, 3), Rgba8::rgb(255, 0, 0));
    assert_eq!(base.color_at(2, 2), Rgba8::BLACK);
}

#[test]
fn rgb_round_trip_is_lossless_for_opaque_surfaces() {
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgb([1, 2, 3]));
    img.put_pixel(1, 0, image::Rgb([250, 128, 0]));
    let s = Surface::from_rgb(&img);
    assert_eq!(s.to_rgb_image(), img);
}

#[test]
fn from_premul_bytes_checks_length() {
    assert!(Surface::from_premul_bytes(2, 2, vec![0; 15]).is_err());
    assert!(Surface::from_premul_bytes(2, 2, vec![0; 16]).is_ok());
}
