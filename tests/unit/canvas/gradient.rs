use super::*;

#[test]
fn vertical_gradient_truncates_per_scanline() {
    let g = linear_gradient(
        2,
        4,
        GradientDirection::Vertical,
        Rgba8::rgb(0, 0, 0),
        Rgba8::rgb(255, 100, 10),
    );
    assert_eq!(g.color_at(0, 0), Rgba8::rgb(0, 0, 0));
    // ratio 0.25: 63.75, 25, 2.5
    assert_eq!(g.color_at(1, 1), Rgba8::rgb(63, 25, 2));
    // ratio 0.75: 191.25, 75, 7.5
    assert_eq!(g.color_at(0, 3), Rgba8::rgb(191, 75, 7));
}

#[test]
fn horizontal_gradient_is_constant_per_column() {
    let g = linear_gradient(
        4,
        3,
        GradientDirection::Horizontal,
        Rgba8::rgb(100, 100, 100),
        Rgba8::rgb(200, 0, 100),
    );
    for y in 0..3 {
        assert_eq!(g.color_at(2, y), g.color_at(2, 0));
    }
    assert_eq!(g.color_at(2, 0), Rgba8::rgb(150, 50, 100));
}

#[test]
fn diagonal_gradient_uses_x_plus_y() {
    let g = linear_gradient(
        4,
        4,
        GradientDirection::Diagonal,
        Rgba8::rgb(0, 0, 0),
        Rgba8::rgb(80, 0, 0),
    );
    assert_eq!(g.color_at(1, 2), g.color_at(2, 1));
    assert_eq!(g.color_at(3, 1).r, 40);
}

#[test]
fn decreasing_channels_truncate_toward_zero() {
    assert_eq!(lerp_channel(255, 242, 0.5), 248);
    assert_eq!(lerp_channel(10, 0, 0.99), 0);
}

#[test]
fn bottom_fade_keeps_upper_half() {
    let mut s = Surface::filled(2, 10, Rgba8::WHITE);
    bottom_fade(&mut s, Rgba8::BLACK);
    assert_eq!(s.color_at(0, 4), Rgba8::WHITE);
    assert_eq!(s.color_at(0, 5), Rgba8::WHITE);
    assert!(s.color_at(0, 9).r < 60);
}
