use super::*;

#[test]
fn premul_matches_rounded_channel_scaling() {
    assert_eq!(Rgba8::rgb(10, 20, 30).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(
        Rgba8::rgba(100, 50, 200, 128).to_premul(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn inclusive_boxes_cover_both_corners() {
    let r = PixelRect::inclusive(10, 20, 14, 20);
    assert_eq!(r.width(), 5);
    assert_eq!(r.height(), 1);
    assert!(r.contains(14, 20));
    assert!(!r.contains(15, 20));
}

#[test]
fn inverted_bounds_collapse_to_empty() {
    let r = PixelRect::new(10, 10, 5, 5);
    assert!(r.is_empty());
    assert_eq!(r.width(), 0);
}

#[test]
fn intersect_and_inflate() {
    let a = PixelRect::new(0, 0, 10, 10);
    let b = PixelRect::new(5, 5, 20, 20);
    assert_eq!(a.intersect(b), PixelRect::new(5, 5, 10, 10));
    assert_eq!(a.inflate(2), PixelRect::new(-2, -2, 12, 12));
    assert!(a.intersect(PixelRect::new(50, 50, 60, 60)).is_empty());
}

#[test]
fn union_ignores_empty_rects() {
    let a = PixelRect::new(0, 0, 10, 10);
    let b = PixelRect::new(5, 20, 30, 25);
    assert_eq!(a.union(b), PixelRect::new(0, 0, 30, 25));
    assert_eq!(a.union(PixelRect::new(50, 50, 50, 60)), a);
    assert_eq!(PixelRect::default().union(b), b);
}
