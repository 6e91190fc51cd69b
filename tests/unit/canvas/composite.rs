use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_half_black_on_white_is_mid_gray() {
    let out = over([255, 255, 255, 255], [0, 0, 0, 128], 1.0);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 127);
}

#[test]
fn premultiply_and_back_is_close() {
    let mut px = vec![200u8, 100, 50, 128];
    premultiply_in_place(&mut px);
    let back = unpremultiply([px[0], px[1], px[2], px[3]]);
    for c in 0..3 {
        assert!((i32::from(back[c]) - i32::from([200u8, 100, 50][c])).abs() <= 2);
    }
    assert_eq!(unpremultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
}
