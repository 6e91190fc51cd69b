use super::*;

const RED: Rgba8 = Rgba8::rgb(255, 0, 0);

fn count_color(s: &Surface, c: Rgba8) -> usize {
    let mut n = 0;
    for y in 0..s.height() as i32 {
        for x in 0..s.width() as i32 {
            if s.color_at(x, y) == c {
                n += 1;
            }
        }
    }
    n
}

fn covered(mask: &Mask, w: i32, h: i32) -> usize {
    let mut n = 0;
    for y in 0..h {
        for x in 0..w {
            if mask.get(x, y) {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn zero_radius_is_a_plain_rectangle() {
    let mask = rounded_rect_mask(2, 3, 11, 8, 0);
    assert_eq!(covered(&mask, 20, 20), 10 * 6);

    let mut a = Surface::filled(20, 20, Rgba8::BLACK);
    let mut b = a.clone();
    rounded_rect(&mut a, 2, 3, 11, 8, 0, ShapeStyle::fill(RED));
    rect(&mut b, 2, 3, 11, 8, RED);
    assert_eq!(a, b);
}

#[test]
fn rounded_corners_are_cut() {
    let mask = rounded_rect_mask(0, 0, 40, 20, 8);
    assert!(!mask.get(0, 0));
    assert!(!mask.get(40, 20));
    assert!(mask.get(20, 0));
    assert!(mask.get(0, 10));
    assert!(mask.get(8, 8));
    assert!(covered(&mask, 41, 21) < 41 * 21);
}

#[test]
fn radius_is_clamped_to_half_the_short_side() {
    let a = rounded_rect_mask(0, 0, 30, 10, 500);
    let b = rounded_rect_mask(0, 0, 30, 10, 5);
    assert_eq!(covered(&a, 31, 11), covered(&b, 31, 11));
}

#[test]
fn translucent_fill_blends_once_where_pieces_overlap() {
    let mut s = Surface::filled(30, 30, Rgba8::WHITE);
    rounded_rect(
        &mut s,
        2,
        2,
        27,
        27,
        6,
        ShapeStyle::fill(Rgba8::rgba(0, 0, 0, 128)),
    );
    // Center sits in both straight rectangles; an edge pixel in only one.
    assert_eq!(s.color_at(15, 15), s.color_at(15, 2));
}

#[test]
fn outline_draws_a_ring() {
    let mut s = Surface::filled(40, 40, Rgba8::BLACK);
    rounded_rect(
        &mut s,
        5,
        5,
        34,
        34,
        6,
        ShapeStyle::default().with_outline(RED, 2),
    );
    assert_eq!(s.color_at(20, 5), RED);
    assert_eq!(s.color_at(20, 6), RED);
    assert_eq!(s.color_at(20, 7), Rgba8::BLACK);
    assert_eq!(s.color_at(20, 20), Rgba8::BLACK);
}

#[test]
fn circle_is_symmetric() {
    let mut s = Surface::filled(21, 21, Rgba8::BLACK);
    circle(&mut s, 10, 10, 6, RED);
    assert_eq!(s.color_at(10, 10), RED);
    assert_eq!(s.color_at(4, 10), s.color_at(16, 10));
    assert_eq!(s.color_at(10, 4), s.color_at(10, 16));
    assert_eq!(s.color_at(0, 0), Rgba8::BLACK);
}

#[test]
fn polygon_fills_axis_aligned_square() {
    let mut s = Surface::filled(10, 10, Rgba8::BLACK);
    polygon(
        &mut s,
        &[
            Point::new(2.0, 2.0),
            Point::new(6.0, 2.0),
            Point::new(6.0, 6.0),
            Point::new(2.0, 6.0),
        ],
        RED,
    );
    assert_eq!(count_color(&s, RED), 16);
    assert_eq!(s.color_at(2, 2), RED);
    assert_eq!(s.color_at(6, 6), Rgba8::BLACK);
}

#[test]
fn degenerate_polygon_draws_nothing() {
    let mut s = Surface::filled(4, 4, Rgba8::BLACK);
    polygon(&mut s, &[Point::new(0.0, 0.0), Point::new(3.0, 3.0)], RED);
    assert_eq!(count_color(&s, RED), 0);
}
