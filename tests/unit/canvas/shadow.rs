use super::*;

#[test]
fn shadow_grows_by_margin_and_keeps_source_on_top() {
    let src = Surface::filled(20, 10, Rgba8::rgb(200, 10, 10));
    let out = soft_shadow(
        &src,
        ShadowSpec {
            margin: 6,
            blur: 2.0,
            max_alpha: 80,
            offset: 0,
        },
    )
    .unwrap();
    assert_eq!((out.width(), out.height()), (32, 22));
    assert_eq!(out.color_at(6, 6), Rgba8::rgb(200, 10, 10));
    assert_eq!(out.color_at(25, 15), Rgba8::rgb(200, 10, 10));
}

#[test]
fn shadow_fades_outward() {
    let src = Surface::filled(20, 20, Rgba8::WHITE);
    let out = soft_shadow(
        &src,
        ShadowSpec {
            margin: 10,
            blur: 1.0,
            max_alpha: 120,
            offset: 0,
        },
    )
    .unwrap();
    let near = out.pixel(8, 20)[3];
    let far = out.pixel(1, 20)[3];
    assert!(near > far, "near {near} far {far}");
}

#[test]
fn offset_shifts_the_shadow() {
    let src = Surface::filled(10, 10, Rgba8::WHITE);
    let spec = ShadowSpec {
        margin: 8,
        blur: 0.0,
        max_alpha: 100,
        offset: 4,
    };
    let out = soft_shadow(&src, spec).unwrap();
    // Right of the source the shifted outlines are denser than on the left.
    assert!(out.pixel(19, 12)[3] > out.pixel(7, 12)[3]);
}
