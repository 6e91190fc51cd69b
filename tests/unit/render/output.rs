use super::*;

fn card() -> RenderedCard {
    RenderedCard {
        style: "msi",
        number: 1,
        role: CardRole::Single,
        image: RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3])),
        layout: vec![
            PlacedElement {
                kind: ElementKind::Background,
                bounds: PixelRect::new(0, 0, 4, 4),
            },
            PlacedElement {
                kind: ElementKind::Bonus,
                bounds: PixelRect::new(0, 0, 2, 1),
            },
            PlacedElement {
                kind: ElementKind::Bonus,
                bounds: PixelRect::new(0, 2, 2, 3),
            },
        ],
        warnings: vec![],
    }
}

#[test]
fn series_roles_are_numbered_in_order() {
    let numbers: Vec<u32> = SeriesRole::ALL.iter().map(|r| r.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn png_encoding_round_trips_pixels() {
    let c = card();
    let bytes = c.encode_png().unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let back = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(back, c.image);
}

#[test]
fn elements_filter_by_kind() {
    let c = card();
    assert_eq!(c.count(ElementKind::Bonus), 2);
    assert_eq!(c.count(ElementKind::Price), 0);
}

#[test]
fn layout_serializes_with_snake_case_kinds() {
    let json = serde_json::to_string(&card().layout[1]).unwrap();
    assert!(json.contains("\"kind\":\"bonus\""));
    assert!(json.contains("\"x0\":0"));
}

#[test]
fn warnings_render_readably() {
    let w = RenderWarning::FontFallback {
        bold: true,
        reason: "nothing found".into(),
    };
    assert_eq!(w.to_string(), "built-in bold font used: nothing found");
}
