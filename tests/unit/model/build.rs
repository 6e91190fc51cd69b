use super::*;

fn base() -> BuildSpec {
    BuildSpec::new(
        "AMD Ryzen 5 7500F",
        "RTX 4060 8GB",
        "DDR5 32GB",
        "SSD M.2 1TB NVMe",
        85_000.0,
    )
}

fn full() -> BuildSpec {
    let mut b = base();
    b.motherboard = "B650".into();
    b.psu = "750W".into();
    b.case = "ATX Tower".into();
    b.cooling = "Tower Cooler".into();
    b
}

#[test]
fn spec_list_has_required_rows_in_fixed_order() {
    let b = base();
    let fields: Vec<_> = b.spec_list().iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            ComponentField::Cpu,
            ComponentField::Gpu,
            ComponentField::Ram,
            ComponentField::Storage
        ]
    );
}

#[test]
fn full_spec_list_is_four_plus_optionals() {
    let b = full();
    let list = b.spec_list();
    assert_eq!(list.len(), 8);
    assert_eq!(list[4].field, ComponentField::Motherboard);
    assert_eq!(list[7].field, ComponentField::Cooling);
    assert_eq!(list[7].value, "Tower Cooler");
}

#[test]
fn omitting_one_optional_drops_exactly_that_row() {
    for (idx, field) in ComponentField::ALL.iter().enumerate().skip(4) {
        let mut b = full();
        match field {
            ComponentField::Motherboard => b.motherboard.clear(),
            ComponentField::Psu => b.psu = "   ".into(),
            ComponentField::Case => b.case.clear(),
            ComponentField::Cooling => b.cooling.clear(),
            _ => unreachable!(),
        }
        let list = b.spec_list();
        assert_eq!(list.len(), 7, "omitting {field:?}");
        assert!(list.iter().all(|e| e.field != *field));
        // Rows before the gap keep their positions.
        for (i, e) in list.iter().take(idx).enumerate() {
            assert_eq!(e.field, ComponentField::ALL[i]);
        }
    }
}

#[test]
fn duplicate_values_are_not_deduplicated() {
    let mut b = base();
    b.motherboard = "same".into();
    b.case = "same".into();
    let values: Vec<_> = b.spec_list().iter().map(|e| e.value).collect();
    assert_eq!(values.iter().filter(|v| **v == "same").count(), 2);
}

#[test]
fn validate_rejects_missing_required_and_negative_price() {
    let mut b = base();
    b.gpu = "  ".into();
    match b.validate() {
        Err(CardError::InvalidField { field, .. }) => assert_eq!(field, "gpu"),
        other => panic!("expected invalid gpu, got {other:?}"),
    }

    let mut b = base();
    b.price = -1.0;
    match b.validate() {
        Err(CardError::InvalidField { field, .. }) => assert_eq!(field, "price"),
        other => panic!("expected invalid price, got {other:?}"),
    }

    let mut b = base();
    b.price = f64::NAN;
    assert!(b.validate().is_err());

    assert!(base().validate().is_ok());
}

#[test]
fn bonus_lines_take_head_lines_only() {
    let mut b = base();
    b.bonuses = "Windows 11\r\nOffice\nMouse\nKeyboard\nHeadset".into();
    assert_eq!(b.bonus_lines(2), vec!["Windows 11", "Office"]);
    assert!(b.has_bonuses());

    b.bonuses.clear();
    assert!(b.bonus_lines(2).is_empty());
    assert!(!b.has_bonuses());
}

#[test]
fn blank_head_line_uses_up_a_bonus_slot() {
    let mut b = base();
    b.bonuses = "\nМышь\nКлавиатура".into();
    assert_eq!(b.bonus_lines(2), vec!["Мышь"]);
    assert!(b.has_bonuses());

    b.bonuses = "  \n\nКлавиатура".into();
    assert!(b.bonus_lines(2).is_empty());
    assert!(b.has_bonuses());
}

#[test]
fn deserializes_with_defaults_and_string_price() {
    let json = r#"{
        "cpu": "i5-12400F",
        "gpu": "RTX 3060 Ti",
        "ram": "16GB",
        "storage": "512GB",
        "price": "85 000,50",
        "photo": "photos/pc.jpg"
    }"#;
    let b: BuildSpec = serde_json::from_str(json).unwrap();
    assert_eq!(b.price, 85_000.5);
    assert_eq!(b.style, DEFAULT_STYLE_TAG);
    assert_eq!(b.warranty_months, 36);
    assert!(matches!(b.photo, PhotoSource::Path(ref p) if p.ends_with("pc.jpg")));

    let resolved = b.photo.resolved_against(Path::new("/data"));
    assert!(matches!(resolved, PhotoSource::Path(ref p) if p == Path::new("/data/photos/pc.jpg")));
}

#[test]
fn warranty_years_never_below_one() {
    let mut b = base();
    assert_eq!(b.warranty_years(), 3);
    b.warranty_months = 6;
    assert_eq!(b.warranty_years(), 1);
}
