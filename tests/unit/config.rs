use super::*;

#[test]
fn defaults_list_platform_fonts_and_brand() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.brand, "ПАРТМАРТ");
    assert_eq!(cfg.brand_short, "PM");
    assert!(cfg.fonts.bold[0].ends_with("DejaVuSans-Bold.ttf"));
    assert!(cfg.fonts.regular[0].ends_with("DejaVuSans.ttf"));
    assert_eq!(cfg.fonts.candidates(true), cfg.fonts.bold.as_slice());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = EngineConfig::from_json_str(r#"{ "brand": "MIXPC" }"#).unwrap();
    assert_eq!(cfg.brand, "MIXPC");
    assert_eq!(cfg.brand_short, "PM");
    assert_eq!(cfg.fonts, FontConfig::default());

    let cfg = EngineConfig::from_json_str(r#"{ "fonts": { "bold": ["/x/b.ttf"] } }"#).unwrap();
    assert_eq!(cfg.fonts.bold, vec![PathBuf::from("/x/b.ttf")]);
    assert_eq!(cfg.fonts.regular, FontConfig::default().regular);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = EngineConfig::from_json_str("{ brand: ").unwrap_err();
    assert!(matches!(err, CardError::Config(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = EngineConfig::load(Path::new("/nope/buildcard.json")).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
}

#[test]
fn overrides_are_prepended() {
    let cfg = EngineConfig::default().with_font_overrides(
        Some(PathBuf::from("/fonts/r.ttf")),
        Some(PathBuf::from("")),
    );
    assert_eq!(cfg.fonts.regular[0], PathBuf::from("/fonts/r.ttf"));
    assert_eq!(cfg.fonts.regular.len(), FontConfig::default().regular.len() + 1);
    assert_eq!(cfg.fonts.bold, FontConfig::default().bold);
}
