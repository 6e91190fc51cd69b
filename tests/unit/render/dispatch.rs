use super::*;
use crate::{
    config::FontConfig, foundation::error::CardError, render::output::ElementKind,
};

fn engine() -> Engine {
    Engine::new(EngineConfig {
        fonts: FontConfig {
            regular: vec![],
            bold: vec![],
        },
        ..EngineConfig::default()
    })
}

fn sample() -> BuildSpec {
    let mut build = BuildSpec::new("Core i5-13400F", "RTX 4060 Ti", "32 GB", "1 TB", 104_500.0);
    build.id = "d1".to_owned();
    build
}

#[test]
fn unknown_style_fails_before_validation() {
    let mut build = sample();
    build.cpu.clear();
    let err = engine().render_style("vaporwave", &build).unwrap_err();
    assert!(matches!(err, CardError::UnsupportedStyle(ref t) if t == "vaporwave"));
}

#[test]
fn invalid_build_is_rejected() {
    let mut build = sample();
    build.price = -1.0;
    let err = engine().render_style("msi", &build).unwrap_err();
    assert!(matches!(err, CardError::InvalidField { .. }));
}

#[test]
fn render_follows_the_build_style() {
    let mut build = sample();
    build.style = "Spotify".to_owned();
    let cards = engine().render(&build).unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].style, "spotify");
    assert_eq!(cards[0].role, CardRole::Single);
    assert_eq!(cards[0].number, 1);
}

#[test]
fn single_render_of_series_is_hero() {
    let card = engine().render_single(StyleTag::MixPc, &sample()).unwrap();
    assert_eq!(card.role, CardRole::Series(SeriesRole::Hero));
    assert_eq!(card.count(ElementKind::Badge), 1);
}

#[test]
fn empty_font_lists_resolve_to_builtin() {
    let [regular, bold] = engine().resolved_fonts();
    assert!(!regular.bold && bold.bold);
    assert!(regular.path.is_none() && regular.bytes.is_none());
    assert!(bold.fallback_reason.is_some());
}
