use super::*;
use crate::{
    config::{EngineConfig, FontConfig},
    render::output::{CardRole, RenderWarning, SeriesRole},
    series::series_background,
};

fn builtin_only() -> EngineConfig {
    EngineConfig {
        fonts: FontConfig {
            regular: vec![],
            bold: vec![],
        },
        ..EngineConfig::default()
    }
}

#[test]
fn years_word_follows_russian_plurals() {
    assert_eq!(years_word(1), "год");
    assert_eq!(years_word(2), "года");
    assert_eq!(years_word(3), "года");
    assert_eq!(years_word(5), "лет");
    assert_eq!(years_word(11), "лет");
    assert_eq!(years_word(21), "год");
}

#[test]
fn hero_places_photo_badges_and_default_title() {
    let cfg = builtin_only();
    let mut ctx = RenderContext::new(&cfg);
    let build = BuildSpec::new("i5-12400F", "RTX 3060", "16 GB", "512 GB", 55_000.0);
    ctx.begin(series_background());
    hero(&mut ctx, &build).unwrap();
    let card = ctx.finish("mixpc", 1, CardRole::Series(SeriesRole::Hero));
    assert_eq!(card.count(ElementKind::Photo), 1);
    assert_eq!(card.count(ElementKind::Title), 2);
    assert_eq!(card.count(ElementKind::Brand), 1);
    assert_eq!(card.count(ElementKind::Badge), 1);
    assert!(
        card.warnings
            .iter()
            .any(|w| matches!(w, RenderWarning::PhotoPlaceholder { .. }))
    );
}

#[test]
fn named_build_gets_a_single_title() {
    let cfg = builtin_only();
    let mut ctx = RenderContext::new(&cfg);
    let mut build = BuildSpec::new("i5-12400F", "RTX 3060", "16 GB", "512 GB", 55_000.0);
    build.name = "Night Owl".to_owned();
    ctx.begin(series_background());
    hero(&mut ctx, &build).unwrap();
    let card = ctx.finish("mixpc", 1, CardRole::Series(SeriesRole::Hero));
    assert_eq!(card.count(ElementKind::Title), 1);
}

#[test]
fn shipping_draws_green_check_badge() {
    let cfg = builtin_only();
    let mut ctx = RenderContext::new(&cfg);
    ctx.begin(series_background());
    shipping(&mut ctx).unwrap();
    let card = ctx.finish("mixpc", 5, CardRole::Series(SeriesRole::Shipping));
    assert_eq!(card.image.get_pixel(600, 600).0, [GREEN.r, GREEN.g, GREEN.b]);
    assert_eq!(card.count(ElementKind::Caption), 1);
}
