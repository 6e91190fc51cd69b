use super::*;

#[test]
fn bonus_lines_are_capped_marked_and_shortened() {
    let mut build = BuildSpec::new("cpu", "gpu", "ram", "ssd", 1.0);
    build.bonuses = "Windows 11\nКлавиатура и мышь в подарок навсегда\nТретья\nЧетвёртая".into();
    let lines = bonus_lines(&build, '★', 12);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "★ Windows 11");
    assert_eq!(lines[1], "★ Клавиатура…");
    assert!(lines[1].ends_with('…'));
}

#[test]
fn no_bonuses_yield_no_lines() {
    let build = BuildSpec::new("cpu", "gpu", "ram", "ssd", 1.0);
    assert!(bonus_lines(&build, '•', 40).is_empty());
}

fn builtin_only() -> crate::config::EngineConfig {
    crate::config::EngineConfig {
        fonts: crate::config::FontConfig {
            regular: vec![],
            bold: vec![],
        },
        ..crate::config::EngineConfig::default()
    }
}

#[test]
fn fit_text_shrinks_until_the_text_fits() {
    let cfg = builtin_only();
    let mut ctx = RenderContext::new(&cfg);
    let fitted = fit_text(&mut ctx, "ABCDEFGHIJ", 40.0, true, 130).unwrap();
    assert_eq!(fitted.text, "ABCDEFGHIJ");
    assert!(fitted.width <= 130);
    assert!(fitted.font.size() < 40.0);

    let roomy = fit_text(&mut ctx, "ABC", 40.0, true, 1000).unwrap();
    assert_eq!(roomy.width, 3 * 6 * 4);
}

#[test]
fn fit_text_ellipsizes_below_the_minimum_size() {
    let cfg = builtin_only();
    let mut ctx = RenderContext::new(&cfg);
    let long = "9".repeat(100);
    let fitted = fit_text(&mut ctx, &long, 72.0, true, 120).unwrap();
    assert!(fitted.width <= 120);
    assert!(fitted.text.ends_with('…'));
    assert!(fitted.text.chars().count() < 100);
}
