use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::unsupported_style("neon")
            .to_string()
            .contains("unsupported style: neon")
    );
    assert!(
        CardError::invalid_field("cpu", "must be non-empty")
            .to_string()
            .contains("invalid field `cpu`:")
    );
    assert!(
        CardError::photo_unreadable("x")
            .to_string()
            .contains("photo unreadable:")
    );
    assert!(
        CardError::font_unavailable("x")
            .to_string()
            .contains("font unavailable:")
    );
    assert!(CardError::render("x").to_string().contains("render error:"));
    assert!(CardError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
