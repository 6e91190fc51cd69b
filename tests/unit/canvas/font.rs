use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("unit_fonts")
        .join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn empty_candidate_list_resolves_to_builtin() {
    let res = resolve_font(&[], 30.0);
    assert!(matches!(res.handle, FontHandle::Builtin { .. }));
    assert!(res.fallback_reason.is_some());
}

#[test]
fn missing_files_fall_through_to_builtin() {
    let res = resolve_font(
        &[
            PathBuf::from("/definitely/not/here.ttf"),
            PathBuf::from("/also/missing.otf"),
        ],
        48.0,
    );
    match res.handle {
        FontHandle::Builtin { scale } => assert_eq!(scale, 5),
        other => panic!("expected builtin font, got {other:?}"),
    }
    assert!(res.fallback_reason.unwrap().contains("font unavailable"));
}

#[test]
fn non_font_file_is_rejected() {
    let dir = scratch_dir("not_a_font");
    let path = dir.join("fake.ttf");
    std::fs::write(&path, b"this is plain text").unwrap();
    let err = load_face(&path).unwrap_err();
    assert!(matches!(err, CardError::FontUnavailable(_)));
    // Second probe comes from the cache and fails the same way.
    assert!(load_face(&path).is_err());
}

#[test]
fn sfnt_magic_is_recognized() {
    assert!(looks_like_font(&[0, 1, 0, 0, 9, 9]));
    assert!(looks_like_font(b"OTTO...."));
    assert!(looks_like_font(b"ttcf...."));
    assert!(!looks_like_font(b"PK\x03\x04"));
    assert!(!looks_like_font(b"OT"));
}

#[test]
fn builtin_scale_tracks_requested_size() {
    assert!(matches!(FontHandle::builtin(4.0), FontHandle::Builtin { scale: 1 }));
    assert!(matches!(FontHandle::builtin(24.0), FontHandle::Builtin { scale: 2 }));
    assert!(matches!(FontHandle::builtin(72.0), FontHandle::Builtin { scale: 7 }));
    assert_eq!(FontHandle::builtin(72.0).size(), 56.0);
}

#[test]
fn builtin_glyphs_cover_cyrillic_and_currency() {
    assert_eq!(builtin::glyph('А'), builtin::glyph('A'));
    assert_eq!(builtin::glyph('₽'), builtin::glyph('P'));
    assert_eq!(builtin::glyph('\u{a0}'), builtin::glyph(' '));
    assert_ne!(builtin::glyph('…'), builtin::glyph('.'));
    assert_eq!(builtin::glyph('漢'), [0x7F, 0x41, 0x41, 0x41, 0x7F]);
}

#[test]
fn builtin_ink_reads_columns_top_down() {
    // '!' is a single vertical bar in the middle column, rows 0..=4 and 6.
    assert!(builtin::ink('!', 2, 0));
    assert!(!builtin::ink('!', 2, 5));
    assert!(builtin::ink('!', 2, 6));
    assert!(!builtin::ink('!', 0, 0));
    assert!(!builtin::ink('!', 7, 0));
}
