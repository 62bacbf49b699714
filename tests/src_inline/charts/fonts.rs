use super::*;

#[test]
fn test_existing_fonts_keeps_order_and_skips_missing() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.ttf");
    let b = dir.path().join("b.ttf");
    std::fs::write(&a, b"x").unwrap();
    std::fs::write(&b, b"x").unwrap();
    let missing = dir.path().join("missing.ttf");
    let (a, b, missing) = (
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        missing.to_str().unwrap(),
    );
    let found = existing_fonts(&[missing, b, a]);
    assert_eq!(found, vec![Path::new(b), Path::new(a)]);
}

#[test]
fn test_directories_are_not_fonts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap();
    assert!(existing_fonts(&[path]).is_empty());
}

#[test]
fn test_text_enabled_when_system_font_present() {
    let system_font = existing_fonts(SYSTEM_FONT_CANDIDATES)
        .into_iter()
        .any(|p| std::fs::read(p).is_ok_and(|b| b.len() > 1024));
    if system_font {
        assert!(text_enabled());
    }
}

#[test]
fn test_invalid_font_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ttf");
    std::fs::write(&path, b"not a font").unwrap();
    assert!(matches!(
        register_chart_font(&path),
        Err(PitchError::Font(_))
    ));
}
