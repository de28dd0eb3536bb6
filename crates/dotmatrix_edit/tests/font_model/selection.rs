//! Current glyph tests

use dotmatrix_edit::{EngineError, FontModel, GlyphId};

use crate::helpers::create_test_font;

#[test]
fn test_install_selects_first_default_glyph() {
    let font = create_test_font();
    assert_eq!(font.current_char(), Some('A'));
    assert_eq!(font.current_glyph().unwrap().id(), GlyphId::Char('A'));
}

#[test]
fn test_empty_font_has_no_current_glyph() {
    let font = FontModel::new();
    assert_eq!(font.current_char(), None);
    assert!(font.current_glyph().is_none());
}

#[test]
fn test_set_current_glyph() {
    let mut font = create_test_font();
    font.set_current_glyph('Z' as u32).unwrap();
    assert_eq!(font.current_char(), Some('Z'));
}

#[test]
fn test_set_current_glyph_not_found() {
    let mut font = create_test_font();
    let result = font.set_current_glyph('z' as u32);
    assert!(matches!(result, Err(EngineError::NotFound { .. })));
    assert_eq!(font.current_char(), Some('A'), "selection unchanged");
}

#[test]
fn test_set_current_glyph_invalid_codepoint() {
    let mut font = create_test_font();
    assert!(matches!(font.set_current_glyph(0xD800), Err(EngineError::InvalidCodepoint { .. })));
    assert!(font.set_current_glyph(0x11_0000).is_err());
}

#[test]
fn test_deleting_current_glyph_reselects() {
    let mut font = create_test_font();
    font.activate_charset("roman-lowercase").unwrap();
    assert_eq!(font.current_char(), Some('a'));

    font.deactivate_charset("roman-lowercase").unwrap();
    assert_eq!(font.current_char(), Some('A'), "first remaining glyph");

    font.deactivate_charset("roman-uppercase").unwrap();
    assert_eq!(font.current_char(), None);
}

#[test]
fn test_check_current_glyph_keeps_existing() {
    let mut font = create_test_font();
    font.set_current_glyph('M' as u32).unwrap();
    font.activate_charset("arrows").unwrap();
    font.set_current_glyph('M' as u32).unwrap();
    font.deactivate_charset("arrows").unwrap();
    assert_eq!(font.current_char(), Some('M'));
}

#[test]
fn test_reset_current_glyph() {
    let mut font = create_test_font();
    font.set_current_glyph('Q' as u32).unwrap();
    font.reset_current_glyph();
    assert_eq!(font.current_char(), Some('A'));
}
