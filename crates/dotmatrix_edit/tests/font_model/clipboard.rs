//! Copy / paste tests

use dotmatrix_edit::{EngineError, FontModel};
use pretty_assertions::assert_eq;

use crate::helpers::{create_test_font, pattern, render, render_glyph};

#[test]
fn test_copy_paste_between_glyphs() {
    let mut font = create_test_font();
    font.set_pixel('A', 1, 1, true).unwrap();
    font.set_pixel('A', 5, 8, true).unwrap();

    font.copy_to_clipboard().unwrap();
    font.set_current_glyph('B' as u32).unwrap();
    font.paste_from_clipboard().unwrap();

    assert_eq!(render_glyph(&font, 'B'), render_glyph(&font, 'A'));
}

#[test]
fn test_copy_is_deep() {
    let mut font = create_test_font();
    font.set_pixel('A', 0, 0, true).unwrap();
    font.copy_to_clipboard().unwrap();

    font.clear_glyph('A').unwrap();
    assert_eq!(font.clipboard().matrix().pixel(0, 0), Some(true), "clipboard unaffected by later edits");

    font.paste_from_clipboard().unwrap();
    font.set_pixel('A', 1, 0, true).unwrap();
    assert_eq!(font.clipboard().matrix().pixel(1, 0), Some(false), "glyph edits do not reach the clipboard");
}

#[test]
fn test_paste_carries_width() {
    let mut font = create_test_font();
    font.set_glyph_matrix('W', &pattern(&["#.#.#.#.#"])).unwrap();
    font.set_current_glyph('W' as u32).unwrap();
    font.copy_to_clipboard().unwrap();

    font.set_current_glyph('I' as u32).unwrap();
    font.paste_from_clipboard().unwrap();
    assert_eq!(font.glyph('I').unwrap().matrix().size(), (9, 10));
    assert_eq!(render(font.clipboard().matrix()), render_glyph(&font, 'I'));
}

#[test]
fn test_clipboard_follows_height_changes() {
    let mut font = create_test_font();
    font.edit_top(3);
    assert_eq!(font.clipboard().height(), 13);
    font.set_default_matrix(6, 4);
    assert_eq!(font.clipboard().matrix().size(), (4, 6));
}

#[test]
fn test_clipboard_without_current_glyph() {
    let mut font = FontModel::new();
    assert!(matches!(font.copy_to_clipboard(), Err(EngineError::NoCurrentGlyph)));
    assert!(matches!(font.paste_from_clipboard(), Err(EngineError::NoCurrentGlyph)));
}
