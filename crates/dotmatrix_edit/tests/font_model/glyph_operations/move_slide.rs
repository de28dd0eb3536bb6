//! Move (clip) and slide (wrap) tests

use pretty_assertions::assert_eq;

use crate::helpers::{create_test_font, pattern, render_glyph};

fn font_with_corner_glyph() -> dotmatrix_edit::FontModel {
    let mut font = create_test_font();
    font.set_default_matrix(3, 3);
    font.set_glyph_matrix('A', &pattern(&["#..", "...", "..#"])).unwrap();
    font
}

#[test]
fn test_move_glyph_clips() {
    let mut font = font_with_corner_glyph();
    font.move_glyph('A', 1, 0).unwrap();
    assert_eq!(render_glyph(&font, 'A'), vec![".#.", "...", "..."]);
}

#[test]
fn test_move_glyph_down_left() {
    let mut font = font_with_corner_glyph();
    font.move_glyph('A', -1, 1).unwrap();
    assert_eq!(render_glyph(&font, 'A'), vec!["...", "...", "..."]);
}

#[test]
fn test_slide_glyph_wraps() {
    let mut font = font_with_corner_glyph();
    font.slide_glyph('A', 1, 0).unwrap();
    assert_eq!(render_glyph(&font, 'A'), vec![".#.", "...", "#.."]);

    font.slide_glyph('A', 0, -1).unwrap();
    assert_eq!(render_glyph(&font, 'A'), vec!["...", "#..", ".#."]);
}

#[test]
fn test_slide_full_cycle_restores() {
    let mut font = font_with_corner_glyph();
    let original = render_glyph(&font, 'A');
    for _ in 0..3 {
        font.slide_glyph('A', 1, 1).unwrap();
    }
    assert_eq!(render_glyph(&font, 'A'), original);
}
