//! Whole-model invariants across operation sequences

use crate::helpers::{assert_uniform_height, create_test_font, pattern};

#[test]
fn test_uniform_height_after_mixed_operations() {
    let mut font = create_test_font();
    font.activate_charset("basic-punctuation").unwrap();
    font.import_glyph('ж' as u32, &pattern(&["#", "#", "#", "#", "#", "#", "#", "#", "#", "#", "#", "#"])).unwrap();
    assert_uniform_height(&font);

    font.edit_top(2);
    assert_uniform_height(&font);
    font.edit_bottom(-5);
    assert_uniform_height(&font);
    font.set_default_matrix(4, 3);
    assert_uniform_height(&font);

    font.set_current_glyph('!' as u32).unwrap();
    font.edit_right(3).unwrap();
    font.set_glyph_matrix('A', &pattern(&["#"])).unwrap();
    font.copy_to_clipboard().unwrap();
    font.set_current_glyph('A' as u32).unwrap();
    font.paste_from_clipboard().unwrap();
    assert_uniform_height(&font);

    font.activate_charset("arrows").unwrap();
    font.sort_glyphs();
    assert_uniform_height(&font);
}

#[test]
fn test_baseline_never_exceeds_height() {
    let mut font = create_test_font();
    font.set_baseline(10);
    font.edit_top(-4);
    assert_eq!(font.baseline(), 6);
    font.set_default_matrix(3, 7);
    assert_eq!(font.baseline(), 3);
    font.edit_bottom(-10);
    assert_eq!(font.height(), 1);
    assert!(font.baseline() <= 1);
}

#[test]
fn test_last_edit_advances() {
    let mut font = create_test_font();
    let created = font.created_on();
    font.set_pixel('A', 0, 0, true).unwrap();
    assert!(font.last_edit() >= created);
}

#[test]
fn test_version_is_monotonic() {
    let mut font = create_test_font();
    let mut last = font.version();
    let steps: [&dyn Fn(&mut dotmatrix_edit::FontModel); 4] = [
        &|f| f.activate_charset("arrows").unwrap(),
        &|f| f.edit_top(1),
        &|f| f.deactivate_charset("arrows").unwrap(),
        &|f| f.import_glyph('ж' as u32, &pattern(&["#"])).unwrap(),
    ];
    for step in steps {
        step(&mut font);
        assert!(font.version() > last);
        last = font.version();
    }
}
