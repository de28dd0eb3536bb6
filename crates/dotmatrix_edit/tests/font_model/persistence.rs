//! Snapshot save / load tests

use dotmatrix_edit::{EngineError, FontModel};
use dotmatrix_engine::{builtin_catalog, FontSnapshot, Theme};
use pretty_assertions::assert_eq;

use crate::helpers::{assert_uniform_height, create_test_font, init_logging, render_glyph};

fn loaded_font() -> FontModel {
    init_logging();
    let mut font = FontModel::new();
    font.install_charsets(builtin_catalog().clone());
    font
}

fn sample_font() -> FontModel {
    let mut font = create_test_font();
    font.set_name("Round Trip");
    font.set_default_matrix(8, 5);
    font.set_tracking(3);
    font.set_baseline(1);
    font.set_pixel_size(80);
    font.set_theme(Theme::Light);
    font.activate_charset("arabic-numerals").unwrap();
    font.set_pixel('A', 0, 0, true).unwrap();
    font.set_pixel('A', 4, 7, true).unwrap();
    font.set_pixel('7', 2, 3, true).unwrap();
    font.set_current_glyph('W' as u32).unwrap();
    font.edit_right(2).unwrap();
    font
}

#[test]
fn test_round_trip() {
    let original = sample_font();
    let json = original.save_json().unwrap();

    let mut restored = loaded_font();
    restored.load_json(&json).unwrap();

    assert_eq!(restored.name(), original.name());
    assert_eq!(restored.styles(), original.styles());
    assert_eq!(restored.codepoints().collect::<Vec<_>>(), original.codepoints().collect::<Vec<_>>());
    for glyph in original.glyphs() {
        let ch = glyph.id().as_char().unwrap();
        assert_eq!(restored.glyph(ch).unwrap().matrix(), glyph.matrix(), "glyph {ch}");
    }
    assert_eq!(restored.created_on().timestamp_millis(), original.created_on().timestamp_millis());
    assert!(restored.is_charset_active("arabic-numerals"));
    assert_eq!(restored.unsorted_glyphs().count(), 0);
}

#[test]
fn test_snapshot_format() {
    let mut font = create_test_font();
    font.set_pixel('A', 1, 0, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&font.save_json().unwrap()).unwrap();

    assert_eq!(value["name"], "My Dot Matrix Font");
    assert_eq!(value["styles"]["pixelSize"], 98);
    assert_eq!(value["styles"]["pixelShape"], 0);
    assert_eq!(value["styles"]["defaultWidth"], 7);
    assert_eq!(value["styles"]["widthLock"], false);
    assert!(value["metadata"]["createdOn"].is_i64());
    assert_eq!(value["glyphs"]["65"]["matrix"][0], serde_json::json!([0, 1, 0, 0, 0, 0, 0]));
    assert_eq!(value["glyphs"].as_object().unwrap().len(), 26);
}

#[test]
fn test_load_missing_styles_keep_current() {
    let mut font = loaded_font();
    font.set_tracking(5);
    font.load_json(r#"{"name": "Sparse", "styles": {"height": 12}, "glyphs": {"66": {"matrix": [[1]]}}}"#)
        .unwrap();

    assert_eq!(font.name(), "Sparse");
    assert_eq!(font.height(), 12);
    assert_eq!(font.tracking(), 5);
    assert_eq!(font.default_width(), 7);
    assert_eq!(font.glyph('B').unwrap().matrix().size(), (1, 12));
    assert_eq!(font.glyph('B').unwrap().matrix().pixel(0, 11), Some(true), "content anchored to the bottom");
    assert_eq!(font.glyph('C').unwrap().matrix().size(), (7, 12));
    assert_uniform_height(&font);
}

#[test]
fn test_load_ignores_out_of_range_styles() {
    let mut font = loaded_font();
    font.load_json(r#"{"styles": {"pixelSize": 0, "tracking": 99, "baseline": 40, "height": 6}, "glyphs": {}}"#)
        .unwrap();
    assert_eq!(font.styles().pixel_size, 98);
    assert_eq!(font.tracking(), 1);
    assert_eq!(font.height(), 6);
    assert_eq!(font.baseline(), 2);
}

#[test]
fn test_load_ignores_oversized_dimensions() {
    let mut font = loaded_font();
    font.load_json(r#"{"styles": {"height": 1000000000, "defaultWidth": 1000000000}, "glyphs": {"65": {"matrix": [[1]]}}}"#)
        .unwrap();
    assert_eq!(font.height(), 10);
    assert_eq!(font.default_width(), 7);
    assert_eq!(font.glyph('A').unwrap().matrix().size(), (1, 10));
    assert_uniform_height(&font);
}

#[test]
fn test_load_clamps_baseline_to_height() {
    let mut font = loaded_font();
    font.set_baseline(9);
    font.load_json(r#"{"styles": {"height": 4}, "glyphs": {}}"#).unwrap();
    assert_eq!(font.baseline(), 4);
}

#[test]
fn test_load_stamps_created_on() {
    let mut font = loaded_font();
    font.load_json(r#"{"glyphs": {}, "metadata": {"createdOn": 1700000000000}}"#).unwrap();
    assert_eq!(font.created_on().timestamp_millis(), 1_700_000_000_000);

    let before = chrono::Utc::now().timestamp_millis();
    font.load_json(r#"{"glyphs": {}}"#).unwrap();
    assert!(font.created_on().timestamp_millis() >= before);
}

#[test]
fn test_load_empty_matrix_becomes_blank_glyph() {
    let mut font = loaded_font();
    font.load_json(r#"{"glyphs": {"97": {"matrix": []}}}"#).unwrap();
    let glyph = font.glyph('a').unwrap();
    assert_eq!(glyph.matrix().size(), (7, 10));
    assert!(glyph.is_blank());
}

#[test]
fn test_load_pads_short_rows() {
    let mut font = loaded_font();
    font.load_json(r#"{"styles": {"height": 2}, "glyphs": {"65": {"matrix": [[1, 1, 1], [1]]}}}"#).unwrap();
    assert_eq!(render_glyph(&font, 'A'), vec!["###", "#.."]);
}

#[test]
fn test_malformed_load_leaves_font_untouched() {
    let mut font = sample_font();
    let before = font.save_json().unwrap();
    let version = font.version();

    for bad in [
        "{not json",
        r#"{"glyphs": {"65": {"matrix": [[2]]}}}"#,
        r#"{"glyphs": {"x": {"matrix": [[1]]}}}"#,
        r#"{"glyphs": {"55296": {"matrix": [[1]]}}}"#,
        r#"{"name": 5, "glyphs": {}}"#,
    ] {
        let result = font.load_json(bad);
        assert!(matches!(result, Err(EngineError::MalformedSnapshot { .. })), "{bad} should be rejected");
    }

    assert_eq!(font.save_json().unwrap(), before);
    assert_eq!(font.version(), version);
}

#[test]
fn test_load_replaces_glyphs_and_charsets() {
    let mut font = sample_font();
    font.load_json(r#"{"glyphs": {"98": {"matrix": [[1]]}}}"#).unwrap();
    assert!(!font.contains_glyph('A'));
    assert!(!font.contains_glyph('7'));
    assert!(font.is_charset_active("roman-lowercase"));
    assert!(!font.is_charset_active("roman-uppercase"));
    assert_eq!(font.current_char(), Some('a'));
}

#[test]
fn test_load_snapshot_value() {
    let mut font = loaded_font();
    let snapshot = sample_font().to_snapshot();
    font.load(&snapshot).unwrap();
    assert_eq!(font.to_snapshot().glyphs, snapshot.glyphs);
    assert_eq!(FontSnapshot::from_json(&font.save_json().unwrap()).unwrap().name, snapshot.name);
}

#[test]
fn test_round_trip_keeps_active_charsets() {
    let mut original = create_test_font();
    original.activate_charset("currency-symbols").unwrap();
    let json = original.save_json().unwrap();

    let mut restored = loaded_font();
    restored.load_json(&json).unwrap();

    assert!(restored.is_charset_active("roman-uppercase"));
    assert!(restored.is_charset_active("currency-symbols"));
    assert!(!restored.is_charset_active("basic-punctuation"));
    assert_eq!(restored.codepoints().collect::<Vec<_>>(), original.codepoints().collect::<Vec<_>>());
}

#[test]
fn test_load_keeps_last_edit() {
    let mut font = loaded_font();
    font.load_json(r#"{"metadata": {"lastEdit": 1700000000000}, "glyphs": {"65": {"matrix": [[1]]}}}"#).unwrap();
    assert_eq!(font.last_edit().timestamp_millis(), 1_700_000_000_000);
}

