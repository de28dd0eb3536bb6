//! Outline export tests

use dotmatrix_edit::{
    outline::{dot_path, KAPPA, NOTDEF_NAME},
    EngineError, ExportedFont, OutlineExporter, Result,
};
use dotmatrix_engine::ExportOptions;
use kurbo::{PathEl, Point, Shape};

use crate::helpers::{create_test_font, pattern};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_single_dot_position() {
    let mut font = create_test_font();
    font.set_pixel('A', 0, 0, true).unwrap();

    let exported = OutlineExporter::default().export(&font);
    let glyph = exported.glyph('A').unwrap();

    assert_eq!(glyph.dot_count(), 1);
    let bbox = glyph.path.bounding_box();
    let center = bbox.center();
    assert!(close(center.x, 50.0), "x center {}", center.x);
    assert!(close(center.y, 750.0), "y center {}", center.y);
    assert!(close(bbox.width(), 98.0), "radius is half the pixel size");
    assert_eq!(glyph.path, dot_path(Point::new(50.0, 750.0), 49.0));
}

#[test]
fn test_dot_control_points_use_kappa() {
    let path = dot_path(Point::new(0.0, 0.0), 100.0);
    match path.elements()[1] {
        PathEl::CurveTo(c1, c2, end) => {
            assert!(close(c1.x, KAPPA * 100.0) && close(c1.y, 100.0));
            assert!(close(c2.x, 100.0) && close(c2.y, KAPPA * 100.0));
            assert_eq!(end, Point::new(100.0, 0.0));
        }
        other => panic!("expected a cubic, got {other:?}"),
    }
}

#[test]
fn test_metrics() {
    let font = create_test_font();
    let metrics = OutlineExporter::default().export(&font).metrics;
    assert_eq!(metrics.units_per_em, 1000.0);
    assert_eq!(metrics.ascender, 800.0);
    assert_eq!(metrics.descender, -200.0);
}

#[test]
fn test_notdef_first() {
    let mut font = create_test_font();
    font.set_tracking(2);
    let exported = OutlineExporter::default().export(&font);

    let notdef = &exported.glyphs[0];
    assert_eq!(notdef.name, NOTDEF_NAME);
    assert_eq!(notdef.codepoint, None);
    assert_eq!(notdef.advance_width, 900.0);
    assert!(notdef.path.elements().is_empty());
    assert_eq!(exported.glyphs.len(), 27);
}

#[test]
fn test_glyph_order_names_and_advance() {
    let mut font = create_test_font();
    font.set_glyph_matrix('I', &pattern(&["#", "#"])).unwrap();
    let exported = OutlineExporter::default().export(&font);

    let names: Vec<&str> = exported.glyphs[1..4].iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let i = exported.glyph('I').unwrap();
    assert_eq!(i.codepoint, Some('I' as u32));
    assert_eq!(i.advance_width, 200.0);
    assert_eq!(i.dot_count(), 2);
    assert_eq!(exported.glyph('A').unwrap().advance_width, 800.0);
}

#[test]
fn test_every_lit_pixel_is_a_separate_dot() {
    let mut font = create_test_font();
    font.set_glyph_matrix('H', &pattern(&["#.#", "###", "#.#"])).unwrap();
    let exported = OutlineExporter::default().export(&font);
    assert_eq!(exported.glyph('H').unwrap().dot_count(), 7);
}

#[test]
fn test_family_and_style_names() {
    let mut font = create_test_font();
    font.set_name("Platform 9");
    let exporter = OutlineExporter::new(&ExportOptions {
        units_per_cell: 10.0,
        style_name: "Regular".into(),
    });
    let exported = exporter.export(&font);
    assert_eq!(exported.family_name, "Platform 9");
    assert_eq!(exported.style_name, "Regular");
    assert_eq!(exported.metrics.units_per_em, 100.0);
}

#[test]
fn test_pixel_size_scales_radius() {
    let mut font = create_test_font();
    font.set_pixel_size(50);
    font.set_pixel('A', 0, 0, true).unwrap();
    let exported = OutlineExporter::default().export(&font);
    assert!(close(exported.glyph('A').unwrap().path.bounding_box().width(), 50.0));
}

#[test]
fn test_compile_with() {
    let font = create_test_font();
    let exporter = OutlineExporter::default();

    let compiler = |font: &ExportedFont| -> Result<Vec<u8>> { Ok(font.family_name.as_bytes().to_vec()) };
    assert_eq!(exporter.compile_with(&font, &compiler).unwrap(), b"My Dot Matrix Font".to_vec());

    let failing = |_: &ExportedFont| -> Result<Vec<u8>> { Err(EngineError::generic("no font backend")) };
    assert!(exporter.compile_with(&font, &failing).is_err());
}
