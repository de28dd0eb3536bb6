//! Outline export
//!
//! Converts every glyph's bitmap into a vector outline with one closed circular dot
//! per lit pixel, in a y-up unit grid where one cell is `units_per_cell` units and
//! y = 0 is the baseline. Packaging the result into a font file is up to a
//! `FontCompiler`.

mod compiler;
mod dot;

pub use compiler::FontCompiler;
pub use dot::{append_dot, dot_path, KAPPA};

use dotmatrix_engine::{ExportOptions, GlyphMatrix, Result, DEFAULT_UNITS_PER_CELL};
use kurbo::{BezPath, Point};

use crate::FontModel;

pub const NOTDEF_NAME: &str = ".notdef";

#[derive(Clone, Debug, PartialEq)]
pub struct FontMetrics {
    pub units_per_cell: f64,
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutlineGlyph {
    pub name: String,
    /// `None` for the missing glyph placeholder
    pub codepoint: Option<u32>,
    pub advance_width: f64,
    pub path: BezPath,
}

impl OutlineGlyph {
    /// Number of closed dots in the path
    pub fn dot_count(&self) -> usize {
        self.path.elements().iter().filter(|el| matches!(el, kurbo::PathEl::ClosePath)).count()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportedFont {
    pub family_name: String,
    pub style_name: String,
    pub metrics: FontMetrics,
    /// `.notdef` first, then every glyph in codepoint order
    pub glyphs: Vec<OutlineGlyph>,
}

impl ExportedFont {
    pub fn glyph(&self, ch: char) -> Option<&OutlineGlyph> {
        self.glyphs.iter().find(|g| g.codepoint == Some(ch as u32))
    }
}

#[derive(Clone, Debug)]
pub struct OutlineExporter {
    units_per_cell: f64,
    style_name: String,
}

impl Default for OutlineExporter {
    fn default() -> Self {
        Self::new(&ExportOptions::default())
    }
}

impl OutlineExporter {
    pub fn new(options: &ExportOptions) -> Self {
        let units_per_cell = if options.units_per_cell.is_finite() && options.units_per_cell > 0.0 {
            options.units_per_cell
        } else {
            log::warn!("Invalid units per cell {}, using {DEFAULT_UNITS_PER_CELL}", options.units_per_cell);
            DEFAULT_UNITS_PER_CELL
        };
        Self {
            units_per_cell,
            style_name: options.style_name.clone(),
        }
    }

    pub fn units_per_cell(&self) -> f64 {
        self.units_per_cell
    }

    pub fn metrics(&self, font: &FontModel) -> FontMetrics {
        let u = self.units_per_cell;
        let styles = font.styles();
        FontMetrics {
            units_per_cell: u,
            units_per_em: styles.height as f64 * u,
            ascender: (styles.height as f64 - styles.baseline as f64) * u,
            descender: -(styles.baseline as f64) * u,
        }
    }

    /// Outline of one matrix: a dot for every lit pixel, row 0 at the top
    pub fn glyph_outline(&self, matrix: &GlyphMatrix, baseline: usize, pixel_size: u8) -> BezPath {
        let u = self.units_per_cell;
        let radius = pixel_size as f64 / 100.0 / 2.0 * u;
        let height = matrix.height();

        let mut path = BezPath::new();
        for (x, y) in matrix.lit_pixels() {
            let row_from_bottom = (height - 1 - y) as f64;
            let center = Point::new((x as f64 + 0.5) * u, (row_from_bottom + 0.5 - baseline as f64) * u);
            append_dot(&mut path, center, radius);
        }
        path
    }

    pub fn export(&self, font: &FontModel) -> ExportedFont {
        let u = self.units_per_cell;
        let styles = font.styles();
        let tracking = styles.tracking as f64;

        let mut glyphs = Vec::with_capacity(font.glyphs().count() + 1);
        glyphs.push(OutlineGlyph {
            name: NOTDEF_NAME.to_string(),
            codepoint: None,
            advance_width: (styles.default_width as f64 + tracking) * u,
            path: BezPath::new(),
        });
        for glyph in font.glyphs() {
            let Some(ch) = glyph.id().as_char() else {
                continue;
            };
            glyphs.push(OutlineGlyph {
                name: ch.to_string(),
                codepoint: Some(ch as u32),
                advance_width: (glyph.width() as f64 + tracking) * u,
                path: self.glyph_outline(glyph.matrix(), styles.baseline, styles.pixel_size),
            });
        }
        log::debug!("Exported {} outlines for '{}'", glyphs.len(), font.name());

        ExportedFont {
            family_name: font.name().to_string(),
            style_name: self.style_name.clone(),
            metrics: self.metrics(font),
            glyphs,
        }
    }

    /// Export, then hand the outlines to `compiler`
    pub fn compile_with(&self, font: &FontModel, compiler: &dyn FontCompiler) -> Result<Vec<u8>> {
        let exported = self.export(font);
        compiler.compile(&exported)
    }
}
