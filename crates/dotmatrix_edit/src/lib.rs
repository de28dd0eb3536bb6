//! Editing model for dot matrix fonts
//!
//! `FontModel` owns the glyphs, styles and charset state of one font and is the only
//! place glyph data changes. Views register `FontObserver`s to follow changes.
//! `OutlineExporter` turns the model into vector outlines for font compilation.

pub use dotmatrix_engine::{EngineError, GlyphId, GlyphMatrix, Result};

mod glyph;
pub use glyph::Glyph;

mod observer;
pub use observer::{FontEvent, FontObserver, StyleChanges};

mod font;
pub use font::FontModel;

pub mod outline;
pub use outline::{ExportedFont, FontCompiler, FontMetrics, OutlineExporter, OutlineGlyph};
