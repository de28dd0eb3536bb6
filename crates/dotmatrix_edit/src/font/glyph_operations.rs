//! Glyph-level operations
//!
//! Operations that work on individual glyphs, addressed by `GlyphId` (a `char` converts
//! into one, `GlyphId::Clipboard` addresses the scratch buffer):
//! - Pixel editing (set_pixel, toggle_pixel, paint_pixel)
//! - Clear glyph
//! - Flip (horizontal/vertical)
//! - Inverse
//! - Move (with clip)
//! - Slide (with wrap)
//! - Whole-matrix replacement

use dotmatrix_engine::{EngineError, GlyphId, GlyphMatrix, Result};

use crate::Glyph;

use super::FontModel;

impl FontModel {
    /// Look up a glyph or the clipboard
    pub fn glyph_by_id(&self, id: impl Into<GlyphId>) -> Result<&Glyph> {
        let id = id.into();
        match id {
            GlyphId::Clipboard => Ok(&self.clipboard),
            GlyphId::Char(ch) => self.glyphs.get(&ch).ok_or(EngineError::NotFound { id }),
        }
    }

    /// True iff every pixel of the glyph is off
    pub fn is_glyph_empty(&self, id: impl Into<GlyphId>) -> Result<bool> {
        Ok(self.glyph_by_id(id)?.is_blank())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pixel Editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Set a single pixel value. Coordinates outside the glyph fail with `OutOfRange`
    /// and leave the revision untouched.
    pub fn set_pixel(&mut self, id: impl Into<GlyphId>, x: i32, y: i32, value: bool) -> Result<()> {
        let id = id.into();
        self.glyph_by_id(id)?.matrix().get_pixel(x, y)?;
        self.edit_glyph(id, |m| m.set_pixel(x, y, value))?
    }

    /// Toggle a single pixel, returning its new value
    pub fn toggle_pixel(&mut self, id: impl Into<GlyphId>, x: i32, y: i32) -> Result<bool> {
        let id = id.into();
        self.glyph_by_id(id)?.matrix().get_pixel(x, y)?;
        self.edit_glyph(id, |m| m.toggle_pixel(x, y))?
    }

    /// Set a pixel to the current draw mode value
    pub fn paint_pixel(&mut self, id: impl Into<GlyphId>, x: i32, y: i32) -> Result<()> {
        let value = self.draw_mode;
        self.set_pixel(id, x, y, value)
    }

    /// Replace a glyph's matrix with a copy of `matrix`.
    ///
    /// Rows are added or removed at the top until the copy matches the font height.
    pub fn set_glyph_matrix(&mut self, id: impl Into<GlyphId>, matrix: &GlyphMatrix) -> Result<()> {
        let height = self.styles.height;
        self.edit_glyph(id.into(), |m| {
            m.set_all(matrix);
            m.sync_height_top(height);
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clear / Inverse
    // ═══════════════════════════════════════════════════════════════════════

    pub fn clear_glyph(&mut self, id: impl Into<GlyphId>) -> Result<()> {
        self.edit_glyph(id.into(), GlyphMatrix::clear)
    }

    pub fn inverse_glyph(&mut self, id: impl Into<GlyphId>) -> Result<()> {
        self.edit_glyph(id.into(), GlyphMatrix::invert)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Flip
    // ═══════════════════════════════════════════════════════════════════════

    /// Flip glyph horizontally (mirror along vertical axis)
    pub fn flip_glyph_x(&mut self, id: impl Into<GlyphId>) -> Result<()> {
        self.edit_glyph(id.into(), GlyphMatrix::flip_horizontal)
    }

    /// Flip glyph vertically (mirror along horizontal axis)
    pub fn flip_glyph_y(&mut self, id: impl Into<GlyphId>) -> Result<()> {
        self.edit_glyph(id.into(), GlyphMatrix::flip_vertical)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Move / Slide
    // ═══════════════════════════════════════════════════════════════════════

    /// Move glyph content; pixels pushed past an edge are lost
    pub fn move_glyph(&mut self, id: impl Into<GlyphId>, dx: i32, dy: i32) -> Result<()> {
        self.edit_glyph(id.into(), |m| m.shift(dx, dy))
    }

    /// Slide glyph content; pixels pushed past an edge wrap around
    pub fn slide_glyph(&mut self, id: impl Into<GlyphId>, dx: i32, dy: i32) -> Result<()> {
        self.edit_glyph(id.into(), |m| m.slide(dx, dy))
    }
}
