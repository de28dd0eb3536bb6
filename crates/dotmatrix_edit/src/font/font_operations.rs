//! Font-level dimension operations
//!
//! Height is font-wide: every row edit touches every glyph and the clipboard.
//! Width edits follow the width lock (see `state.rs`).

use dotmatrix_engine::{GlyphMatrix, Result, MAX_FONT_HEIGHT, MAX_FONT_WIDTH, MIN_FONT_HEIGHT, MIN_FONT_WIDTH};

use crate::{FontEvent, StyleChanges};

use super::{internal::clamp_delta, FontModel};

impl FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Resize
    // ═══════════════════════════════════════════════════════════════════════

    /// Set the font height and the default glyph width.
    ///
    /// Every glyph (and the clipboard) gains or loses rows at the top and columns at the
    /// right edge by the width delta. Content lost by shrinking is not checked.
    pub fn set_default_matrix(&mut self, height: usize, width: usize) {
        let height = height.clamp(MIN_FONT_HEIGHT, MAX_FONT_HEIGHT);
        let width = width.clamp(MIN_FONT_WIDTH, MAX_FONT_WIDTH);
        let width_delta = clamp_delta(width as i64 - self.styles.default_width as i64);

        let mut changes = StyleChanges::HEIGHT | StyleChanges::DEFAULT_WIDTH;
        self.styles.height = height;
        self.styles.default_width = width;
        if self.styles.baseline > height {
            self.styles.baseline = height;
            changes |= StyleChanges::BASELINE;
        }

        self.edit_every_glyph(|m| {
            m.sync_height_top(height);
            m.edit_right(width_delta);
        });
        self.emit(FontEvent::StyleChanged(changes));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Rows
    // ═══════════════════════════════════════════════════════════════════════

    /// Add (positive) or remove (negative) rows at the top of every glyph
    pub fn edit_top(&mut self, rows: i32) {
        let height = self.height_after(rows);
        let mut changes = StyleChanges::HEIGHT;
        self.styles.height = height;
        if self.styles.baseline > height {
            self.styles.baseline = height;
            changes |= StyleChanges::BASELINE;
        }

        self.edit_every_glyph(|m| m.sync_height_top(height));
        self.emit(FontEvent::StyleChanged(changes));
    }

    /// Add (positive) or remove (negative) rows at the bottom of every glyph.
    ///
    /// The baseline moves with the bottom edge and is clamped into `0..=height`.
    pub fn edit_bottom(&mut self, rows: i32) {
        let height = self.height_after(rows);
        let baseline = (self.styles.baseline as i64 + rows as i64).clamp(0, height as i64) as usize;
        self.styles.height = height;
        self.styles.baseline = baseline;

        self.edit_every_glyph(|m| m.sync_height_bottom(height));
        self.emit(FontEvent::StyleChanged(StyleChanges::HEIGHT | StyleChanges::BASELINE));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Columns
    // ═══════════════════════════════════════════════════════════════════════

    /// Add or remove columns at the left edge.
    ///
    /// With the width lock on this applies to every glyph and `default_width`; otherwise
    /// only to the current glyph, failing with `NoCurrentGlyph` when there is none.
    pub fn edit_left(&mut self, cols: i32) -> Result<()> {
        self.edit_width(cols, GlyphMatrix::edit_left)
    }

    /// Add or remove columns at the right edge. Follows the width lock like `edit_left`.
    pub fn edit_right(&mut self, cols: i32) -> Result<()> {
        self.edit_width(cols, GlyphMatrix::edit_right)
    }

    fn edit_width(&mut self, cols: i32, edit: fn(&mut GlyphMatrix, i32)) -> Result<()> {
        if !self.styles.width_lock {
            let id = self.current_id()?;
            return self.edit_glyph(id, |m| edit(m, cols));
        }

        let cols = cols.min(clamp_delta(MAX_FONT_WIDTH as i64 - self.styles.default_width as i64));
        let width = (self.styles.default_width as i64 + cols as i64).max(MIN_FONT_WIDTH as i64) as usize;
        self.styles.default_width = width;
        self.edit_every_glyph(|m| edit(m, cols));
        self.emit(FontEvent::StyleChanged(StyleChanges::DEFAULT_WIDTH));
        Ok(())
    }

    fn height_after(&self, rows: i32) -> usize {
        (self.styles.height as i64 + rows as i64).clamp(MIN_FONT_HEIGHT as i64, MAX_FONT_HEIGHT as i64) as usize
    }
}
