//! Current glyph handling
//!
//! At most one glyph is current. Operations that destroy glyphs call
//! `check_current_glyph` to re-resolve a selection that no longer exists.

use dotmatrix_engine::{EngineError, GlyphId, Result};

use crate::{FontEvent, Glyph};

use super::FontModel;

impl FontModel {
    pub fn current_char(&self) -> Option<char> {
        self.current
    }

    pub fn current_glyph(&self) -> Option<&Glyph> {
        self.current.and_then(|ch| self.glyphs.get(&ch))
    }

    /// Make the glyph for `codepoint` current
    pub fn set_current_glyph(&mut self, codepoint: u32) -> Result<()> {
        let ch = char::from_u32(codepoint).ok_or(EngineError::InvalidCodepoint {
            codepoint: codepoint as i64,
        })?;
        if !self.glyphs.contains_key(&ch) {
            return Err(EngineError::not_found(GlyphId::Char(ch)));
        }
        self.select(Some(ch));
        Ok(())
    }

    /// Keep the current glyph if it still exists, otherwise select the first glyph (or none)
    pub fn check_current_glyph(&mut self) {
        if self.current.is_some_and(|ch| self.glyphs.contains_key(&ch)) {
            return;
        }
        let first = self.glyphs.keys().next().copied();
        self.select(first);
    }

    /// Select the first glyph of the first active charset, falling back to the first glyph
    pub fn reset_current_glyph(&mut self) {
        let first_active = self
            .catalog
            .iter()
            .filter(|charset| self.active_charsets.contains_key(charset.slug()))
            .flat_map(|charset| charset.chars().iter().copied())
            .find(|ch| self.glyphs.contains_key(ch));
        let target = first_active.or_else(|| self.glyphs.keys().next().copied());
        self.select(target);
    }

    pub(crate) fn select(&mut self, target: Option<char>) {
        self.current = target;
        self.emit(FontEvent::SelectionChanged(target));
    }
}
