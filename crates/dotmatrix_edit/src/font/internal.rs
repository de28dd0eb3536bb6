//! Internal helpers shared by the operation files
//!
//! Every mutation of glyph data goes through `edit_glyph` or `edit_every_glyph` so that
//! revisions, `last_edit` and notifications stay in step.

use chrono::Utc;
use dotmatrix_engine::{EngineError, GlyphId, GlyphMatrix, Result};

use crate::{FontEvent, Glyph};

use super::FontModel;

impl FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Notification
    // ═══════════════════════════════════════════════════════════════════════

    pub(crate) fn emit(&mut self, event: FontEvent) {
        self.emit_all(&[event]);
    }

    /// Deliver events to every observer in registration order.
    ///
    /// The observer list is moved out for the duration of the dispatch so each observer
    /// can be handed `&self`.
    pub(crate) fn emit_all(&mut self, events: &[FontEvent]) {
        if self.observers.is_empty() || events.is_empty() {
            return;
        }
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            for event in events {
                event.dispatch(observer.as_mut(), self);
            }
        }
        self.observers = observers;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Bookkeeping
    // ═══════════════════════════════════════════════════════════════════════

    pub(crate) fn touch(&mut self) {
        self.last_edit = Utc::now();
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
        self.touch();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glyph access
    // ═══════════════════════════════════════════════════════════════════════

    pub(crate) fn glyph_mut(&mut self, id: GlyphId) -> Result<&mut Glyph> {
        match id {
            GlyphId::Clipboard => Ok(&mut self.clipboard),
            GlyphId::Char(ch) => self.glyphs.get_mut(&ch).ok_or(EngineError::NotFound { id }),
        }
    }

    /// Mutate one glyph's matrix, bump its revision and notify
    pub(crate) fn edit_glyph<R>(&mut self, id: GlyphId, f: impl FnOnce(&mut GlyphMatrix) -> R) -> Result<R> {
        let glyph = self.glyph_mut(id)?;
        let result = glyph.edit(f);
        let revision = glyph.revision();
        self.touch();
        self.emit(FontEvent::GlyphChanged { id, revision });
        Ok(result)
    }

    /// Apply the same matrix edit to every glyph and the clipboard.
    ///
    /// The edit must keep every matrix at the same height; callers update
    /// `styles.height` alongside.
    pub(crate) fn edit_every_glyph(&mut self, mut f: impl FnMut(&mut GlyphMatrix)) {
        let mut events = Vec::with_capacity(self.glyphs.len() + 1);
        for glyph in self.glyphs.values_mut().chain(std::iter::once(&mut self.clipboard)) {
            glyph.edit(&mut f);
            events.push(FontEvent::GlyphChanged {
                id: glyph.id(),
                revision: glyph.revision(),
            });
        }
        self.bump_version();
        self.emit_all(&events);
    }

    pub(crate) fn current_id(&self) -> Result<GlyphId> {
        self.current.map(GlyphId::Char).ok_or(EngineError::NoCurrentGlyph)
    }
}

/// Narrow a dimension difference to the signed delta the matrix edits take
pub(super) fn clamp_delta(delta: i64) -> i32 {
    delta.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
