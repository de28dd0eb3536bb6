//! Typed change notifications
//!
//! Observers are notified synchronously once an operation has completed, so the model
//! they are handed is already consistent (uniform glyph height, clamped baseline).

use bitflags::bitflags;
use dotmatrix_engine::GlyphId;

use crate::FontModel;

bitflags! {
    /// Font fields touched by a change
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleChanges: u32 {
        const NAME          = 1 << 0;
        const PIXEL_SIZE    = 1 << 1;
        const PIXEL_SHAPE   = 1 << 2;
        const HEIGHT        = 1 << 3;
        const DEFAULT_WIDTH = 1 << 4;
        const BASELINE      = 1 << 5;
        const SHOW_BASELINE = 1 << 6;
        const TRACKING      = 1 << 7;
        const WIDTH_LOCK    = 1 << 8;
        const THEME         = 1 << 9;
    }
}

/// Receives change notifications from a `FontModel`.
///
/// All methods default to doing nothing.
pub trait FontObserver {
    /// A glyph's matrix changed; `revision` is its new revision
    fn on_glyph_changed(&mut self, _font: &FontModel, _id: GlyphId, _revision: u64) {}

    /// Glyphs were created or destroyed; `version` is the new font version
    fn on_glyphs_rebuilt(&mut self, _font: &FontModel, _version: u64) {}

    /// Styles (or the name) were set; re-broadcast even when a value was rejected
    fn on_style_changed(&mut self, _font: &FontModel, _fields: StyleChanges) {}

    /// The current glyph changed
    fn on_selection_changed(&mut self, _font: &FontModel, _current: Option<char>) {}
}

/// A notification, as queued by model operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontEvent {
    GlyphChanged { id: GlyphId, revision: u64 },
    GlyphsRebuilt { version: u64 },
    StyleChanged(StyleChanges),
    SelectionChanged(Option<char>),
}

impl FontEvent {
    pub(crate) fn dispatch(&self, observer: &mut dyn FontObserver, font: &FontModel) {
        match *self {
            FontEvent::GlyphChanged { id, revision } => observer.on_glyph_changed(font, id, revision),
            FontEvent::GlyphsRebuilt { version } => observer.on_glyphs_rebuilt(font, version),
            FontEvent::StyleChanged(fields) => observer.on_style_changed(font, fields),
            FontEvent::SelectionChanged(current) => observer.on_selection_changed(font, current),
        }
    }
}
