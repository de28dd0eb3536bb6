//! Copy and paste through the clipboard glyph
//!
//! The clipboard is an ordinary glyph outside the glyph map. Both directions copy
//! the whole matrix, nothing is shared.

use dotmatrix_engine::{GlyphId, Result};

use super::FontModel;

impl FontModel {
    /// Copy the current glyph into the clipboard
    pub fn copy_to_clipboard(&mut self) -> Result<()> {
        let id = self.current_id()?;
        let matrix = self.glyph_by_id(id)?.matrix().clone();
        self.edit_glyph(GlyphId::Clipboard, |m| m.set_all(&matrix))
    }

    /// Overwrite the current glyph with the clipboard
    pub fn paste_from_clipboard(&mut self) -> Result<()> {
        let id = self.current_id()?;
        let matrix = self.clipboard.matrix().clone();
        self.edit_glyph(id, |m| m.set_all(&matrix))
    }
}
