//! Font model module structure
//!
//! Split by operation family:
//! - `state.rs` - Struct definition, constructors, getters
//! - `glyph_operations.rs` - Single glyph operations (pixel, clear, flip, inverse, move, slide)
//! - `font_operations.rs` - Font-wide dimension edits (default matrix, top/bottom/left/right)
//! - `style_operations.rs` - Name and style setters
//! - `charset_operations.rs` - Charset activation, import and sorting
//! - `selection.rs` - Current glyph handling
//! - `clipboard.rs` - Copy and paste through the clipboard glyph
//! - `persistence.rs` - Snapshot save and load
//! - `text.rs` - Text composition and specimen listing
//! - `internal.rs` - Notification dispatch and shared mutation helpers

mod state;

mod charset_operations;
mod clipboard;
mod font_operations;
mod glyph_operations;
mod internal;
mod persistence;
mod selection;
mod style_operations;
mod text;

pub use state::FontModel;
