//! Data layer for dot matrix fonts
//!
//! Leaf types shared by the editing model:
//! - `GlyphMatrix` - fixed-shape on/off pixel grid of one glyph
//! - `GlyphId` - codepoint identity (or the clipboard scratch buffer)
//! - `FontStyles` - font-wide styling and layout parameters
//! - `CharsetCatalog` - curated codepoint groups
//! - `FontSnapshot` - the plain-data save format
//! - `EditorOptions` - persisted defaults

mod error;
pub use error::*;

pub mod codepoint;
pub use codepoint::{is_valid_codepoint, GlyphId, CLIPBOARD_ID, SPACE};

mod matrix;
pub use matrix::*;

mod styles;
pub use styles::*;

pub mod charset;
pub use charset::{builtin_catalog, BuiltinCharsets, Charset, CharsetCatalog, CharsetSource};

mod snapshot;
pub use snapshot::*;

mod options;
pub use options::*;
