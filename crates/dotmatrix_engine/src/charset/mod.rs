//! Character set registry
//!
//! Charsets are curated, ordered lists of codepoints that can be activated together.
//! The catalog itself is static data:
//! - `Charset` / `CharsetCatalog` - validated, ordered charset definitions
//! - `CharsetSource` - collaborator that produces a catalog
//! - `builtin` - the catalog shipped with the editor

mod builtin;
mod catalog;

pub use builtin::{builtin_catalog, BuiltinCharsets};
pub use catalog::{Charset, CharsetCatalog};

use crate::Result;

/// Collaborator that loads the charset catalog, once, before any charset operation.
pub trait CharsetSource {
    fn load_charsets(&self) -> Result<CharsetCatalog>;
}
