//! Charset catalog shipped with the editor

use once_cell::sync::Lazy;

use super::{CharsetCatalog, CharsetSource};
use crate::Result;

const BUILTIN_CHARSETS: &str = include_str!("../../data/charsets.json");

static BUILTIN_CATALOG: Lazy<CharsetCatalog> = Lazy::new(|| match CharsetCatalog::from_json(BUILTIN_CHARSETS) {
    Ok(catalog) => catalog,
    Err(err) => {
        log::error!("Built-in charset catalog is invalid: {}", err);
        CharsetCatalog::new()
    }
});

/// The built-in catalog: Roman letters, numerals, punctuation, arrows, math, currency and ligatures
pub fn builtin_catalog() -> &'static CharsetCatalog {
    &BUILTIN_CATALOG
}

/// `CharsetSource` backed by the built-in catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCharsets;

impl CharsetSource for BuiltinCharsets {
    fn load_charsets(&self) -> Result<CharsetCatalog> {
        Ok(builtin_catalog().clone())
    }
}
