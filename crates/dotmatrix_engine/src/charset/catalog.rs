//! Validated charset definitions

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{codepoint, CharsetSource, EngineError, Result};

/// Raw charset entry as stored in catalog files
#[derive(Debug, Deserialize)]
struct CharsetEntry {
    slug: String,
    name: String,
    #[serde(default)]
    default: bool,
    chars: Vec<i64>,
}

/// A named, ordered set of characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    slug: String,
    name: String,
    default: bool,
    chars: Vec<char>,
}

impl Charset {
    /// Build a charset; duplicate characters keep their first position
    pub fn new(slug: impl Into<String>, name: impl Into<String>, default: bool, chars: impl IntoIterator<Item = char>) -> Self {
        let mut seen = HashSet::new();
        let chars = chars.into_iter().filter(|ch| seen.insert(*ch)).collect();
        Self {
            slug: slug.into(),
            name: name.into(),
            default,
            chars,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the charset is switched on for a fresh font
    pub fn is_default(&self) -> bool {
        self.default
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

/// Ordered collection of charsets, unique by slug
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharsetCatalog {
    charsets: Vec<Charset>,
}

impl CharsetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON array of `{slug, name, default?, chars}` entries
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<CharsetEntry> = serde_json::from_str(text).map_err(|e| EngineError::InvalidCatalog { message: e.to_string() })?;

        let mut catalog = Self::new();
        for entry in entries {
            let mut chars = Vec::with_capacity(entry.chars.len());
            for cp in entry.chars {
                match codepoint::to_char(cp) {
                    Ok(ch) => chars.push(ch),
                    Err(_) => log::warn!("Charset '{}' lists invalid codepoint {}, skipping it", entry.slug, cp),
                }
            }
            catalog.push(Charset::new(entry.slug, entry.name, entry.default, chars))?;
        }
        Ok(catalog)
    }

    /// Read a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Append a charset, rejecting duplicate slugs
    pub fn push(&mut self, charset: Charset) -> Result<()> {
        if self.get(charset.slug()).is_some() {
            return Err(EngineError::InvalidCatalog {
                message: format!("duplicate charset '{}'", charset.slug()),
            });
        }
        self.charsets.push(charset);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&Charset> {
        self.charsets.iter().find(|c| c.slug == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Charset> {
        self.charsets.iter()
    }

    pub fn len(&self) -> usize {
        self.charsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charsets.is_empty()
    }

    /// First charset in catalog order that lists `ch`
    pub fn find_containing(&self, ch: char) -> Option<&Charset> {
        self.charsets.iter().find(|c| c.contains(ch))
    }

    /// Number of charsets that list `ch`
    pub fn count_containing(&self, ch: char) -> usize {
        self.charsets.iter().filter(|c| c.contains(ch)).count()
    }
}

impl CharsetSource for CharsetCatalog {
    fn load_charsets(&self) -> Result<CharsetCatalog> {
        Ok(self.clone())
    }
}
