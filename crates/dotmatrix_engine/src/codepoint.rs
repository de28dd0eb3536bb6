//! Glyph identity
//!
//! A glyph is either a character of the font (identified by its codepoint) or the
//! single scratch buffer used for copy and paste.

use std::fmt;
use std::str::FromStr;

use crate::{EngineError, Result};

/// Reserved identity of the scratch buffer glyph
pub const CLIPBOARD_ID: &str = "clipboard";

/// The space character is always counted as present, even when blank
pub const SPACE: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlyphId {
    /// A font character. Holding a `char` keeps every identity a valid scalar value.
    Char(char),
    /// The copy/paste scratch buffer
    Clipboard,
}

impl GlyphId {
    /// Validate a raw codepoint and turn it into a glyph identity
    pub fn from_codepoint(codepoint: u32) -> Result<Self> {
        to_char(codepoint as i64).map(GlyphId::Char)
    }

    /// Numeric codepoint, `None` for the clipboard
    pub fn codepoint(&self) -> Option<u32> {
        match self {
            GlyphId::Char(ch) => Some(*ch as u32),
            GlyphId::Clipboard => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            GlyphId::Char(ch) => Some(*ch),
            GlyphId::Clipboard => None,
        }
    }

    pub fn is_clipboard(&self) -> bool {
        matches!(self, GlyphId::Clipboard)
    }
}

impl From<char> for GlyphId {
    fn from(ch: char) -> Self {
        GlyphId::Char(ch)
    }
}

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphId::Char(ch) => write!(f, "{}", *ch as u32),
            GlyphId::Clipboard => write!(f, "{CLIPBOARD_ID}"),
        }
    }
}

impl FromStr for GlyphId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == CLIPBOARD_ID {
            return Ok(GlyphId::Clipboard);
        }
        let codepoint: i64 = s.parse().map_err(|_| EngineError::generic(format!("'{s}' is not a glyph identity")))?;
        to_char(codepoint).map(GlyphId::Char)
    }
}

/// Check whether a number names a character of the target encoding
pub fn is_valid_codepoint(codepoint: i64) -> bool {
    u32::try_from(codepoint).ok().and_then(char::from_u32).is_some()
}

/// Convert a number into a character, rejecting surrogates and values past U+10FFFF
pub fn to_char(codepoint: i64) -> Result<char> {
    u32::try_from(codepoint)
        .ok()
        .and_then(char::from_u32)
        .ok_or(EngineError::InvalidCodepoint { codepoint })
}
