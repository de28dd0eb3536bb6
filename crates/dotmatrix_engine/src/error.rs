//! Unified error types for dotmatrix_engine

use thiserror::Error;

use crate::GlyphId;

/// Main error type for dot matrix font operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Identity Errors ===
    #[error("{codepoint} is not a valid codepoint")]
    InvalidCodepoint { codepoint: i64 },

    #[error("Glyph {id} not found")]
    NotFound { id: GlyphId },

    #[error("No glyph is currently selected")]
    NoCurrentGlyph,

    #[error("Unknown charset '{slug}'")]
    UnknownCharset { slug: String },

    // === Bounds Errors ===
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} matrix")]
    OutOfRange { x: i32, y: i32, width: usize, height: usize },

    // === Loading Errors ===
    #[error("Malformed snapshot: {message}")]
    MalformedSnapshot { message: String },

    #[error("Invalid charset catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // === External Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for dot matrix font operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a snapshot parse/shape error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSnapshot { message: msg.into() }
    }

    /// Create an error for a missing glyph
    pub fn not_found(id: impl Into<GlyphId>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }
}
