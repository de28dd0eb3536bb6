//! Editor options
//!
//! Persisted as TOML. Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! font_name = "My Dot Matrix Font"
//!
//! [defaults]
//! height = 10
//! defaultWidth = 7
//! baseline = 2
//!
//! [export]
//! units_per_cell = 100.0
//! style_name = "Dot Matrix"
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{EngineError, FontStyles, Result};

/// Output units per grid cell when exporting outlines
pub const DEFAULT_UNITS_PER_CELL: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Name given to a fresh font
    pub font_name: String,

    /// Styles of a fresh font
    pub defaults: FontStyles,

    pub export: ExportOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Size of one grid cell in output font units
    pub units_per_cell: f64,

    /// Style name written next to the family name
    pub style_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            font_name: "My Dot Matrix Font".to_string(),
            defaults: FontStyles::default(),
            export: ExportOptions::default(),
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            units_per_cell: DEFAULT_UNITS_PER_CELL,
            style_name: "Dot Matrix".to_string(),
        }
    }
}

impl EditorOptions {
    pub const FILE_NAME: &'static str = "options.toml";

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: EditorOptions = toml::from_str(text)?;
        options.validated()
    }

    /// Load options from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No options file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::InvalidConfig { message: e.to_string() })
    }

    pub fn store(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    fn validated(mut self) -> Result<Self> {
        if !(self.export.units_per_cell.is_finite() && self.export.units_per_cell > 0.0) {
            return Err(EngineError::InvalidConfig {
                message: format!("units_per_cell must be a positive number, got {}", self.export.units_per_cell),
            });
        }
        let sanitized = self.defaults.clone().sanitized();
        if sanitized != self.defaults {
            log::warn!("Clamped out-of-range default styles in options");
            self.defaults = sanitized;
        }
        Ok(self)
    }
}
