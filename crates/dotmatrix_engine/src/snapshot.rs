//! Plain-data font snapshot (the save file format)
//!
//! ```json
//! { "name": "My Dot Matrix Font",
//!   "styles": { "pixelSize": 98, "pixelShape": 0, "height": 10, "defaultWidth": 7,
//!               "baseline": 2, "showBaseline": false, "tracking": 1, "widthLock": false },
//!   "metadata": { "createdOn": 1700000000000, "lastEdit": 1700000000000 },
//!   "glyphs": { "65": { "matrix": [[0, 1, 0], [1, 0, 1]] } } }
//! ```
//!
//! Every field is optional on read; missing style fields keep the live value.
//! Decoding is split from applying so a bad file is rejected before any live state changes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{codepoint, EngineError, FontStyles, GlyphMatrix, PixelShape, Result, Theme};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub styles: SnapshotStyles,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SnapshotMetadata>,

    /// Keyed by decimal codepoint
    #[serde(default)]
    pub glyphs: BTreeMap<String, SnapshotGlyph>,
}

/// Style record as found in a file. Numbers are kept wide so out-of-range values
/// can be reported and ignored instead of failing the parse.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_shape: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_baseline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_lock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Timestamps in milliseconds since the Unix epoch
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edit: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotGlyph {
    /// Rows of 0/1 cells, top row first
    #[serde(default)]
    pub matrix: Vec<Vec<u8>>,
}

impl SnapshotGlyph {
    pub fn from_matrix(matrix: &GlyphMatrix) -> Self {
        Self {
            matrix: matrix.rows().map(|row| row.iter().map(|&p| u8::from(p)).collect()).collect(),
        }
    }

    /// Decode the cells; `None` for an empty matrix
    pub fn decode(&self) -> Result<Option<GlyphMatrix>> {
        let mut rows = Vec::with_capacity(self.matrix.len());
        for (y, row) in self.matrix.iter().enumerate() {
            let mut decoded = Vec::with_capacity(row.len());
            for (x, &cell) in row.iter().enumerate() {
                match cell {
                    0 => decoded.push(false),
                    1 => decoded.push(true),
                    other => return Err(EngineError::malformed(format!("cell ({x}, {y}) has value {other}, expected 0 or 1"))),
                }
            }
            rows.push(decoded);
        }
        Ok(GlyphMatrix::from_rows(&rows))
    }
}

/// Style values from a snapshot merged onto a base record.
///
/// Out-of-range values keep the base value; the names of ignored fields are returned
/// alongside so callers can log them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedStyles {
    pub styles: FontStyles,
    pub ignored: Vec<&'static str>,
}

impl SnapshotStyles {
    pub fn from_styles(styles: &FontStyles) -> Self {
        Self {
            pixel_size: Some(styles.pixel_size as i64),
            pixel_shape: Some(u8::from(styles.pixel_shape) as i64),
            height: Some(styles.height as i64),
            default_width: Some(styles.default_width as i64),
            baseline: Some(styles.baseline as i64),
            show_baseline: Some(styles.show_baseline),
            tracking: Some(styles.tracking as i64),
            width_lock: Some(styles.width_lock),
            theme: Some(styles.theme.name().to_string()),
        }
    }

    /// Overlay the present, valid fields onto `base`.
    ///
    /// Height and width are applied before the baseline so the baseline is checked
    /// against the new height.
    pub fn merge_onto(&self, base: &FontStyles) -> MergedStyles {
        let mut styles = base.clone();
        let mut ignored = Vec::new();

        if let Some(v) = self.pixel_size {
            if FontStyles::accepts_pixel_size(v) {
                styles.pixel_size = v as u8;
            } else {
                ignored.push("pixelSize");
            }
        }
        if let Some(v) = self.pixel_shape {
            match u8::try_from(v).ok().and_then(|v| PixelShape::try_from(v).ok()) {
                Some(shape) => styles.pixel_shape = shape,
                None => ignored.push("pixelShape"),
            }
        }
        if let Some(v) = self.height {
            if FontStyles::accepts_height(v) {
                styles.height = v as usize;
            } else {
                ignored.push("height");
            }
        }
        if let Some(v) = self.default_width {
            if FontStyles::accepts_width(v) {
                styles.default_width = v as usize;
            } else {
                ignored.push("defaultWidth");
            }
        }
        if let Some(v) = self.tracking {
            if FontStyles::accepts_tracking(v) {
                styles.tracking = v as usize;
            } else {
                ignored.push("tracking");
            }
        }
        if let Some(v) = self.baseline {
            if styles.accepts_baseline(v) {
                styles.baseline = v as usize;
            } else {
                ignored.push("baseline");
            }
        }
        styles.baseline = styles.baseline.min(styles.height);

        if let Some(v) = self.show_baseline {
            styles.show_baseline = v;
        }
        if let Some(v) = self.width_lock {
            styles.width_lock = v;
        }
        if let Some(theme) = &self.theme {
            styles.theme = Theme::from_name(theme);
        }

        MergedStyles { styles, ignored }
    }
}

impl FontSnapshot {
    /// Parse a snapshot; any JSON or shape error becomes `MalformedSnapshot`
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EngineError::malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode every glyph entry in codepoint order.
    ///
    /// Fails on the first key that is not a valid codepoint or matrix that holds a
    /// value other than 0/1. Empty matrices decode to `None`.
    pub fn decode_glyphs(&self) -> Result<Vec<(char, Option<GlyphMatrix>)>> {
        let mut glyphs = Vec::with_capacity(self.glyphs.len());
        for (key, glyph) in &self.glyphs {
            let codepoint: i64 = key
                .trim()
                .parse()
                .map_err(|_| EngineError::malformed(format!("glyph key '{key}' is not a codepoint")))?;
            let ch = codepoint::to_char(codepoint).map_err(|_| EngineError::malformed(format!("glyph key '{key}' is not a valid codepoint")))?;
            let matrix = glyph
                .decode()
                .map_err(|e| EngineError::malformed(format!("glyph {key}: {e}")))?;
            glyphs.push((ch, matrix));
        }
        glyphs.sort_by_key(|(ch, _)| *ch);
        Ok(glyphs)
    }
}
