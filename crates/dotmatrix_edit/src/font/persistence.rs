//! Snapshot save and load
//!
//! Loading decodes and validates the whole snapshot before touching the model, so a
//! malformed file leaves the live font unchanged.

use chrono::{DateTime, Utc};
use dotmatrix_engine::{FontSnapshot, GlyphMatrix, Result, SnapshotGlyph, SnapshotMetadata, SnapshotStyles};

use crate::{FontEvent, Glyph, StyleChanges};

use super::{internal::clamp_delta, FontModel};

impl FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Save
    // ═══════════════════════════════════════════════════════════════════════

    pub fn to_snapshot(&self) -> FontSnapshot {
        FontSnapshot {
            name: Some(self.name.clone()),
            styles: SnapshotStyles::from_styles(&self.styles),
            metadata: Some(SnapshotMetadata {
                created_on: Some(self.created_on.timestamp_millis()),
                last_edit: Some(self.last_edit.timestamp_millis()),
            }),
            glyphs: self
                .glyphs
                .iter()
                .map(|(ch, glyph)| ((*ch as u32).to_string(), SnapshotGlyph::from_matrix(glyph.matrix())))
                .collect(),
        }
    }

    pub fn save_json(&self) -> Result<String> {
        let json = self.to_snapshot().to_json()?;
        log::debug!("Saved font '{}' with {} glyphs", self.name, self.glyphs.len());
        Ok(json)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Load
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the whole font with the snapshot's content.
    ///
    /// Missing style fields keep their current value; out-of-range ones are ignored
    /// with a warning. Glyph matrices are matched to the loaded height, then
    /// `sort_glyphs` assigns them to charsets.
    pub fn load(&mut self, snapshot: &FontSnapshot) -> Result<()> {
        let decoded = snapshot.decode_glyphs()?;
        let merged = snapshot.styles.merge_onto(&self.styles);
        for field in &merged.ignored {
            log::warn!("Ignoring out-of-range '{field}' in snapshot");
        }
        let metadata = snapshot.metadata.clone().unwrap_or_default();
        let now = Utc::now();
        let created_on = metadata.created_on.and_then(DateTime::<Utc>::from_timestamp_millis).unwrap_or(now);
        let last_edit = metadata.last_edit.and_then(DateTime::<Utc>::from_timestamp_millis).unwrap_or(now);

        // apply
        let styles = merged.styles;
        let width_delta = clamp_delta(styles.default_width as i64 - self.styles.default_width as i64);
        let (width, height) = (styles.default_width, styles.height);

        self.glyphs.clear();
        self.active_charsets.clear();
        self.current = None;
        if let Some(name) = &snapshot.name {
            self.name = name.clone();
        }
        self.styles = styles;
        self.clipboard.edit(|m| {
            m.sync_height_top(height);
            m.edit_right(width_delta);
        });
        for (ch, matrix) in decoded {
            let mut matrix = matrix.unwrap_or_else(|| GlyphMatrix::new(width, height));
            matrix.sync_height_top(height);
            self.glyphs.insert(ch, Glyph::imported(ch.into(), matrix));
        }
        self.version += 1;
        self.created_on = created_on;
        log::info!("Loaded font '{}' with {} glyphs", self.name, self.glyphs.len());

        self.emit_all(&[
            FontEvent::StyleChanged(StyleChanges::all()),
            FontEvent::GlyphsRebuilt { version: self.version },
        ]);
        self.sort_glyphs();
        // sorting counts as an edit; the loaded timestamp wins
        self.last_edit = last_edit;
        Ok(())
    }

    /// Parse and load a JSON snapshot
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        let snapshot = FontSnapshot::from_json(text)?;
        self.load(&snapshot)
    }
}
