//! Charset activation, import and sorting
//!
//! Which glyphs exist is controlled by the active charsets: activating one creates a
//! blank glyph for each member that is missing, deactivating one destroys the members
//! no other active charset lists. Imported glyphs exist outside that scheme until
//! `sort_glyphs` finds a charset for them.

use std::collections::{btree_map::Entry, BTreeSet};

use dotmatrix_engine::{codepoint, CharsetCatalog, CharsetSource, EngineError, GlyphMatrix, Result};

use crate::{FontEvent, Glyph};

use super::FontModel;

impl FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Catalog
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the catalog, activate its default charsets and reset the selection
    pub fn install_charsets(&mut self, catalog: CharsetCatalog) {
        self.catalog = catalog;
        let defaults: Vec<String> = self
            .catalog
            .iter()
            .filter(|charset| charset.is_default())
            .map(|charset| charset.slug().to_string())
            .collect();
        for slug in &defaults {
            if let Err(err) = self.materialize_charset(slug) {
                log::error!("Failed to build default charset '{slug}': {err}");
            }
        }
        self.sort_unsorted();
        self.reset_current_glyph();
    }

    /// Load a catalog from `source` and install it
    pub fn load_charsets(&mut self, source: &dyn CharsetSource) -> Result<()> {
        let catalog = source.load_charsets()?;
        log::info!("Loaded {} charsets", catalog.len());
        self.install_charsets(catalog);
        Ok(())
    }

    pub fn is_charset_active(&self, slug: &str) -> bool {
        self.active_charsets.contains_key(slug)
    }

    /// Slugs of the active charsets, sorted
    pub fn active_charsets(&self) -> impl Iterator<Item = &str> {
        self.active_charsets.keys().map(String::as_str)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Activation
    // ═══════════════════════════════════════════════════════════════════════

    /// Create the charset's missing glyphs and select its first one
    pub fn activate_charset(&mut self, slug: &str) -> Result<()> {
        self.materialize_charset(slug)?;
        let first = self.catalog.get(slug).and_then(|charset| charset.chars().first().copied());
        if let Some(first) = first {
            self.select(Some(first));
        }
        Ok(())
    }

    /// Destroy the charset's glyphs, except those another active charset lists.
    ///
    /// Deactivating a known but inactive charset does nothing.
    pub fn deactivate_charset(&mut self, slug: &str) -> Result<()> {
        if self.catalog.get(slug).is_none() {
            log::warn!("Unknown charset '{slug}'");
            return Err(EngineError::UnknownCharset { slug: slug.to_string() });
        }
        let Some(members) = self.active_charsets.remove(slug) else {
            return Ok(());
        };

        let still_listed: BTreeSet<char> = self.active_charsets.values().flatten().copied().collect();
        for ch in members.difference(&still_listed) {
            self.glyphs.remove(ch);
        }

        self.bump_version();
        self.emit(FontEvent::GlyphsRebuilt { version: self.version });
        self.check_current_glyph();
        Ok(())
    }

    fn materialize_charset(&mut self, slug: &str) -> Result<()> {
        let Some(charset) = self.catalog.get(slug) else {
            log::warn!("Unknown charset '{slug}'");
            return Err(EngineError::UnknownCharset { slug: slug.to_string() });
        };
        let members: BTreeSet<char> = charset.chars().iter().copied().collect();

        let (width, height) = (self.styles.default_width, self.styles.height);
        for &ch in &members {
            match self.glyphs.entry(ch) {
                Entry::Vacant(entry) => {
                    entry.insert(Glyph::new(ch.into(), width, height));
                }
                Entry::Occupied(mut entry) => entry.get_mut().mark_sorted(),
            }
        }
        self.active_charsets.insert(slug.to_string(), members);

        self.bump_version();
        self.emit(FontEvent::GlyphsRebuilt { version: self.version });
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Import / Sort
    // ═══════════════════════════════════════════════════════════════════════

    /// Add a glyph from a source matrix.
    ///
    /// The matrix height is matched to the font (rows added or removed at the top).
    /// A new glyph no active charset lists stays unsorted until `sort_glyphs` runs;
    /// an existing glyph just has its matrix replaced.
    pub fn import_glyph(&mut self, codepoint: u32, matrix: &GlyphMatrix) -> Result<()> {
        let ch = codepoint::to_char(codepoint as i64).inspect_err(|_| {
            log::warn!("Rejecting glyph for invalid codepoint {codepoint:#x}");
        })?;
        if self.glyphs.contains_key(&ch) {
            return self.set_glyph_matrix(ch, matrix);
        }

        let mut matrix = matrix.clone();
        matrix.sync_height_top(self.styles.height);
        let mut glyph = Glyph::imported(ch.into(), matrix);
        if self.active_charsets.values().any(|members| members.contains(&ch)) {
            glyph.mark_sorted();
        }
        self.glyphs.insert(ch, glyph);

        self.bump_version();
        self.emit(FontEvent::GlyphsRebuilt { version: self.version });
        Ok(())
    }

    /// Codepoints of glyphs not yet claimed by an active charset
    pub fn unsorted_glyphs(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.values().filter(|g| g.is_unsorted()).filter_map(|g| g.id().as_char())
    }

    /// Activate the first catalog charset listing each unsorted glyph, then select the
    /// first glyph.
    ///
    /// Each unsorted glyph is visited once, so glyphs no charset lists stay unsorted.
    pub fn sort_glyphs(&mut self) {
        self.sort_unsorted();
        let first = self.glyphs.keys().next().copied();
        self.select(first);
    }

    fn sort_unsorted(&mut self) {
        // chars listed by fewer charsets pick their set first so shared chars follow them
        let mut pending: Vec<char> = self.unsorted_glyphs().collect();
        pending.sort_by_key(|&ch| (self.catalog.count_containing(ch), ch));
        for ch in pending {
            // an earlier activation in this pass may have claimed it
            if !self.glyphs.get(&ch).is_some_and(Glyph::is_unsorted) {
                continue;
            }
            let slug = self.catalog.find_containing(ch).map(|charset| charset.slug().to_string());
            match slug {
                Some(slug) => {
                    if let Err(err) = self.materialize_charset(&slug) {
                        log::error!("Failed to build charset '{slug}': {err}");
                    }
                }
                None => log::warn!("No charset lists U+{:04X}, leaving it unsorted", ch as u32),
            }
        }
    }
}
