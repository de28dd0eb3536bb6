//! Font Model
//!
//! The single authoritative container for one dot matrix font. Views observe it and
//! call its operations; nothing else mutates glyph data.
//!
//! # Architecture Overview
//!
//! A font holds:
//! - **Glyphs**: a codepoint-keyed map of `Glyph`s. Every glyph has exactly `height` rows,
//!   widths may differ per glyph.
//! - **Clipboard**: a scratch glyph outside the map, kept at the same height and
//!   resized along with the font.
//! - **Charsets**: a catalog of available codepoint groups plus the set of active ones.
//!   Activating a charset creates blank glyphs for its members.
//! - **Styles**: `FontStyles` shared by every glyph.
//!
//! ## Width Lock
//!
//! | Operation          | Unlocked                     | Locked                                  |
//! |--------------------|------------------------------|-----------------------------------------|
//! | `edit_left/right`  | Current glyph only           | Every glyph, clipboard, `default_width` |
//! | `edit_top/bottom`  | Every glyph (height is font-wide in both modes)                        |
//!
//! ## Notifications
//!
//! Operations emit `FontEvent`s to registered `FontObserver`s after the mutation is
//! complete. Observers get a shared reference to the model and may read anything.
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters
//! - `glyph_operations.rs` - Single glyph operations
//! - `font_operations.rs` - Font-wide dimension edits
//! - `style_operations.rs` - Name and style setters
//! - `charset_operations.rs` - Charset activation, import and sorting
//! - `selection.rs` - Current glyph handling
//! - `clipboard.rs` - Copy and paste
//! - `persistence.rs` - Snapshot save and load
//! - `text.rs` - Text composition
//! - `internal.rs` - Notification dispatch and mutation helpers

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use dotmatrix_engine::{CharsetCatalog, EditorOptions, FontStyles, GlyphId, SPACE};

use crate::{FontObserver, Glyph};

pub struct FontModel {
    // ═══════════════════════════════════════════════════════════════════════
    // Font data
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) name: String,
    pub(crate) styles: FontStyles,
    pub(crate) glyphs: BTreeMap<char, Glyph>,
    pub(crate) clipboard: Glyph,

    // ═══════════════════════════════════════════════════════════════════════
    // Charsets
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) catalog: CharsetCatalog,
    /// slug -> membership
    pub(crate) active_charsets: BTreeMap<String, BTreeSet<char>>,

    // ═══════════════════════════════════════════════════════════════════════
    // Editor context
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) current: Option<char>,
    /// Value written by `paint_pixel`
    pub(crate) draw_mode: bool,

    // ═══════════════════════════════════════════════════════════════════════
    // Metadata
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) created_on: DateTime<Utc>,
    pub(crate) last_edit: DateTime<Utc>,
    /// Incremented whenever glyphs are created, destroyed or resized
    pub(crate) version: u64,

    pub(crate) observers: Vec<Box<dyn FontObserver>>,
}

impl Default for FontModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontModel")
            .field("name", &self.name)
            .field("styles", &self.styles)
            .field("glyphs", &self.glyphs.len())
            .field("current", &self.current)
            .field("version", &self.version)
            .finish()
    }
}

impl FontModel {
    /// Create an empty font with default styles and no charsets installed
    pub fn new() -> Self {
        Self::with_options(&EditorOptions::default())
    }

    /// Create an empty font from persisted editor options
    pub fn with_options(options: &EditorOptions) -> Self {
        let styles = options.defaults.clone().sanitized();
        let now = Utc::now();
        Self {
            name: options.font_name.clone(),
            clipboard: Glyph::new(GlyphId::Clipboard, styles.default_width, styles.height),
            styles,
            glyphs: BTreeMap::new(),
            catalog: CharsetCatalog::new(),
            active_charsets: BTreeMap::new(),
            current: None,
            draw_mode: true,
            created_on: now,
            last_edit: now,
            version: 0,
            observers: Vec::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn styles(&self) -> &FontStyles {
        &self.styles
    }

    pub fn height(&self) -> usize {
        self.styles.height
    }

    pub fn default_width(&self) -> usize {
        self.styles.default_width
    }

    pub fn baseline(&self) -> usize {
        self.styles.baseline
    }

    pub fn tracking(&self) -> usize {
        self.styles.tracking
    }

    pub fn width_lock(&self) -> bool {
        self.styles.width_lock
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    /// Iterate glyphs in codepoint order
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    pub fn codepoints(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    pub fn contains_glyph(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn clipboard(&self) -> &Glyph {
        &self.clipboard
    }

    pub fn catalog(&self) -> &CharsetCatalog {
        &self.catalog
    }

    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, value: bool) {
        self.draw_mode = value;
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    pub fn last_edit(&self) -> DateTime<Utc> {
        self.last_edit
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of glyphs with at least one lit pixel, plus the space glyph if present
    pub fn glyph_count(&self) -> usize {
        self.glyphs.values().filter(|g| !g.is_blank() || g.id() == GlyphId::Char(SPACE)).count()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Observers
    // ═══════════════════════════════════════════════════════════════════════

    pub fn add_observer(&mut self, observer: Box<dyn FontObserver>) {
        self.observers.push(observer);
    }

    /// Remove every observer, returning them
    pub fn take_observers(&mut self) -> Vec<Box<dyn FontObserver>> {
        std::mem::take(&mut self.observers)
    }
}
