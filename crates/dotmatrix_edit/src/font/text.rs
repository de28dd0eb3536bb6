//! Text composition and specimen listing

use std::collections::BTreeSet;

use dotmatrix_engine::GlyphMatrix;

use super::FontModel;

impl FontModel {
    /// Lay out `text` as one matrix, the way a dot matrix display would show it.
    ///
    /// Each character contributes its glyph followed by `tracking` blank columns;
    /// characters without a glyph contribute `default_width + tracking` blank columns.
    /// Returns `None` for empty text.
    pub fn compose_text(&self, text: &str) -> Option<GlyphMatrix> {
        let tracking = self.styles.tracking;
        let blank = self.styles.default_width + tracking;
        let mut rows: Vec<Vec<bool>> = vec![Vec::new(); self.styles.height];

        for ch in text.chars() {
            match self.glyphs.get(&ch) {
                Some(glyph) => {
                    for (row, src) in rows.iter_mut().zip(glyph.matrix().rows()) {
                        row.extend_from_slice(src);
                        row.resize(row.len() + tracking, false);
                    }
                }
                None => {
                    for row in rows.iter_mut() {
                        row.resize(row.len() + blank, false);
                    }
                }
            }
        }
        GlyphMatrix::from_rows(&rows)
    }

    /// Non-empty glyphs in catalog order, followed by any the catalog does not list
    pub fn specimen(&self) -> Vec<char> {
        let mut seen = BTreeSet::new();
        let mut result = Vec::new();
        let listed = self.catalog.iter().flat_map(|charset| charset.chars().iter().copied());
        for ch in listed.chain(self.glyphs.keys().copied()) {
            if self.glyphs.get(&ch).is_some_and(|g| !g.is_blank()) && seen.insert(ch) {
                result.push(ch);
            }
        }
        result
    }
}
