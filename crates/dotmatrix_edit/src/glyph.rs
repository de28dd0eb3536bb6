//! Editable glyph: identity, pixel matrix and revision counter

use dotmatrix_engine::{codepoint, GlyphId, GlyphMatrix, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    id: GlyphId,
    matrix: GlyphMatrix,
    /// Bumped on every matrix mutation; lets observers detect stale copies
    revision: u64,
    /// Imported with a source matrix and not yet claimed by a displayed charset
    unsorted: bool,
}

impl Glyph {
    /// Create a blank glyph
    pub fn new(id: GlyphId, width: usize, height: usize) -> Self {
        Self {
            id,
            matrix: GlyphMatrix::new(width, height),
            revision: 0,
            unsorted: false,
        }
    }

    /// Create a blank glyph for a raw codepoint, rejecting invalid ones
    pub fn for_codepoint(codepoint: u32, width: usize, height: usize) -> Result<Self> {
        let ch = codepoint::to_char(codepoint as i64)?;
        Ok(Self::new(GlyphId::Char(ch), width, height))
    }

    /// Create a glyph from an imported matrix. It stays unsorted until a charset claims it.
    pub fn imported(id: GlyphId, matrix: GlyphMatrix) -> Self {
        Self {
            id,
            matrix,
            revision: 0,
            unsorted: true,
        }
    }

    pub fn id(&self) -> GlyphId {
        self.id
    }

    pub fn matrix(&self) -> &GlyphMatrix {
        &self.matrix
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_unsorted(&self) -> bool {
        self.unsorted
    }

    pub fn is_blank(&self) -> bool {
        self.matrix.is_blank()
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    /// Mutate the matrix and bump the revision
    pub(crate) fn edit<R>(&mut self, f: impl FnOnce(&mut GlyphMatrix) -> R) -> R {
        let result = f(&mut self.matrix);
        self.revision += 1;
        result
    }

    pub(crate) fn mark_sorted(&mut self) {
        self.unsorted = false;
    }
}
