//! Glyph pixel matrix
//!
//! A fixed-shape, row-major grid of on/off dots. Rows can't become jagged because the
//! storage is a single flat vector with an explicit width and height, and neither
//! dimension ever drops below 1.
//!
//! Row 0 is the top of the glyph, column 0 its left edge.

use crate::{EngineError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GlyphMatrix {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl Default for GlyphMatrix {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl GlyphMatrix {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a blank matrix; both dimensions are clamped to at least 1
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// Rows shorter than the widest row are padded with off pixels.
    /// Returns `None` when there is no row or every row is empty.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        if width == 0 {
            return None;
        }

        let mut pixels = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            pixels.extend_from_slice(row);
            pixels.extend(std::iter::repeat(false).take(width - row.len()));
        }

        Some(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row `y`, `None` below the last row
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        self.rows().nth(y)
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[bool]> + ExactSizeIterator {
        self.pixels.chunks_exact(self.width)
    }

    /// Pixel value, `None` outside the matrix
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Pixel value, failing with `OutOfRange` outside the matrix
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<bool> {
        self.checked_index(x, y).map(|i| self.pixels[i])
    }

    /// Iterate over the (x, y) positions of all lit pixels, row by row
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| (i % width, i / width))
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// True when no pixel is lit
    pub fn is_blank(&self) -> bool {
        !self.pixels.iter().any(|&p| p)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        self.index(x, y).ok_or(EngineError::OutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pixel Editing
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_pixel(&mut self, x: i32, y: i32, value: bool) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.pixels[i] = value;
        Ok(())
    }

    /// Flip a single pixel, returning its new value
    pub fn toggle_pixel(&mut self, x: i32, y: i32) -> Result<bool> {
        let i = self.checked_index(x, y)?;
        self.pixels[i] = !self.pixels[i];
        Ok(self.pixels[i])
    }

    /// Replace the whole matrix with a deep copy of `other`, shape included
    pub fn set_all(&mut self, other: &GlyphMatrix) {
        self.clone_from(other);
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    pub fn invert(&mut self) {
        for p in &mut self.pixels {
            *p = !*p;
        }
    }

    /// Mirror along the vertical axis (reverse every row)
    pub fn flip_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }

    /// Mirror along the horizontal axis (reverse row order)
    pub fn flip_vertical(&mut self) {
        let flipped: Vec<bool> = self.rows().rev().flatten().copied().collect();
        self.pixels = flipped;
    }

    /// Move content by (dx, dy); pixels pushed past an edge are lost
    pub fn shift(&mut self, dx: i32, dy: i32) {
        let mut shifted = vec![false; self.pixels.len()];
        for (x, y) in self.lit_pixels() {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height {
                shifted[ny as usize * self.width + nx as usize] = true;
            }
        }
        self.pixels = shifted;
    }

    /// Rotate content by (dx, dy); pixels pushed past an edge re-enter on the opposite side
    pub fn slide(&mut self, dx: i32, dy: i32) {
        let (w, h) = (self.width as i64, self.height as i64);
        let mut slid = vec![false; self.pixels.len()];
        for (x, y) in self.lit_pixels() {
            let nx = (x as i64 + dx as i64).rem_euclid(w) as usize;
            let ny = (y as i64 + dy as i64).rem_euclid(h) as usize;
            slid[ny * self.width + nx] = true;
        }
        self.pixels = slid;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Row Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Prepend `n` blank rows
    pub fn grow_top(&mut self, n: usize) {
        self.pixels.splice(0..0, std::iter::repeat(false).take(n * self.width));
        self.height += n;
    }

    /// Remove up to `n` rows from the top, keeping at least one row.
    /// Returns the number of rows removed.
    pub fn shrink_top(&mut self, n: usize) -> usize {
        let n = n.min(self.height - 1);
        self.pixels.drain(0..n * self.width);
        self.height -= n;
        n
    }

    /// Append `n` blank rows
    pub fn grow_bottom(&mut self, n: usize) {
        self.pixels.resize(self.pixels.len() + n * self.width, false);
        self.height += n;
    }

    /// Remove up to `n` rows from the bottom, keeping at least one row.
    /// Returns the number of rows removed.
    pub fn shrink_bottom(&mut self, n: usize) -> usize {
        let n = n.min(self.height - 1);
        self.height -= n;
        self.pixels.truncate(self.height * self.width);
        n
    }

    /// Signed row edit at the top: positive grows, negative shrinks
    pub fn edit_top(&mut self, rows: i32) {
        if rows >= 0 {
            self.grow_top(rows as usize);
        } else {
            self.shrink_top(rows.unsigned_abs() as usize);
        }
    }

    /// Signed row edit at the bottom: positive grows, negative shrinks
    pub fn edit_bottom(&mut self, rows: i32) {
        if rows >= 0 {
            self.grow_bottom(rows as usize);
        } else {
            self.shrink_bottom(rows.unsigned_abs() as usize);
        }
    }

    /// Add or remove rows at the top until the matrix is `height` rows tall.
    /// Content stays anchored to the bottom edge.
    pub fn sync_height_top(&mut self, height: usize) {
        let height = height.max(1);
        if height > self.height {
            self.grow_top(height - self.height);
        } else {
            self.shrink_top(self.height - height);
        }
    }

    /// Add or remove rows at the bottom until the matrix is `height` rows tall.
    /// Content stays anchored to the top edge.
    pub fn sync_height_bottom(&mut self, height: usize) {
        let height = height.max(1);
        if height > self.height {
            self.grow_bottom(height - self.height);
        } else {
            self.shrink_bottom(self.height - height);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Column Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Prepend `n` blank columns to every row
    pub fn grow_left(&mut self, n: usize) {
        self.remap_columns(self.width + n, n as isize);
    }

    /// Remove up to `n` columns from the left, keeping at least one column.
    /// Returns the number of columns removed.
    pub fn shrink_left(&mut self, n: usize) -> usize {
        let n = n.min(self.width - 1);
        self.remap_columns(self.width - n, -(n as isize));
        n
    }

    /// Append `n` blank columns to every row
    pub fn grow_right(&mut self, n: usize) {
        self.remap_columns(self.width + n, 0);
    }

    /// Remove up to `n` columns from the right, keeping at least one column.
    /// Returns the number of columns removed.
    pub fn shrink_right(&mut self, n: usize) -> usize {
        let n = n.min(self.width - 1);
        self.remap_columns(self.width - n, 0);
        n
    }

    /// Signed column edit at the left edge: positive grows, negative shrinks
    pub fn edit_left(&mut self, cols: i32) {
        if cols >= 0 {
            self.grow_left(cols as usize);
        } else {
            self.shrink_left(cols.unsigned_abs() as usize);
        }
    }

    /// Signed column edit at the right edge: positive grows, negative shrinks
    pub fn edit_right(&mut self, cols: i32) {
        if cols >= 0 {
            self.grow_right(cols as usize);
        } else {
            self.shrink_right(cols.unsigned_abs() as usize);
        }
    }

    /// Rebuild every row at `new_width`, moving old column x to x + offset.
    fn remap_columns(&mut self, new_width: usize, offset: isize) {
        if new_width == self.width && offset == 0 {
            return;
        }
        let mut pixels = vec![false; new_width * self.height];
        for (y, row) in self.pixels.chunks_exact(self.width).enumerate() {
            for (x, &on) in row.iter().enumerate() {
                let nx = x as isize + offset;
                if on && nx >= 0 && (nx as usize) < new_width {
                    pixels[y * new_width + nx as usize] = true;
                }
            }
        }
        self.width = new_width;
        self.pixels = pixels;
    }
}
