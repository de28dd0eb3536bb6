//! Hand-off to an external font compiler

use dotmatrix_engine::Result;

use super::ExportedFont;

/// Packages exported outlines into a binary font file
pub trait FontCompiler {
    fn compile(&self, font: &ExportedFont) -> Result<Vec<u8>>;
}

impl<F> FontCompiler for F
where
    F: Fn(&ExportedFont) -> Result<Vec<u8>>,
{
    fn compile(&self, font: &ExportedFont) -> Result<Vec<u8>> {
        self(font)
    }
}
