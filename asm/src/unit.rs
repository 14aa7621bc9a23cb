//! Mutable state of one file's assembly run.

use arch::word::Word;
use indexmap::IndexMap;

use crate::symbols::Symbols;

/// Everything the two passes share for a single translation unit. Each
/// input file gets a fresh one; nothing is shared across files.
#[derive(Debug, Default)]
pub struct Unit {
    /// Encoded instruction words, in emission order from the base address.
    pub code: Vec<Word>,
    /// Words produced by `.data` and `.string`, placed after the code.
    pub data: Vec<Word>,
    pub symbols: Symbols,
    /// External symbol name -> every code address referencing it, in
    /// reference order.
    pub externals: IndexMap<String, Vec<u32>>,
    /// Names of entry symbols, in symbol-table order.
    pub entries: Vec<String>,
}

impl Unit {
    pub fn new() -> Self {
        Self::default()
    }
}
