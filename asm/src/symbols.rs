//! The per-file symbol table.

use indexmap::IndexMap;

/// What a name stands for. `Entry` is a name declared `.entry` whose
/// definition has not been seen yet; it must be promoted to `EntryCode` or
/// `EntryData` by the end of the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Extern,
    Entry,
    Code,
    Data,
    EntryCode,
    EntryData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub address: u32,
}

/// Symbols keyed by name, iterated in insertion order. Output listings
/// depend on that order.
#[derive(Debug, Default)]
pub struct Symbols(IndexMap<String, Symbol>);

impl Symbols {
    pub fn new() -> Self {
        Symbols(IndexMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.0.get_mut(name)
    }

    pub fn insert(&mut self, name: &str, kind: SymbolKind, address: u32) {
        self.0.insert(name.to_string(), Symbol { kind, address });
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Symbol)> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
