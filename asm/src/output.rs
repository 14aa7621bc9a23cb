//! Text rendering of the object, entries, and externals listings. Pure
//! formatting over a completed translation unit; the driver decides where
//! the text goes.

use arch::word::BASE_ADDRESS;

use crate::unit::Unit;

/// The object listing: a `<code words> <data words>` header, then one line
/// per word, addressed from the base load address.
pub fn object_file(unit: &Unit) -> String {
    let mut out = format!("{} {}\n", unit.code.len(), unit.data.len());
    for (offset, word) in unit.code.iter().chain(unit.data.iter()).enumerate() {
        out.push_str(&format!("{:07} {}\n", BASE_ADDRESS + offset as u32, word));
    }
    out
}

/// The entries listing, in symbol-table order, or `None` when the unit
/// exports nothing.
pub fn entries_file(unit: &Unit) -> Option<String> {
    if unit.entries.is_empty() {
        return None;
    }
    let mut out = String::new();
    for name in &unit.entries {
        let address = unit.symbols.get(name).map_or(0, |sym| sym.address);
        out.push_str(&format!("{name}\t{address:07}\n"));
    }
    Some(out)
}

/// The externals listing, one line per usage site, grouped by symbol in
/// first-reference order, or `None` when no external symbol is referenced.
pub fn externals_file(unit: &Unit) -> Option<String> {
    if unit.externals.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (name, addresses) in &unit.externals {
        for address in addresses {
            out.push_str(&format!("{name}\t{address:07}\n"));
        }
    }
    Some(out)
}
