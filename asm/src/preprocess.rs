//! Macro expansion: turns the raw `.as` text into the expanded `.am` text
//! both passes consume.
//!
//! The expander is a two-state machine (idle / defining). `mcroend` always
//! returns it to idle; while defining, every other line is appended to the
//! body verbatim, so neither macro calls nor further `mcro` lines are
//! recognized inside a definition.

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::diag::Msg;

/// Words that cannot name a macro.
static RESERVED_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "mov", "cmp", "add", "sub", "lea", "clr", "not", "inc", "dec", "jmp", "bne", "jsr", "red",
        "prn", "rts", "stop", "r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7", "r8",
    ])
});

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0b' | '\x0c' | '\r' | '\n')
}

fn valid_macro_name(name: &str) -> bool {
    if RESERVED_NAMES.contains(name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Expand every macro call in `source`, returning the expanded text and
/// the diagnostics produced along the way. Definition, end, and call lines
/// are consumed; everything else passes through unchanged.
pub fn expand(file: &str, source: &str) -> (String, Vec<Msg>) {
    let mut msgs = Vec::new();
    let mut macros: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut defining: Option<String> = None;
    let mut out = String::new();

    for (idx, raw) in source.lines().enumerate() {
        let no = idx + 1;
        let trimmed = raw.trim_start_matches(is_space);

        // end-of-definition wins over everything else
        if let Some(after) = trimmed.strip_prefix("mcroend") {
            if !after.trim_matches(is_space).is_empty() {
                msgs.push(Msg::error(
                    "extra characters after `mcroend`".to_string(),
                    file,
                    no,
                    raw,
                ));
            }
            defining = None;
            continue;
        }

        if defining.is_none() {
            if let Some(after) = trimmed.strip_prefix("mcro") {
                if let Some(name) = definition_name(after, file, no, raw, &mut msgs) {
                    macros.insert(name.clone(), Vec::new());
                    defining = Some(name);
                    continue;
                }
                // no name: falls through and is handled as an ordinary line
            } else if let Some(body) = macros.get(trimmed.trim_end_matches(is_space)) {
                for line in body {
                    out.push_str(line);
                    out.push('\n');
                }
                continue;
            }
        }

        match &defining {
            Some(name) => {
                if let Some(body) = macros.get_mut(name) {
                    body.push(raw.to_string());
                }
            }
            None => {
                out.push_str(raw);
                out.push('\n');
            }
        }
    }

    (out, msgs)
}

/// Pull the macro name out of the text following the `mcro` keyword. Name
/// problems are reported but still yield the name, so the body is
/// collected under it; only a missing name rejects the definition.
fn definition_name(
    after: &str,
    file: &str,
    no: usize,
    raw: &str,
    msgs: &mut Vec<Msg>,
) -> Option<String> {
    let mut parts = after.split(is_space).filter(|part| !part.is_empty());
    let name = match parts.next() {
        Some(name) => name.to_string(),
        None => {
            msgs.push(Msg::error(
                "missing macro name after `mcro`".to_string(),
                file,
                no,
                raw,
            ));
            return None;
        }
    };
    if !valid_macro_name(&name) {
        msgs.push(Msg::error(
            format!("illegal macro name `{name}`"),
            file,
            no,
            raw,
        ));
    }
    if parts.next().is_some() {
        msgs.push(Msg::error(
            format!("extra characters after macro name `{name}`"),
            file,
            no,
            raw,
        ));
    }
    Some(name)
}
