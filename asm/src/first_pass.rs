//! First pass: one scan of the expanded source that assigns every label an
//! address, builds the data image, and records `.extern`/`.entry`
//! declarations. The code image itself is left to the second pass; only
//! its word count is tracked here so data can be placed after it.

use arch::word::{Word, BASE_ADDRESS, MEMORY_SIZE};

use crate::diag::Msg;
use crate::line::{Directive, Line, Stmt};
use crate::operand::Operand;
use crate::symbols::SymbolKind;
use crate::unit::Unit;

pub fn first_pass(file: &str, source: &str, unit: &mut Unit) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let mut ic: u32 = BASE_ADDRESS;
    let mut dc: u32 = 0;

    for (idx, raw) in source.lines().enumerate() {
        let no = idx + 1;
        let line = Line::parse(raw);

        if !line.errors.is_empty() {
            let text = line
                .errors
                .iter()
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            msgs.push(Msg::error(format!("syntax error: {text}"), file, no, raw));
            continue;
        }

        match &line.stmt {
            Stmt::Empty | Stmt::Comment => continue,
            Stmt::Directive(Directive::Extern(name)) => {
                // duplicate declarations are deduplicated without complaint
                if unit.symbols.get(name).is_none() {
                    unit.symbols.insert(name, SymbolKind::Extern, 0);
                }
                continue;
            }
            _ => {}
        }

        // a label sticks to instructions and data-carrying directives only
        let defines_code = matches!(line.stmt, Stmt::Inst { .. });
        let defines_data = matches!(
            line.stmt,
            Stmt::Directive(Directive::Data(_)) | Stmt::Directive(Directive::Str(_))
        );
        if let Some(name) = line.label.as_deref() {
            if defines_code || defines_data {
                let address = if defines_code { ic } else { dc };
                match unit.symbols.get_mut(name) {
                    Some(sym) if sym.kind == SymbolKind::Entry => {
                        sym.kind = if defines_code {
                            SymbolKind::EntryCode
                        } else {
                            SymbolKind::EntryData
                        };
                        sym.address = address;
                    }
                    Some(_) => {
                        msgs.push(Msg::error(
                            format!("redefinition of symbol `{name}`"),
                            file,
                            no,
                            raw,
                        ));
                    }
                    None => {
                        let kind = if defines_code {
                            SymbolKind::Code
                        } else {
                            SymbolKind::Data
                        };
                        unit.symbols.insert(name, kind, address);
                    }
                }
            }
        }

        match &line.stmt {
            Stmt::Inst { operands, .. } => {
                // one word for the instruction, one per non-register operand
                ic += 1;
                for operand in operands {
                    if !matches!(operand, Operand::Register(_)) {
                        ic += 1;
                    }
                }
            }
            Stmt::Directive(Directive::Data(values)) => {
                for &value in values {
                    unit.data.push(Word::new(value as u32));
                }
                dc += values.len() as u32;
            }
            Stmt::Directive(Directive::Str(text)) => {
                for ch in text.chars() {
                    if unit.data.len() >= MEMORY_SIZE {
                        msgs.push(Msg::error(
                            "data memory overflow in `.string`".to_string(),
                            file,
                            no,
                            raw,
                        ));
                        break;
                    }
                    unit.data.push(Word::new(ch as u32));
                    dc += 1;
                }
                if unit.data.len() < MEMORY_SIZE {
                    unit.data.push(Word::new(0));
                    dc += 1;
                } else {
                    msgs.push(Msg::error(
                        "no room for the `.string` terminator".to_string(),
                        file,
                        no,
                        raw,
                    ));
                }
            }
            Stmt::Directive(Directive::Entry(name)) => match unit.symbols.get_mut(name) {
                Some(sym) => match sym.kind {
                    SymbolKind::Code => sym.kind = SymbolKind::EntryCode,
                    SymbolKind::Data => sym.kind = SymbolKind::EntryData,
                    _ => msgs.push(Msg::error(
                        format!("redefinition of symbol type `{name}`"),
                        file,
                        no,
                        raw,
                    )),
                },
                None => unit.symbols.insert(name, SymbolKind::Entry, 0),
            },
            _ => {}
        }
    }

    // data follows code in the unified address space; entry symbols are
    // listed in table order once their addresses are final
    for (name, sym) in unit.symbols.iter_mut() {
        match sym.kind {
            SymbolKind::Entry => {
                msgs.push(Msg::file_error(
                    format!("symbol `{name}` declared entry but never defined"),
                    file,
                ));
            }
            SymbolKind::Data | SymbolKind::EntryData => sym.address += ic,
            _ => {}
        }
        if matches!(sym.kind, SymbolKind::EntryCode | SymbolKind::EntryData) {
            unit.entries.push(name.clone());
        }
    }

    if (ic - BASE_ADDRESS) as usize + unit.data.len() > MEMORY_SIZE {
        msgs.push(Msg::file_error(
            "program does not fit in memory".to_string(),
            file,
        ));
    }

    msgs
}
