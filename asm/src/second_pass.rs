//! Second pass: re-scans the expanded source with the completed symbol
//! table and emits the code image, resolving direct and relative operands
//! and recording every use of an external symbol.

use arch::addr::{Are, Mode};
use arch::word::{
    Word, BASE_ADDRESS, DEST_MODE_SHIFT, DEST_REG_SHIFT, FUNCT_SHIFT, OPCODE_SHIFT,
    SRC_MODE_SHIFT, SRC_REG_SHIFT,
};

use crate::diag::Msg;
use crate::line::{Line, Stmt};
use crate::operand::Operand;
use crate::symbols::SymbolKind;
use crate::unit::Unit;

fn mode_bits(mode: Mode) -> u32 {
    u32::from(u8::from(mode))
}

fn reg_bits(operand: &Operand) -> u32 {
    match operand {
        Operand::Register(reg) => u32::from(reg.number()),
        _ => 0,
    }
}

pub fn second_pass(file: &str, source: &str, unit: &mut Unit) -> Vec<Msg> {
    let mut msgs = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let no = idx + 1;
        let line = Line::parse(raw);
        let (op, operands) = match &line.stmt {
            Stmt::Inst { op, operands } => (*op, operands),
            _ => continue,
        };

        let opcode_address = BASE_ADDRESS + unit.code.len() as u32;

        let mut first = u32::from(u8::from(Are::Absolute))
            | u32::from(op.funct()) << FUNCT_SHIFT
            | u32::from(op.code()) << OPCODE_SHIFT;
        match operands.as_slice() {
            [src, dest] => {
                first |= mode_bits(src.mode()) << SRC_MODE_SHIFT
                    | mode_bits(dest.mode()) << DEST_MODE_SHIFT
                    | reg_bits(src) << SRC_REG_SHIFT
                    | reg_bits(dest) << DEST_REG_SHIFT;
            }
            [dest] => {
                first |=
                    mode_bits(dest.mode()) << DEST_MODE_SHIFT | reg_bits(dest) << DEST_REG_SHIFT;
            }
            _ => {}
        }
        unit.code.push(Word::new(first));

        for operand in operands {
            match operand {
                Operand::Register(_) => {}
                Operand::Immediate(value) => {
                    unit.code.push(Word::payload(*value, Are::Absolute));
                }
                Operand::Direct(name) => {
                    let here = BASE_ADDRESS + unit.code.len() as u32;
                    let word = match unit.symbols.get(name) {
                        Some(sym) if sym.kind == SymbolKind::Extern => {
                            unit.externals.entry(name.clone()).or_default().push(here);
                            Word::payload(0, Are::External)
                        }
                        Some(sym) => Word::payload(sym.address as i32, Are::Relocatable),
                        None => {
                            msgs.push(Msg::error(
                                format!("undefined label `{name}`"),
                                file,
                                no,
                                raw,
                            ));
                            Word::default()
                        }
                    };
                    unit.code.push(word);
                }
                Operand::Relative(name) => {
                    let word = match unit.symbols.get(name) {
                        Some(sym) => {
                            if sym.kind == SymbolKind::Extern {
                                msgs.push(Msg::error(
                                    format!("relative operand `&{name}` targets an external symbol"),
                                    file,
                                    no,
                                    raw,
                                ));
                            }
                            Word::payload(sym.address as i32 - opcode_address as i32, Are::Absolute)
                        }
                        None => {
                            msgs.push(Msg::error(
                                format!("undefined label `{name}`"),
                                file,
                                no,
                                raw,
                            ));
                            Word::default()
                        }
                    };
                    unit.code.push(word);
                }
            }
        }
    }

    msgs
}
