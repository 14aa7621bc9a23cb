use strum::{Display, EnumString};

use crate::addr::Mode;

/// The sixteen instruction mnemonics. Mnemonics are matched exactly in
/// lower case, the way they appear in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Op {
    MOV,
    CMP,
    ADD,
    SUB,
    LEA,
    CLR,
    NOT,
    INC,
    DEC,
    JMP,
    BNE,
    JSR,
    RED,
    PRN,
    RTS,
    STOP,
}

impl Op {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(op) => Ok(op),
            Err(_) => Err(format!("Undefined op: {s}")),
        }
    }

    pub fn code(self) -> u8 {
        use Op::*;
        match self {
            MOV => 0,
            CMP => 1,
            ADD | SUB => 2,
            LEA => 4,
            CLR | NOT | INC | DEC => 5,
            JMP | BNE | JSR => 9,
            RED => 12,
            PRN => 13,
            RTS => 14,
            STOP => 15,
        }
    }

    /// Secondary selector for mnemonics sharing an opcode; zero elsewhere.
    pub fn funct(self) -> u8 {
        use Op::*;
        match self {
            ADD | CLR | JMP => 1,
            SUB | NOT | BNE => 2,
            INC | JSR => 3,
            DEC => 4,
            MOV | CMP | LEA | RED | PRN | RTS | STOP => 0,
        }
    }

    /// How many operands the mnemonic takes.
    pub fn arity(self) -> usize {
        use Op::*;
        match self {
            MOV | CMP | ADD | SUB | LEA => 2,
            CLR | NOT | INC | DEC | JMP | BNE | JSR | RED | PRN => 1,
            RTS | STOP => 0,
        }
    }

    /// Addressing modes accepted for the source operand. Empty for
    /// mnemonics with fewer than two operands.
    pub fn src_modes(self) -> &'static [Mode] {
        use Mode::*;
        use Op::*;
        match self {
            MOV | CMP | ADD | SUB => &[Immediate, Direct, Register],
            LEA => &[Direct],
            _ => &[],
        }
    }

    /// Addressing modes accepted for the destination (last) operand.
    pub fn dest_modes(self) -> &'static [Mode] {
        use Mode::*;
        use Op::*;
        match self {
            MOV | ADD | SUB | LEA | CLR | NOT | INC | DEC | RED => &[Direct, Register],
            CMP | PRN => &[Immediate, Direct, Register],
            JMP | BNE | JSR => &[Direct, Relative],
            RTS | STOP => &[],
        }
    }
}
