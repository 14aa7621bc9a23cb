//! Operand classification and the label/number legality checks shared by
//! instruction and directive parsing.

use arch::addr::Mode;
use arch::op::Op;
use arch::reg::Reg;
use arch::word::{IMM_MAX, IMM_MIN};

/// A single instruction operand, tagged by addressing mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Immediate(i32),
    Direct(String),
    Relative(String),
    Register(Reg),
}

impl Operand {
    pub fn mode(&self) -> Mode {
        match self {
            Operand::Immediate(_) => Mode::Immediate,
            Operand::Direct(_) => Mode::Direct,
            Operand::Relative(_) => Mode::Relative,
            Operand::Register(_) => Mode::Register,
        }
    }
}

/// Parse a plain decimal literal, rejecting anything outside `min..=max`.
/// A single leading sign is accepted only when `allow_sign` is set.
pub fn parse_number(s: &str, min: i32, max: i32, allow_sign: bool) -> Option<i32> {
    let digits = match s.strip_prefix(['-', '+']) {
        Some(rest) if allow_sign => rest,
        Some(_) => return None,
        None => s,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: i64 = s.parse().ok()?;
    if value < i64::from(min) || value > i64::from(max) {
        return None;
    }
    Some(value as i32)
}

/// A label is 1..=31 characters, alphabetic head, alphanumeric tail, and
/// must not shadow a mnemonic, register, or directive name.
pub fn legal_label(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if head.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if s.len() > 31 || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    if Op::parse(s).is_ok() || Reg::parse(s).is_ok() {
        return false;
    }
    !matches!(s, "data" | "string" | "entry" | "extern")
}

/// Classify one operand token. The first matching form wins: immediate,
/// then direct label, then relative label, then register. `None` means the
/// token fits no addressing mode.
pub fn classify(token: &str) -> Option<Operand> {
    if let Some(rest) = token.strip_prefix('#') {
        if let Some(value) = parse_number(rest, IMM_MIN, IMM_MAX, true) {
            return Some(Operand::Immediate(value));
        }
    }
    if legal_label(token) {
        return Some(Operand::Direct(token.to_string()));
    }
    if let Some(rest) = token.strip_prefix('&') {
        if legal_label(rest) {
            return Some(Operand::Relative(rest.to_string()));
        }
    }
    if let Ok(reg) = Reg::parse(token) {
        return Some(Operand::Register(reg));
    }
    None
}
