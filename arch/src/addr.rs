use num_enum::IntoPrimitive;

/// Operand addressing modes, numbered as they are encoded in the opcode
/// word's operand-type fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum Mode {
    Immediate = 0,
    Direct = 1,
    Relative = 2,
    Register = 3,
}

/// The A/R/E tag carried in the low three bits of every emitted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum Are {
    External = 1,
    Relocatable = 2,
    Absolute = 4,
}
