use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumString};

/// The eight general-purpose registers. Names are matched exactly: `r3` is
/// a register, `R3` is not.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, EnumString, Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase")]
pub enum Reg {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(reg) => Ok(reg),
            Err(_) => Err(format!("Unknown reg name: {s}")),
        }
    }

    pub fn number(self) -> u8 {
        self.into()
    }
}
