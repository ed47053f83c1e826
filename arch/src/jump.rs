use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Jump field of a compute instruction (bits 13-15).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    /// No jump
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    /// out > 0
    JGT = 0b001,
    /// out == 0
    JEQ = 0b010,
    /// out >= 0
    JGE = 0b011,
    /// out < 0
    JLT = 0b100,
    /// out != 0
    JNE = 0b101,
    /// out <= 0
    JLE = 0b110,
    /// Unconditional
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Unknown jump: {s}")),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn from_bits(bits: u16) -> Self {
        Self::from((bits & 0b111) as u8)
    }
}
