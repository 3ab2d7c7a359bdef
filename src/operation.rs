use crate::error::AluError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Selects which transformation and flag rule the ALU applies.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    And,
    Or,
    Xor,
    ShiftLeftLogical,
    ShiftRightLogical,
}

impl Operation {
    /// Every operation, in opcode order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::ShiftLeftLogical,
        Operation::ShiftRightLogical,
    ];

    /// Shifts only read the first operand.
    pub fn is_shift(self) -> bool {
        matches!(
            self,
            Operation::ShiftLeftLogical | Operation::ShiftRightLogical
        )
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUB",
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::ShiftLeftLogical => "SHL",
            Operation::ShiftRightLogical => "SHR",
        }
    }
}

impl TryFrom<u8> for Operation {
    type Error = AluError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Operation::ALL
            .get(tag as usize)
            .copied()
            .ok_or(AluError::UnknownOpcode(tag))
    }
}

impl FromStr for Operation {
    type Err = AluError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Operation::*;

        if let Ok(tag) = s.parse::<u8>() {
            return Operation::try_from(tag);
        }

        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "ADD" => Ok(Add),
            "SUB" | "SUBTRACT" => Ok(Subtract),
            "AND" => Ok(And),
            "OR" => Ok(Or),
            "XOR" => Ok(Xor),
            "SHL" | "SHIFT_LEFT_LOGICAL" => Ok(ShiftLeftLogical),
            "SHR" | "SHIFT_RIGHT_LOGICAL" => Ok(ShiftRightLogical),
            _ => Err(AluError::UnknownOperation(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Operation::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
