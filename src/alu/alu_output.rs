use crate::flags::Flags;

/// Represents an ALU operation's result byte and the flags it produced.
/// Plain data, so evaluations stay pure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AluOutput {
    pub value: u8,
    pub flags: Flags,
}

impl AluOutput {
    /// Builds the output for `value`, deriving Zero and Negative from it.
    /// Carry and Overflow are supplied by the operation.
    pub fn from_value(value: u8, carry: bool, overflow: bool) -> Self {
        AluOutput {
            value,
            flags: Flags {
                zero: value == 0,
                carry,
                negative: value & crate::constants::SIGN_BIT != 0,
                overflow,
            },
        }
    }
}
