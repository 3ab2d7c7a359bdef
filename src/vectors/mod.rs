mod loader;
mod validation;

pub use loader::{load_vectors, parse_vectors};
pub use validation::validate_extension;

use crate::alu::AluOutput;
use crate::flags::Flags;
use crate::operation::Operation;
use serde::Deserialize;

/// What a vector is expected to produce. Each part is only checked when present.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Expectation {
    pub result: Option<u8>,
    pub flags: Option<Flags>,
}

impl Expectation {
    pub fn matches(&self, output: &AluOutput) -> bool {
        self.result.is_none_or(|r| r == output.value)
            && self.flags.is_none_or(|f| f == output.flags)
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_none() && self.flags.is_none()
    }
}

/// One (a, b, op) triple fed through the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawVector")]
pub struct TestVector {
    pub a: u8,
    pub b: u8,
    pub op: Operation,
    pub expect: Expectation,
}

// On-disk shape of a vector. A misspelled key must not disable a check.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVector {
    a: u8,
    #[serde(default)]
    b: u8,
    op: Operation,
    result: Option<u8>,
    flags: Option<Flags>,
}

impl From<RawVector> for TestVector {
    fn from(raw: RawVector) -> Self {
        TestVector {
            a: raw.a,
            b: raw.b,
            op: raw.op,
            expect: Expectation {
                result: raw.result,
                flags: raw.flags,
            },
        }
    }
}

impl TestVector {
    pub fn new(a: u8, b: u8, op: Operation) -> Self {
        TestVector {
            a,
            b,
            op,
            expect: Expectation::default(),
        }
    }

    pub fn expecting(mut self, result: u8, flags: u8) -> Self {
        self.expect = Expectation {
            result: Some(result),
            flags: Some(Flags::from_bits(flags)),
        };
        self
    }
}

/// The demonstration set, one vector per operation.
pub fn default_vectors() -> Vec<TestVector> {
    use Operation::*;

    vec![
        TestVector::new(15, 27, Add).expecting(0x2A, 0b0000),
        TestVector::new(10, 40, Subtract).expecting(0xE2, 0b0110),
        TestVector::new(0xF0, 0x0F, And).expecting(0x00, 0b1000),
        TestVector::new(0xF0, 0x0F, Or).expecting(0xFF, 0b0010),
        TestVector::new(0x55, 0xFF, Xor).expecting(0xAA, 0b0010),
        TestVector::new(0x81, 0x00, ShiftLeftLogical).expecting(0x02, 0b0100),
        TestVector::new(0x03, 0x00, ShiftRightLogical).expecting(0x01, 0b0100),
    ]
}
