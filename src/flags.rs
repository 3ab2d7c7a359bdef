use crate::constants::*;
use crate::error::AluError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status flags produced by a single ALU evaluation.
#[derive(Copy, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Flags {
    // (Z) -> Set if the result is zero
    pub zero: bool,
    // (C) -> Carry out for ADD, borrow for SUB, the shifted out bit for SHL/SHR
    pub carry: bool,
    // (N) -> Copy of bit 7 of the result
    pub negative: bool,
    // (V) -> Set if the 2-complement result does not fit in 8 bits
    pub overflow: bool,
}

impl Flags {
    /// Packs the flags into the low nibble, `ZCNV` from bit 3 to bit 0.
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.zero {
            bits |= FLAG_Z;
        }
        if self.carry {
            bits |= FLAG_C;
        }
        if self.negative {
            bits |= FLAG_N;
        }
        if self.overflow {
            bits |= FLAG_V;
        }
        bits
    }

    /// Unpacks flags from the `ZCNV` nibble. The upper nibble is ignored.
    pub fn from_bits(bits: u8) -> Flags {
        Flags {
            zero: bits & FLAG_Z != 0,
            carry: bits & FLAG_C != 0,
            negative: bits & FLAG_N != 0,
            overflow: bits & FLAG_V != 0,
        }
    }
}

// Z=0 C=1 N=1 V=0
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Z={} C={} N={} V={}",
            self.zero as u8, self.carry as u8, self.negative as u8, self.overflow as u8
        )
    }
}

// ZCNV, e.g. 0110
impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04b}", self.bits())
    }
}

/// Parses the compact `ZCNV` digit form, e.g. "0110".
impl FromStr for Flags {
    type Err = AluError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.as_bytes();
        if digits.len() != 4 || !digits.iter().all(|d| *d == b'0' || *d == b'1') {
            return Err(AluError::InvalidFlags(s.to_string()));
        }

        let mut bits = 0;
        for digit in digits {
            bits = (bits << 1) | (digit - b'0');
        }
        Ok(Flags::from_bits(bits))
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Flags::from_str(&s).map_err(serde::de::Error::custom)
    }
}
