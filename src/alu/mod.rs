mod alu_output;

pub use alu_output::AluOutput;

use crate::constants::{LOW_BIT, SIGN_BIT};
use crate::operation::Operation;

/// Signed overflow for `a + b = r`: both operands share a sign and the
/// result's sign differs from it.
pub fn overflow_add(a: u8, b: u8, r: u8) -> bool {
    (!(a ^ b) & (a ^ r) & SIGN_BIT) != 0
}

/// Signed overflow for `a - b = r`: the operands differ in sign and the
/// result's sign differs from `a`.
pub fn overflow_sub(a: u8, b: u8, r: u8) -> bool {
    ((a ^ b) & (a ^ r) & SIGN_BIT) != 0
}

/// Evaluates `op` on the two operands.
///
/// Total and pure: every flag starts cleared and is recomputed from the
/// operands and the result on every call. Shifts ignore `b`.
pub fn evaluate(a: u8, b: u8, op: Operation) -> AluOutput {
    match op {
        Operation::Add => {
            // Use u16 to detect the 8-bit carry (result > 0xFF)
            let res = (a as u16) + (b as u16);
            let res_u8 = res as u8;
            AluOutput::from_value(res_u8, res > 0xFF, overflow_add(a, b, res_u8))
        }
        Operation::Subtract => {
            let res = a.wrapping_sub(b);
            // Carry means a borrow occurred.
            AluOutput::from_value(res, a < b, overflow_sub(a, b, res))
        }
        Operation::And => AluOutput::from_value(a & b, false, false),
        Operation::Or => AluOutput::from_value(a | b, false, false),
        Operation::Xor => AluOutput::from_value(a ^ b, false, false),
        Operation::ShiftLeftLogical => AluOutput::from_value(a << 1, a & SIGN_BIT != 0, false),
        Operation::ShiftRightLogical => AluOutput::from_value(a >> 1, a & LOW_BIT != 0, false),
    }
}
