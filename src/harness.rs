use crate::alu::evaluate;
use crate::error::AluError;
use crate::presentation::{OutputFormat, render};
use crate::vectors::TestVector;
use log::{debug, warn};
use std::io::Write;

/// Tally of a harness run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Report {
    pub total: usize,
    // Vectors that carried an expectation.
    pub checked: usize,
    pub failures: usize,
}

impl Report {
    pub fn into_result(self) -> Result<Report, AluError> {
        if self.failures == 0 {
            Ok(self)
        } else {
            Err(AluError::Mismatch {
                failures: self.failures,
                total: self.total,
            })
        }
    }
}

/// Evaluates every vector once, writes one rendered line per vector and
/// checks each output against the vector's expectation.
pub fn run_vectors<W: Write>(
    vectors: &[TestVector],
    format: OutputFormat,
    out: &mut W,
) -> Result<Report, AluError> {
    let mut report = Report::default();

    for vector in vectors {
        let output = evaluate(vector.a, vector.b, vector.op);
        debug!(
            "{} a={:#04X} b={:#04X} -> {:#04X} [{:?}]",
            vector.op, vector.a, vector.b, output.value, output.flags
        );

        writeln!(out, "{}", render(format, vector, &output)?)?;

        report.total += 1;
        if !vector.expect.is_empty() {
            report.checked += 1;
            if !vector.expect.matches(&output) {
                report.failures += 1;
                warn!(
                    "Mismatch for {} {:#04X}, {:#04X}: expected {:?} [{:?}], got {:#04X} [{:?}]",
                    vector.op,
                    vector.a,
                    vector.b,
                    vector.expect.result,
                    vector.expect.flags,
                    output.value,
                    output.flags
                );
            }
        }
    }

    Ok(report)
}
