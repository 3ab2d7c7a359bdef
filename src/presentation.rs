use crate::alu::AluOutput;
use crate::error::AluError;
use crate::flags::Flags;
use crate::vectors::TestVector;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Record {
    op: &'static str,
    a: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<u8>,
    result: u8,
    flags: Flags,
}

/// Compact one-line form. Shifts omit the unused second operand.
pub fn format_text(vector: &TestVector, output: &AluOutput) -> String {
    if vector.op.is_shift() {
        format!(
            "{}  0x{:02X} -> 0x{:02X}  | {}",
            vector.op, vector.a, output.value, output.flags
        )
    } else {
        format!(
            "{}  0x{:02X} , 0x{:02X} -> 0x{:02X}  | {}",
            vector.op, vector.a, vector.b, output.value, output.flags
        )
    }
}

pub fn format_json(vector: &TestVector, output: &AluOutput) -> Result<String, AluError> {
    let record = Record {
        op: vector.op.mnemonic(),
        a: vector.a,
        b: (!vector.op.is_shift()).then_some(vector.b),
        result: output.value,
        flags: output.flags,
    };
    Ok(serde_json::to_string(&record)?)
}

pub fn render(
    format: OutputFormat,
    vector: &TestVector,
    output: &AluOutput,
) -> Result<String, AluError> {
    match format {
        OutputFormat::Text => Ok(format_text(vector, output)),
        OutputFormat::Json => format_json(vector, output),
    }
}
