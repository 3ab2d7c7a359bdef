use std::path::PathBuf;

use clap::Parser;

use crate::error::AluError;
use crate::operation::Operation;
use crate::presentation::OutputFormat;

/// Evaluate 8-bit ALU operations and print the result with its Z, C, N and V flags.
/// Without --op or --vectors the built-in demonstration set is run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Operation to evaluate: ADD, SUB, AND, OR, XOR, SHL, SHR (or 0-6)
    #[arg(long, requires = "a")]
    pub op: Option<Operation>,

    /// First operand, decimal, 0x hex or 0b binary
    #[arg(short, requires = "op", value_parser = parse_operand)]
    pub a: Option<u8>,

    /// Second operand, ignored by shifts
    #[arg(short, requires = "op", value_parser = parse_operand)]
    pub b: Option<u8>,

    /// JSON file of vectors to run and verify
    #[arg(long, conflicts_with_all = ["op", "a", "b"])]
    pub vectors: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}

/// Parses an operand in decimal, `0x` hex or `0b` binary. `_` separators are allowed.
pub fn parse_operand(raw: &str) -> Result<u8, AluError> {
    let cleaned = raw.trim().replace('_', "");
    let lower = cleaned.to_ascii_lowercase();

    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u8::from_str_radix(bin, 2)
    } else {
        lower.parse::<u8>()
    };

    parsed.map_err(|_| AluError::InvalidOperand(raw.to_string()))
}
