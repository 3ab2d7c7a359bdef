use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum AluError {
    Io(io::Error),
    Json(serde_json::Error),
    MissingExtension,
    InvalidExtension {
        expected: &'static str,
        found: String,
    },
    UnknownOperation(String),
    UnknownOpcode(u8),
    InvalidOperand(String),
    InvalidFlags(String),
    MissingOperand(&'static str),
    Mismatch {
        failures: usize,
        total: usize,
    },
}

impl fmt::Display for AluError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AluError::Io(err) => write!(f, "I/O error: {}", err),
            AluError::Json(err) => write!(f, "Malformed vector file: {}", err),
            AluError::MissingExtension => write!(f, "Vector file has no extension"),
            AluError::InvalidExtension { expected, found } => write!(
                f,
                "Invalid vector file extension: expected '{}', found '{}'",
                expected, found
            ),
            AluError::UnknownOperation(name) => write!(f, "Unknown ALU operation '{}'", name),
            AluError::UnknownOpcode(tag) => write!(f, "Unknown ALU opcode {}", tag),
            AluError::InvalidOperand(raw) => {
                write!(f, "Invalid operand '{}': expected a value in 0..=255", raw)
            }
            AluError::InvalidFlags(raw) => {
                write!(f, "Invalid flags '{}': expected four ZCNV digits", raw)
            }
            AluError::MissingOperand(name) => write!(f, "Missing operand '{}'", name),
            AluError::Mismatch { failures, total } => {
                write!(f, "{} of {} vectors did not match", failures, total)
            }
        }
    }
}

impl Error for AluError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AluError::Io(err) => Some(err),
            AluError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AluError {
    fn from(err: io::Error) -> Self {
        AluError::Io(err)
    }
}

impl From<serde_json::Error> for AluError {
    fn from(err: serde_json::Error) -> Self {
        AluError::Json(err)
    }
}
