pub mod alu;
pub mod args;
pub mod constants;
pub mod error;
pub mod flags;
pub mod harness;
pub mod operation;
pub mod presentation;
pub mod vectors;

use constants::*;
use error::AluError;
use harness::Report;
use log::info;
use presentation::OutputFormat;
use vectors::TestVector;

use std::io;
use std::io::Write;
use std::path::PathBuf;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Entry point for the binary: sets up logging and writes to stdout.
pub fn run(args: args::Args) -> Result<Report, AluError> {
    setup_logging(&args.log_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args, &mut out)
}

/// Runs whichever mode the arguments select and writes the rendered lines to `out`.
pub fn execute<W: Write>(args: &args::Args, out: &mut W) -> Result<Report, AluError> {
    if let Some(op) = args.op {
        let a = args.a.ok_or(AluError::MissingOperand("a"))?;
        let b = match args.b {
            Some(b) => b,
            None if op.is_shift() => 0,
            None => return Err(AluError::MissingOperand("b")),
        };
        return harness::run_vectors(&[TestVector::new(a, b, op)], args.format, out);
    }

    if let Some(path) = &args.vectors {
        info!("Running vectors from {:?}", path);
        let vectors = vectors::load_vectors(path)?;
        let report = harness::run_vectors(&vectors, args.format, out)?;
        info!(
            "{} vectors, {} checked, {} failed",
            report.total, report.checked, report.failures
        );
        return report.into_result();
    }

    demo(args.format, out)
}

/// The built-in demonstration set, framed by a banner in text mode.
fn demo<W: Write>(format: OutputFormat, out: &mut W) -> Result<Report, AluError> {
    let framed = format == OutputFormat::Text;
    if framed {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}\n", BANNER_RULE)?;
    }

    let report = harness::run_vectors(&vectors::default_vectors(), format, out)?;

    if framed {
        writeln!(out, "\n{}", FOOTER)?;
    }
    report.into_result()
}
