use alu8_rs::args::Args;
use alu8_rs::{execute, setup_logging};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

// setup_logging installs the global logger, so only one test in this binary may succeed at it.

#[test]
fn log_path_receives_run_logs() {
    let path = std::env::temp_dir().join(format!("alu8_rs_log_{}.log", std::process::id()));
    setup_logging(&Some(path.clone())).unwrap();

    let args = Args::try_parse_from(["alu8", "--vectors", "tests/vectors/demo.json"]).unwrap();
    let mut out = Vec::new();
    let report = execute(&args, &mut out).unwrap();
    log::logger().flush();

    let logged = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(report.total, 7);
    assert!(
        logged.contains("Running vectors from \"tests/vectors/demo.json\""),
        "log file was: {:?}",
        logged
    );
    assert!(logged.contains("7 vectors, 7 checked, 0 failed"));
    // Rendered lines go to the writer, not the log.
    assert!(!logged.contains("ADD  0x0F , 0x1B"));
}

#[test]
fn unwritable_log_path_is_an_io_error() {
    let path = PathBuf::from("does/not/exist/alu8.log");
    let err = setup_logging(&Some(path)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
