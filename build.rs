// build.rs
use serde::Deserialize;
use std::{env, fs, path::Path};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVector {
    a: u8,
    #[serde(default)]
    b: u8,
    op: String,
    result: Option<u8>,
    flags: Option<String>,
}

/// Turns a vector file path and index into a valid test function name.
fn test_name(path: &str, index: usize) -> String {
    let name = path
        .replace(['/', '\\', '-', '.', ' '], "_")
        .replace("__", "_");

    // Reduce name length for simplicity.
    let name = name.strip_prefix("tests_vectors_").unwrap_or(&name);
    let name = name.strip_suffix("_json").unwrap_or(name);
    format!("{}_{}", name.to_ascii_lowercase(), index)
}

fn generate_vector_tests() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let destination = Path::new(&out_dir).join("generated_vector_tests.rs");

    let mut test_code = String::new();
    let files = glob::glob("tests/vectors/**/*.json").expect("Failed to read glob pattern");

    for entry in files.filter_map(Result::ok) {
        let path = entry.to_str().unwrap().to_string();
        let json = fs::read_to_string(&entry).expect("Unreadable vector file");
        let vectors: Vec<RawVector> = serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("Malformed vector file {}: {}", path, e));

        for (index, v) in vectors.iter().enumerate() {
            let result = match v.result {
                Some(r) => format!("Some(0x{:02X})", r),
                None => "None".to_string(),
            };
            let flags = match &v.flags {
                Some(f) => format!("Some({:?})", f),
                None => "None".to_string(),
            };
            test_code.push_str(&format!(
                "#[test] fn {}() {{ check_vector(0x{:02X}, 0x{:02X}, {:?}, {}, {}); }}\n",
                test_name(&path, index),
                v.a,
                v.b,
                v.op,
                result,
                flags
            ));
        }
        println!("cargo:rerun-if-changed={}", path);
    }

    fs::write(destination, test_code).unwrap();
}

fn main() {
    generate_vector_tests();
    println!("cargo:rerun-if-changed=tests/vectors");
    println!("cargo:rerun-if-changed=build.rs");
}
