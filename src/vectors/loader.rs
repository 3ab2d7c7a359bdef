use super::TestVector;
use super::validation::validate_extension;
use crate::error::AluError;
use log::debug;
use std::fs;
use std::path::Path;

pub fn load_vectors(path: &Path) -> Result<Vec<TestVector>, AluError> {
    validate_extension(path)?;

    let json = fs::read_to_string(path)?;
    let vectors = parse_vectors(&json)?;
    debug!("Loaded {} vectors from {:?}", vectors.len(), path);

    Ok(vectors)
}

/// Parses a JSON array of vectors.
pub fn parse_vectors(json: &str) -> Result<Vec<TestVector>, AluError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::flags::Flags;
    use crate::operation::Operation;

    #[test]
    fn parses_full_vector() {
        let json = r#"[{"a": 10, "b": 40, "op": "SUB", "result": 226, "flags": "0110"}]"#;
        let vectors = parse_vectors(json).unwrap();
        assert_eq!(vectors.len(), 1);

        let v = vectors[0];
        assert_eq!((v.a, v.b, v.op), (10, 40, Operation::Subtract));
        assert_eq!(v.expect.result, Some(226));
        assert_eq!(v.expect.flags, Some(Flags::from_bits(0b0110)));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"[{"a": 129, "op": "shl"}]"#;
        let vectors = parse_vectors(json).unwrap();
        assert_eq!(vectors[0].b, 0);
        assert!(vectors[0].expect.is_empty());
    }

    #[test]
    fn rejects_unknown_operation() {
        let json = r#"[{"a": 1, "b": 2, "op": "MUL"}]"#;
        let result = parse_vectors(json);
        assert!(matches!(result, Err(AluError::Json(_))));
    }

    #[test]
    fn rejects_out_of_range_operand() {
        let json = r#"[{"a": 256, "b": 2, "op": "ADD"}]"#;
        assert!(matches!(parse_vectors(json), Err(AluError::Json(_))));
    }

    #[test]
    fn rejects_misspelled_keys() {
        let json = r#"[{"a": 1, "b": 2, "op": "ADD", "reslt": 99, "flags": "0000"}]"#;
        let result = parse_vectors(json);
        assert!(
            matches!(result, Err(AluError::Json(_))),
            "expected Json error, got {:?}",
            result
        );
    }

    #[test]
    fn rejects_malformed_flags() {
        let json = r#"[{"a": 1, "b": 2, "op": "ADD", "flags": "Z=0"}]"#;
        assert!(matches!(parse_vectors(json), Err(AluError::Json(_))));
    }

    #[test]
    fn load_checks_extension_first() {
        let result = load_vectors(Path::new("does-not-exist.txt"));
        assert!(matches!(result, Err(AluError::InvalidExtension { .. })));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_vectors(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(AluError::Io(_))));
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("alu8_rs_loader_{}.json", std::process::id()));
        fs::write(&path, r#"[{"a": 1, "b": 2, "op": "0"}, {"a": 3, "op": "SHR"}]"#).unwrap();

        let vectors = load_vectors(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].op, Operation::Add);
        assert_eq!(vectors[1].op, Operation::ShiftRightLogical);
    }
}
