use crate::constants::VECTOR_FILE_EXT;
use crate::error::AluError;
use std::path::Path;

pub fn validate_extension(path: &Path) -> Result<(), AluError> {
    let ext = path
        .extension()
        .ok_or(AluError::MissingExtension)?
        .to_str()
        .ok_or(AluError::MissingExtension)?;

    if ext.eq_ignore_ascii_case(VECTOR_FILE_EXT) {
        Ok(())
    } else {
        Err(AluError::InvalidExtension {
            expected: ".json",
            found: ext.to_string(),
        })
    }
}
