use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Reads the display name an IDE stores in `<project>/.idea/.name`
///
/// Newlines are removed. Returns `None` when the file is absent or holds
/// nothing but newlines.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read (e.g. permission denied).
pub fn read_name_file(project_dir: &Path) -> Result<Option<String>> {
    let name_file = project_dir.join(".idea").join(".name");

    let bytes = match fs::read(&name_file) {
        Ok(bytes) => bytes,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(None);
        }
        Err(e) => return Err(ExtractError::io(name_file, e)),
    };

    let name = String::from_utf8_lossy(&bytes).replace(['\n', '\r'], "");
    Ok(if name.is_empty() { None } else { Some(name) })
}
