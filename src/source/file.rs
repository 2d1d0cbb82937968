//! Label file reading.

use crate::model::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one label per line from `path`.
///
/// Surrounding whitespace is trimmed. Blank lines and lines starting with
/// `#` are skipped.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for other I/O errors, including invalid UTF-8.
pub fn read_labels(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let mut labels = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let label = line.trim();
        if label.is_empty() || label.starts_with('#') {
            continue;
        }
        labels.push(label.to_string());
    }

    Ok(labels)
}
