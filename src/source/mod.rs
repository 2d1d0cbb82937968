//! Item label sources.
//!
//! The viewer shows one bubble per label. Labels come from a file (one per
//! line) or, without a file, are generated as `1..=count`.

use crate::model::error::InputError;
use std::path::PathBuf;
use tracing::debug;

pub mod file;

pub use file::read_labels;

/// Where the item labels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelSource {
    /// Read one label per line from a file.
    File(PathBuf),
    /// Number the items `1..=count`.
    Generated(usize),
}

impl LabelSource {
    /// Pick a file source when a path is given, otherwise generate `count`
    /// labels.
    pub fn detect(file: Option<PathBuf>, count: usize) -> Self {
        match file {
            Some(path) => LabelSource::File(path),
            None => LabelSource::Generated(count),
        }
    }

    /// Produce the labels.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if a label file cannot be read.
    pub fn load(&self) -> Result<Vec<String>, InputError> {
        let labels = match self {
            LabelSource::File(path) => read_labels(path)?,
            LabelSource::Generated(count) => (1..=*count).map(|n| n.to_string()).collect(),
        };
        debug!(source = ?self, count = labels.len(), "Loaded labels");
        Ok(labels)
    }
}

/// Load labels from `file` if given, otherwise generate `count` of them.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if `file` does not exist and
/// `InputError::Io` for other read failures.
pub fn load_labels(file: Option<PathBuf>, count: usize) -> Result<Vec<String>, InputError> {
    LabelSource::detect(file, count).load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_file() {
        let source = LabelSource::detect(Some(PathBuf::from("labels.txt")), 10);
        assert_eq!(source, LabelSource::File(PathBuf::from("labels.txt")));
    }

    #[test]
    fn detect_without_file_generates() {
        assert_eq!(LabelSource::detect(None, 7), LabelSource::Generated(7));
    }

    #[test]
    fn generated_labels_are_one_based() {
        let labels = load_labels(None, 3).unwrap();
        assert_eq!(labels, vec!["1", "2", "3"]);
    }

    #[test]
    fn zero_generated_labels_is_empty() {
        assert!(load_labels(None, 0).unwrap().is_empty());
    }

    #[test]
    fn missing_file_propagates_error() {
        let result = load_labels(Some(PathBuf::from("/nonexistent/labels.txt")), 5);
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }
}
