//! Error types for hexbubble.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the binary
//!   - [`LayoutError`] - Rejected layout configuration
//!   - [`InputError`] - Label file loading failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - `std::io::Error` - Terminal failures
//!
//! Geometry itself is infallible: once a `LayoutConfig` has been resolved,
//! every evaluation yields finite metrics. All rejection happens up front in
//! [`LayoutConfig::resolve`](crate::model::LayoutConfig::resolve) and
//! [`pack`](crate::geometry::pack).

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load item labels.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Options could not be turned into a layout.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Config file could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal or output error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Layout configuration rejected before any geometry is evaluated.
///
/// Degenerate values (zero columns, negative radii, a zero-width fringe)
/// would otherwise surface as NaN or inverted layouts, so they are refused
/// when the configuration is resolved.
///
/// ```
/// use hexbubble::model::error::LayoutError;
///
/// let err = LayoutError::invalid("num_cols", "must be at least 1");
/// assert!(err.to_string().contains("num_cols"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A configuration field holds a value the geometry cannot work with.
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfiguration {
        /// Name of the offending option.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl LayoutError {
    /// Build an `InvalidConfiguration` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors encountered when loading item labels.
#[derive(Debug, Error)]
pub enum InputError {
    /// The label file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Any other I/O failure while reading labels.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
