//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod metrics;
pub mod options;
pub mod slot;

// Re-export for convenience
pub use error::{AppError, InputError, LayoutError};
pub use metrics::{BubbleFrame, BubbleMetrics, GridPosition, ProvidedProps};
pub use options::{BubbleOptions, GuideShape, LayoutConfig, SQRT2, SQRT3_OVER_2};
pub use slot::Slot;
