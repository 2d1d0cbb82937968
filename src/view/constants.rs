//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use crate::state::CellScale;
use std::time::Duration;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Field units covered by one terminal column.
///
/// A default 200-unit bubble spans 8 columns.
pub const UNITS_PER_COLUMN: f64 = 25.0;

/// Field units covered by one terminal row.
///
/// Twice the column value, since terminal cells are roughly twice as tall
/// as they are wide.
pub const UNITS_PER_ROW: f64 = 50.0;

/// Cell to field-unit conversion used for mouse input.
pub const CELL_SCALE: CellScale = CellScale {
    units_per_column: UNITS_PER_COLUMN,
    units_per_row: UNITS_PER_ROW,
};

/// Field units scrolled per arrow/hjkl key press.
pub const KEY_SCROLL_STEP: f64 = 50.0;

/// Field units scrolled per mouse wheel notch.
pub const WHEEL_SCROLL_STEP: f64 = 100.0;

/// Bubbles smaller than this scale are drawn without a label.
pub const LABEL_SCALE_THRESHOLD: f64 = 0.6;

/// Points sampled along each rounded corner of a guide outline.
pub const GUIDE_SAMPLES_PER_CORNER: usize = 12;

/// How long the event loop waits for input before checking again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
