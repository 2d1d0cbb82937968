//! Per-item geometry output.

use serde::Serialize;

/// Grid coordinate assigned by the row packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GridPosition {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index within the row.
    pub col: usize,
}

impl GridPosition {
    /// Create a new grid position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Scale and translation for one bubble at one scroll position.
///
/// Ephemeral: recomputed every layout pass and consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleMetrics {
    /// Scale factor in `[min_bubble_size / bubble_size, 1]`.
    pub scale: f64,
    /// Horizontal translation applied before scaling.
    pub translate_x: f64,
    /// Vertical translation applied before scaling.
    pub translate_y: f64,
    /// Distance from the bubble's anchor to the viewport centre.
    pub distance_to_center: f64,
}

/// Metrics handed to an item when props mode is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProvidedProps {
    /// Rendered diameter, `scale * bubble_size`.
    pub bubble_size: f64,
    /// Distance from the bubble's anchor to the viewport centre.
    pub distance_to_center: f64,
    /// Configured full diameter.
    pub max_size: f64,
    /// Configured minimum diameter.
    pub min_size: f64,
}

/// Everything the renderer needs to place one item for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleFrame {
    /// Grid coordinate of the item.
    pub position: GridPosition,
    /// Untransformed centre, horizontal, relative to the viewport centre.
    pub offset_x: f64,
    /// Untransformed centre, vertical, relative to the viewport centre.
    pub offset_y: f64,
    /// Scale and translation.
    pub metrics: BubbleMetrics,
    /// Present only when props mode is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<ProvidedProps>,
}

impl BubbleFrame {
    /// Rendered centre after translation, relative to the viewport centre.
    pub fn center(&self) -> (f64, f64) {
        (
            self.offset_x + self.metrics.translate_x,
            self.offset_y + self.metrics.translate_y,
        )
    }
}
