//! Untransformed bubble centres on the hex grid.

use crate::model::{GridPosition, LayoutConfig};

/// Centre of the bubble at `position`, relative to the viewport centre when
/// the field is scrolled to `(0, 0)`.
///
/// Rows step down by `(size + gutter) * SQRT3_OVER_2`. Rows shorter than
/// `num_cols` are shifted right by half a pitch per missing slot so they stay
/// centred. `row_len` counts the filler slot if the row has one.
pub fn anchor_offset(position: GridPosition, row_len: usize, config: &LayoutConfig) -> (f64, f64) {
    let size = config.bubble_size;
    let pitch = config.pitch();
    let corner_adjust = config.corner_adjust();

    let y = config.row_pitch() * position.row as f64 - size + corner_adjust
        - (config.y_radius - size);

    let missing = config.num_cols as f64 - row_len as f64;
    let x = pitch * position.col as f64 + (missing * pitch) / 2.0 - size + corner_adjust
        - (config.x_radius - size);

    (x, y)
}
