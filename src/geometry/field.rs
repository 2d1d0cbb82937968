//! Per-bubble scale and translation.
//!
//! [`size_and_offset`] is the whole fisheye: anchor the bubble on the grid,
//! measure how far past the focal boundary it sits, shrink it linearly across
//! the fringe, and (in compact mode) pull it back toward the boundary so the
//! shrunken bubbles stay packed.

use super::anchor::anchor_offset;
use super::zone::{classify, EdgeDistance};
use crate::model::{BubbleMetrics, GridPosition, LayoutConfig};
use std::f64::consts::PI;

/// Divisor applied to the gravitation pull beyond the fringe.
const GRAVITATION_DIVISOR: f64 = 10.0;

/// Map `val` from `[actual_min, actual_max]` onto `[target_min, target_max]`.
/// No clamping.
pub fn interpolate(
    actual_min: f64,
    actual_max: f64,
    val: f64,
    target_min: f64,
    target_max: f64,
) -> f64 {
    ((val - actual_min) / (actual_max - actual_min)) * (target_max - target_min) + target_min
}

/// Sign with `sign(0) == 0`.
///
/// `f64::signum` returns `1.0` for `+0.0`, which would push a bubble sitting
/// exactly on an axis sideways.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Scale factor for a bubble `distance_from_edge` past the focal boundary.
///
/// 1 on or inside the boundary, falling linearly to `min_proportion` at
/// `fringe_width`, flat beyond.
pub fn scale_for(distance_from_edge: f64, config: &LayoutConfig) -> f64 {
    interpolate(
        0.0,
        config.fringe_width,
        distance_from_edge.min(config.fringe_width),
        1.0,
        config.min_proportion(),
    )
}

/// Inward pull for a bubble `distance_from_edge` past the focal boundary,
/// before it is given a direction.
///
/// In compact mode the target pull is half the size lost by shrinking;
/// otherwise it is 0. Inside the fringe the pull ramps up linearly to the
/// target. Beyond the fringe it holds at the target plus a gravitation term
/// that grows once the bubble is more than half a bubble past the fringe.
pub fn translation_magnitude(distance_from_edge: f64, config: &LayoutConfig) -> f64 {
    let target = if config.compact {
        (config.bubble_size - config.min_bubble_size) / 2.0
    } else {
        0.0
    };

    if distance_from_edge > 0.0 && distance_from_edge <= config.fringe_width {
        interpolate(0.0, config.fringe_width, distance_from_edge, 0.0, target)
    } else if distance_from_edge - config.fringe_width > 0.0 {
        let past = distance_from_edge - config.fringe_width - config.bubble_size / 2.0;
        let extra = (past.max(0.0) * config.gravitation) / GRAVITATION_DIVISOR;
        target + extra
    } else {
        0.0
    }
}

/// Unit factors `(fx, fy)` that point from the corner-arc centre back toward
/// the viewport centre.
///
/// `corner_dx` is never negative in the corner sector; when it is exactly 0
/// the direction is vertical.
fn corner_direction(dx: f64, dy: f64, corner_dx: f64, corner_dy: f64) -> (f64, f64) {
    if corner_dx == 0.0 {
        return (0.0, -sign(dy));
    }

    let mut theta = (-corner_dy / corner_dx).atan();
    if dx > 0.0 {
        if dy > 0.0 {
            theta *= -1.0;
        }
    } else if dy > 0.0 {
        theta += PI;
    } else {
        theta += PI - 2.0 * theta;
    }

    (-theta.cos(), -theta.sin())
}

/// Give `magnitude` a direction toward the focal region.
fn direct(magnitude: f64, dx: f64, dy: f64, edge: &EdgeDistance, config: &LayoutConfig) -> (f64, f64) {
    if edge.in_corner {
        let corner_dx = dx.abs() - config.x_radius + config.corner_radius;
        let corner_dy = dy.abs() - config.y_radius + config.corner_radius;
        let (fx, fy) = corner_direction(dx, dy, corner_dx, corner_dy);
        (magnitude * fx, magnitude * fy)
    } else if dx.abs() > config.x_radius {
        (magnitude * -sign(dx), 0.0)
    } else if dy.abs() > config.y_radius {
        (0.0, magnitude * -sign(dy))
    } else {
        (magnitude, magnitude)
    }
}

/// Scale and translation for the bubble at `position` when the field is
/// scrolled to `(scroll_top, scroll_left)`.
///
/// `row_len` is the length of the bubble's row, filler included. Pure and
/// deterministic: identical inputs give bit-identical output.
///
/// # Example
///
/// ```
/// use hexbubble::geometry::size_and_offset;
/// use hexbubble::model::{GridPosition, LayoutConfig};
///
/// let config = LayoutConfig::default();
/// let metrics = size_and_offset(GridPosition::new(1, 2), 5, 0.0, 0.0, &config);
/// assert!(metrics.scale <= 1.0);
/// assert!(metrics.distance_to_center > 0.0);
/// ```
pub fn size_and_offset(
    position: GridPosition,
    row_len: usize,
    scroll_top: f64,
    scroll_left: f64,
    config: &LayoutConfig,
) -> BubbleMetrics {
    let (x, y) = anchor_offset(position, row_len, config);
    metrics_at(x - scroll_left, y - scroll_top, config)
}

/// Metrics for a bubble whose untransformed centre is `(dx, dy)` from the
/// viewport centre.
pub fn metrics_at(dx: f64, dy: f64, config: &LayoutConfig) -> BubbleMetrics {
    let distance_to_center = (dx * dx + dy * dy).sqrt();
    let edge = classify(dx, dy, config);

    let scale = scale_for(edge.distance_from_edge, config);
    let magnitude = translation_magnitude(edge.distance_from_edge, config);
    let (translate_x, translate_y) = direct(magnitude, dx, dy, &edge, config);

    BubbleMetrics {
        scale,
        translate_x,
        translate_y,
        distance_to_center,
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
