//! Debug guide outlines for the focal region and its fringe.

use crate::model::{GuideShape, LayoutConfig};
use serde::Serialize;

/// A rounded rectangle (or inscribed ellipse) centred on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideRect {
    /// Full width.
    pub width: f64,
    /// Full height.
    pub height: f64,
    /// Corner radius. Unused for [`GuideShape::Ellipse`].
    pub corner_radius: f64,
    /// Outline shape.
    pub shape: GuideShape,
}

impl GuideRect {
    /// Sample the outline, `4 * (samples_per_corner + 1)` points in
    /// clockwise order.
    ///
    /// A rounded rectangle gets `samples_per_corner + 1` points on each
    /// corner arc, and the straight sides run between consecutive arcs. An
    /// ellipse is sampled at evenly spaced angles.
    ///
    /// Points are relative to the rectangle's centre, y down.
    pub fn outline(&self, samples_per_corner: usize) -> Vec<(f64, f64)> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let steps = samples_per_corner.max(1);

        if self.shape == GuideShape::Ellipse {
            let count = (steps + 1) * 4;
            return (0..count)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / count as f64;
                    (half_w * angle.cos(), half_h * angle.sin())
                })
                .collect();
        }

        let radius = self.corner_radius.min(half_w).min(half_h);

        // Arc centres, clockwise from top-right, with each arc's start angle.
        let corners = [
            (half_w - radius, -(half_h - radius), -std::f64::consts::FRAC_PI_2),
            (half_w - radius, half_h - radius, 0.0),
            (-(half_w - radius), half_h - radius, std::f64::consts::FRAC_PI_2),
            (-(half_w - radius), -(half_h - radius), std::f64::consts::PI),
        ];

        let mut points = Vec::with_capacity(steps * 4 + 4);
        for (cx, cy, start) in corners {
            for step in 0..=steps {
                let angle = start + std::f64::consts::FRAC_PI_2 * step as f64 / steps as f64;
                points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
            }
        }
        points
    }
}

/// Inner (full-size) and outer (end of fringe) outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guides {
    /// Boundary inside which bubbles are full size.
    pub inner: GuideRect,
    /// Boundary past which bubbles are at minimum size.
    pub outer: GuideRect,
}

impl Guides {
    /// Outlines for `config`, regardless of `show_guides`.
    pub fn for_config(config: &LayoutConfig) -> Self {
        Self {
            inner: GuideRect {
                width: config.x_radius * 2.0,
                height: config.y_radius * 2.0,
                corner_radius: config.corner_radius,
                shape: config.guide_shape,
            },
            outer: GuideRect {
                width: (config.x_radius + config.fringe_width) * 2.0,
                height: (config.y_radius + config.fringe_width) * 2.0,
                corner_radius: config.corner_radius + config.fringe_width,
                shape: config.guide_shape,
            },
        }
    }
}

/// Outlines to draw, or `None` when `show_guides` is off.
pub fn guides(config: &LayoutConfig) -> Option<Guides> {
    config.show_guides.then(|| Guides::for_config(config))
}
