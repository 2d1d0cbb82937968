//! Zone classification around the rounded-rectangle focal region.
//!
//! The focal region is a rectangle of half-extents `x_radius` by `y_radius`
//! with corners rounded by `corner_radius`. Around it runs a fringe band of
//! `fringe_width`. A point is classified by where its offset from the
//! viewport centre falls, and every branch reports the same two things: how
//! far past the rounded boundary the point is, and whether that distance was
//! measured from a corner arc.

use crate::model::LayoutConfig;

/// Coarse region a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Inside the un-rounded rectangle (`|dx| <= x_radius && |dy| <= y_radius`).
    Inner,
    /// Outside the rectangle but within `radius + fringe_width` on both axes.
    Outer,
    /// Further out than the fringe rectangle on at least one axis.
    Beyond,
}

/// Result of classifying one offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDistance {
    /// Region the point falls in.
    pub zone: Zone,
    /// Distance past the rounded boundary, 0 inside it.
    pub distance_from_edge: f64,
    /// Distance was measured from a corner arc centre.
    pub in_corner: bool,
}

/// Both offsets lie in the corner sector, where the boundary is an arc.
fn in_corner_sector(ax: f64, ay: f64, config: &LayoutConfig) -> bool {
    ay > config.y_radius - config.corner_radius && ax > config.x_radius - config.corner_radius
}

/// Distance from `(ax, ay)` to the centre of the nearest corner arc.
fn dist_to_inner_corner(ax: f64, ay: f64, config: &LayoutConfig) -> f64 {
    let cy = ay - config.y_radius + config.corner_radius;
    let cx = ax - config.x_radius + config.corner_radius;
    (cy.powi(2) + cx.powi(2)).sqrt()
}

/// Distance past the sides of the rectangle, for points outside the corner
/// sectors.
fn rectangular_distance(ax: f64, ay: f64, config: &LayoutConfig) -> f64 {
    (ax - config.x_radius).max(ay - config.y_radius)
}

/// Classify the offset `(dx, dy)` of a bubble from the viewport centre.
///
/// `distance_from_edge` is the Euclidean distance from the point to the
/// rounded rectangle: zero on or inside it and growing continuously past
/// it, with no jump where the corner arcs meet the straight sides.
pub fn classify(dx: f64, dy: f64, config: &LayoutConfig) -> EdgeDistance {
    let ax = dx.abs();
    let ay = dy.abs();

    if ax <= config.x_radius && ay <= config.y_radius {
        let mut distance_from_edge = 0.0;
        let mut in_corner = false;
        if in_corner_sector(ax, ay, config) {
            let corner = dist_to_inner_corner(ax, ay, config);
            if corner > config.corner_radius {
                distance_from_edge = corner - config.corner_radius;
                in_corner = true;
            }
        }
        return EdgeDistance {
            zone: Zone::Inner,
            distance_from_edge,
            in_corner,
        };
    }

    let zone = if ax <= config.x_radius + config.fringe_width
        && ay <= config.y_radius + config.fringe_width
    {
        Zone::Outer
    } else {
        Zone::Beyond
    };

    let in_corner = in_corner_sector(ax, ay, config);
    let distance_from_edge = if in_corner {
        dist_to_inner_corner(ax, ay, config) - config.corner_radius
    } else {
        rectangular_distance(ax, ay, config)
    };

    EdgeDistance {
        zone,
        distance_from_edge,
        in_corner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig {
            x_radius: 200.0,
            y_radius: 100.0,
            corner_radius: 50.0,
            fringe_width: 80.0,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn centre_is_inner_with_zero_distance() {
        let edge = classify(0.0, 0.0, &config());
        assert_eq!(edge.zone, Zone::Inner);
        assert_eq!(edge.distance_from_edge, 0.0);
        assert!(!edge.in_corner);
    }

    #[test]
    fn exactly_on_x_radius_is_inner() {
        let edge = classify(200.0, 0.0, &config());
        assert_eq!(edge.zone, Zone::Inner);
        assert_eq!(edge.distance_from_edge, 0.0);
    }

    #[test]
    fn just_past_x_radius_is_outer_rectangular() {
        let dx = 200.0 + 1e-9;
        let edge = classify(dx, 0.0, &config());
        assert_eq!(edge.zone, Zone::Outer);
        assert!(edge.distance_from_edge > 0.0);
        assert!(!edge.in_corner);
    }

    #[test]
    fn negative_offsets_mirror_positive() {
        let a = classify(230.0, -40.0, &config());
        let b = classify(-230.0, 40.0, &config());
        assert_eq!(a, b);
    }

    #[test]
    fn rectangle_corner_inside_arc_sector_counts_as_outside() {
        // The square corner (200, 100) lies outside the rounded boundary.
        let edge = classify(200.0, 100.0, &config());
        assert_eq!(edge.zone, Zone::Inner);
        assert!(edge.in_corner);
        let expected = (50.0_f64.powi(2) * 2.0).sqrt() - 50.0;
        assert!((edge.distance_from_edge - expected).abs() < 1e-9);
    }

    #[test]
    fn point_inside_corner_arc_has_zero_distance() {
        let edge = classify(160.0, 60.0, &config());
        assert_eq!(edge.zone, Zone::Inner);
        assert_eq!(edge.distance_from_edge, 0.0);
        assert!(!edge.in_corner);
    }

    #[test]
    fn outer_corner_sector_always_flags_corner() {
        let edge = classify(220.0, 110.0, &config());
        assert_eq!(edge.zone, Zone::Outer);
        assert!(edge.in_corner);
        let expected = (70.0_f64.powi(2) + 60.0_f64.powi(2)).sqrt() - 50.0;
        assert!((edge.distance_from_edge - expected).abs() < 1e-9);
    }

    #[test]
    fn beyond_fringe_along_axis_is_rectangular() {
        let edge = classify(0.0, 400.0, &config());
        assert_eq!(edge.zone, Zone::Beyond);
        assert!(!edge.in_corner);
        assert_eq!(edge.distance_from_edge, 300.0);
    }

    #[test]
    fn beyond_fringe_in_corner_sector_uses_arc() {
        let edge = classify(500.0, 300.0, &config());
        assert_eq!(edge.zone, Zone::Beyond);
        assert!(edge.in_corner);
        let expected = (350.0_f64.powi(2) + 250.0_f64.powi(2)).sqrt() - 50.0;
        assert!((edge.distance_from_edge - expected).abs() < 1e-9);
    }

    #[test]
    fn arc_and_side_agree_on_sector_seam() {
        // On |dy| == y_radius - corner_radius the point is not in the sector;
        // just above it, it is. Both distances must agree.
        let cfg = config();
        let side = classify(260.0, 50.0, &cfg);
        let arc = classify(260.0, 50.0 + 1e-9, &cfg);
        assert!(!side.in_corner);
        assert!(arc.in_corner);
        assert!((side.distance_from_edge - arc.distance_from_edge).abs() < 1e-9);
    }
}
