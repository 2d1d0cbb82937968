//! Tests for bubble scale and translation.

use super::*;
use crate::model::{GridPosition, LayoutConfig};

const EPS: f64 = 1e-9;

fn compact() -> LayoutConfig {
    LayoutConfig {
        compact: true,
        ..LayoutConfig::default()
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

// ===== interpolate =====

#[test]
fn interpolate_maps_endpoints() {
    assert_close(interpolate(0.0, 100.0, 0.0, 1.0, 0.1), 1.0);
    assert_close(interpolate(0.0, 100.0, 100.0, 1.0, 0.1), 0.1);
}

#[test]
fn interpolate_does_not_clamp() {
    assert_close(interpolate(0.0, 10.0, 20.0, 0.0, 5.0), 10.0);
}

// ===== scale_for =====

#[test]
fn scale_is_one_on_boundary() {
    assert_eq!(scale_for(0.0, &LayoutConfig::default()), 1.0);
}

#[test]
fn scale_halfway_through_fringe() {
    assert_close(scale_for(50.0, &LayoutConfig::default()), 0.55);
}

#[test]
fn scale_floors_at_min_proportion() {
    let config = LayoutConfig::default();
    assert_close(scale_for(100.0, &config), 0.1);
    assert_close(scale_for(1_000.0, &config), 0.1);
}

// ===== translation_magnitude =====

#[test]
fn no_pull_without_compact_inside_fringe() {
    assert_eq!(translation_magnitude(50.0, &LayoutConfig::default()), 0.0);
}

#[test]
fn no_pull_on_boundary() {
    assert_eq!(translation_magnitude(0.0, &compact()), 0.0);
}

#[test]
fn compact_pull_ramps_through_fringe() {
    // target = (200 - 20) / 2 = 90
    assert_close(translation_magnitude(50.0, &compact()), 45.0);
    assert_close(translation_magnitude(100.0, &compact()), 90.0);
}

#[test]
fn compact_pull_holds_beyond_fringe() {
    assert_close(translation_magnitude(150.0, &compact()), 90.0);
    assert_close(translation_magnitude(5_000.0, &compact()), 90.0);
}

#[test]
fn gravitation_adds_pull_past_half_a_bubble() {
    let config = LayoutConfig {
        gravitation: 5.0,
        ..compact()
    };
    // fringe (100) + half bubble (100) + 20 past it
    assert_close(translation_magnitude(220.0, &config), 90.0 + 20.0 * 5.0 / 10.0);
    assert_close(translation_magnitude(190.0, &config), 90.0);
}

#[test]
fn gravitation_applies_without_compact() {
    let config = LayoutConfig {
        gravitation: 2.0,
        ..LayoutConfig::default()
    };
    assert_close(translation_magnitude(300.0, &config), 100.0 * 2.0 / 10.0);
    assert_eq!(translation_magnitude(60.0, &config), 0.0);
}

// ===== metrics_at: sides =====

#[test]
fn centre_is_full_size_and_still() {
    let metrics = metrics_at(0.0, 0.0, &compact());
    assert_eq!(metrics.scale, 1.0);
    assert_eq!(metrics.translate_x, 0.0);
    assert_eq!(metrics.translate_y, 0.0);
    assert_eq!(metrics.distance_to_center, 0.0);
}

#[test]
fn right_of_region_pulls_left_only() {
    let metrics = metrics_at(250.0, 0.0, &compact());
    assert_close(metrics.scale, 0.55);
    assert_close(metrics.translate_x, -45.0);
    assert_eq!(metrics.translate_y, 0.0);
    assert_close(metrics.distance_to_center, 250.0);
}

#[test]
fn left_of_region_pulls_right_only() {
    let metrics = metrics_at(-250.0, 10.0, &compact());
    assert_close(metrics.translate_x, 45.0);
    assert_eq!(metrics.translate_y, 0.0);
}

#[test]
fn below_region_pulls_up_only() {
    let metrics = metrics_at(0.0, 250.0, &compact());
    assert_eq!(metrics.translate_x, 0.0);
    assert_close(metrics.translate_y, -45.0);
}

#[test]
fn above_region_pulls_down_only() {
    let metrics = metrics_at(30.0, -250.0, &compact());
    assert_eq!(metrics.translate_x, 0.0);
    assert_close(metrics.translate_y, 45.0);
}

#[test]
fn on_x_radius_seam_has_no_pull() {
    let metrics = metrics_at(200.0, 0.0, &compact());
    assert_eq!(metrics.scale, 1.0);
    assert_eq!(metrics.translate_x, 0.0);
    assert_eq!(metrics.translate_y, 0.0);
}

// ===== metrics_at: corners =====

#[test]
fn corner_pull_points_back_toward_centre_in_every_quadrant() {
    // Corner-arc centre at (100, 100); (300, 300) is on its diagonal and more
    // than a fringe width past the arc, so the full 90 pull splits evenly.
    let diagonal = 90.0 * std::f64::consts::FRAC_1_SQRT_2;
    let cases = [
        (300.0, 300.0, -diagonal, -diagonal),
        (-300.0, 300.0, diagonal, -diagonal),
        (-300.0, -300.0, diagonal, diagonal),
        (300.0, -300.0, -diagonal, diagonal),
    ];
    for (dx, dy, tx, ty) in cases {
        let metrics = metrics_at(dx, dy, &compact());
        assert!(
            (metrics.translate_x - tx).abs() < 1e-6 && (metrics.translate_y - ty).abs() < 1e-6,
            "({dx}, {dy}) -> ({}, {}), expected ({tx}, {ty})",
            metrics.translate_x,
            metrics.translate_y
        );
        assert_close(metrics.scale, 0.1);
    }
}

#[test]
fn corner_pull_follows_arc_angle() {
    // Corner-arc centre (100, 100); (120, 90) from it is 150 away, 50 past
    // the arc, so half the target pull split 0.8 / 0.6 across the axes.
    let config = compact();
    let metrics = metrics_at(100.0 + 120.0, 100.0 + 90.0, &config);
    assert_close(metrics.scale, 0.55);
    assert_close(metrics.translate_x, -45.0 * 0.8);
    assert_close(metrics.translate_y, -45.0 * 0.6);
}

#[test]
fn inside_rounded_corner_is_still_full_size() {
    let metrics = metrics_at(150.0, 150.0, &compact());
    assert_eq!(metrics.scale, 1.0);
    assert_eq!(metrics.translate_x, 0.0);
    assert_eq!(metrics.translate_y, 0.0);
}

#[test]
fn corner_with_zero_arc_offset_is_vertical() {
    let (fx, fy) = corner_direction(120.0, 240.0, 0.0, 40.0);
    assert_eq!(fx, 0.0);
    assert_eq!(fy, -1.0);
    let (fx, fy) = corner_direction(120.0, -240.0, 0.0, 40.0);
    assert_eq!(fx, 0.0);
    assert_eq!(fy, 1.0);
}

// ===== size_and_offset =====

#[test]
fn origin_item_with_wide_region_is_unscaled() {
    let config = LayoutConfig {
        x_radius: 1_000.0,
        y_radius: 1_000.0,
        num_cols: 6,
        ..compact()
    };
    let metrics = size_and_offset(GridPosition::new(0, 0), 6, -500.0, -500.0, &config);
    assert_eq!(metrics.scale, 1.0);
    assert_eq!(metrics.translate_x, 0.0);
    assert_eq!(metrics.translate_y, 0.0);
    assert!(metrics.distance_to_center > 0.0);
}

#[test]
fn distance_is_reported_even_far_outside() {
    let config = LayoutConfig::default();
    let metrics = size_and_offset(GridPosition::new(40, 5), 5, 0.0, 0.0, &config);
    assert!(metrics.distance_to_center > 7_000.0);
    assert_close(metrics.scale, 0.1);
}

#[test]
fn scrolling_moves_the_focus() {
    let config = LayoutConfig::default();
    let far = size_and_offset(GridPosition::new(10, 3), 5, 0.0, 0.0, &config);
    let (x, y) = crate::geometry::anchor_offset(GridPosition::new(10, 3), 5, &config);
    let near = size_and_offset(GridPosition::new(10, 3), 5, y, x, &config);
    assert!(far.scale < 1.0);
    assert_eq!(near.scale, 1.0);
    assert_eq!(near.distance_to_center, 0.0);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let config = LayoutConfig {
        gravitation: 3.5,
        corner_radius: 60.0,
        ..compact()
    };
    for row in 0..8 {
        for col in 0..6 {
            let a = size_and_offset(GridPosition::new(row, col), 6, 123.25, -77.5, &config);
            let b = size_and_offset(GridPosition::new(row, col), 6, 123.25, -77.5, &config);
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());
            assert_eq!(a.translate_x.to_bits(), b.translate_x.to_bits());
            assert_eq!(a.translate_y.to_bits(), b.translate_y.to_bits());
            assert_eq!(a.distance_to_center.to_bits(), b.distance_to_center.to_bits());
        }
    }
}

#[test]
fn sign_of_zero_is_zero() {
    assert_eq!(sign(0.0), 0.0);
    assert_eq!(sign(-0.0), 0.0);
    assert_eq!(sign(3.0), 1.0);
    assert_eq!(sign(-3.0), -1.0);
}
