//! Bubble options and the resolved layout configuration.
//!
//! `BubbleOptions` is the loose, all-optional form a caller (or the TOML
//! config file) supplies. `LayoutConfig` is the validated form the packer and
//! geometry work from, resolved once per item-list/options change.

use super::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Truncated √2 used by the corner flattening term.
///
/// Kept at three decimals on purpose; layouts are tuned against this value.
pub const SQRT2: f64 = 1.414;

/// Truncated √3/2, the vertical pitch factor between hex rows.
pub const SQRT3_OVER_2: f64 = 0.866;

/// Row overlap factor applied to the bubble size (`SQRT3_OVER_2 - 1`).
pub const ROW_OVERLAP_FACTOR: f64 = -0.134;

/// Default bubble diameter.
pub const DEFAULT_BUBBLE_SIZE: f64 = 200.0;
/// Default minimum bubble diameter.
pub const DEFAULT_MIN_BUBBLE_SIZE: f64 = 20.0;
/// Default space between neighbouring bubbles.
pub const DEFAULT_GUTTER: f64 = 16.0;
/// Default number of columns in a full row.
pub const DEFAULT_NUM_COLS: usize = 6;
/// Default width of the shrinking band around the focal region.
pub const DEFAULT_FRINGE_WIDTH: f64 = 100.0;
/// Default vertical half-extent of the focal region.
pub const DEFAULT_Y_RADIUS: f64 = 200.0;
/// Default horizontal half-extent of the focal region.
pub const DEFAULT_X_RADIUS: f64 = 200.0;
/// Default corner radius of the focal region.
pub const DEFAULT_CORNER_RADIUS: f64 = 100.0;

/// Outline of the guides drawn around the focal region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideShape {
    /// Rounded rectangle with the configured corner radius.
    #[default]
    Rounded,
    /// Ellipse inscribed in the guide's bounding box.
    Ellipse,
}

/// Caller-supplied layout options. Every field is optional; unset fields
/// fall back to the `DEFAULT_*` constants.
///
/// Deserializes from the `[bubble]` table of the config file:
///
/// ```toml
/// [bubble]
/// size = 180
/// min_size = 20
/// x_radius = 220
/// compact = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BubbleOptions {
    /// Full bubble diameter.
    #[serde(default, alias = "size")]
    pub bubble_size: Option<f64>,

    /// Diameter a bubble shrinks to at the outer edge of the fringe.
    #[serde(default, alias = "min_size")]
    pub min_bubble_size: Option<f64>,

    /// Space between neighbouring bubbles.
    #[serde(default)]
    pub gutter: Option<f64>,

    /// Columns in a full row, before clamping to the item count.
    #[serde(default)]
    pub num_cols: Option<usize>,

    /// Width of the band in which bubbles shrink.
    #[serde(default)]
    pub fringe_width: Option<f64>,

    /// Vertical half-extent of the full-size region.
    #[serde(default)]
    pub y_radius: Option<f64>,

    /// Horizontal half-extent of the full-size region.
    #[serde(default)]
    pub x_radius: Option<f64>,

    /// Corner radius of the full-size region.
    #[serde(default)]
    pub corner_radius: Option<f64>,

    /// Pull shrinking bubbles inward so the packing stays tight.
    #[serde(default)]
    pub compact: Option<bool>,

    /// Extra inward pull for bubbles beyond the fringe.
    #[serde(default)]
    pub gravitation: Option<f64>,

    /// Expose the focal-region guide outlines.
    #[serde(default)]
    pub show_guides: Option<bool>,

    /// Attach `ProvidedProps` to every emitted frame.
    #[serde(default)]
    pub provide_props: Option<bool>,

    /// Guide outline shape (`"rounded"` or `"ellipse"`).
    #[serde(default, alias = "shape")]
    pub guide_shape: Option<GuideShape>,
}

impl BubbleOptions {
    /// Overlay `other` onto `self`: every field set in `other` wins.
    pub fn merged_with(&self, other: &BubbleOptions) -> BubbleOptions {
        BubbleOptions {
            bubble_size: other.bubble_size.or(self.bubble_size),
            min_bubble_size: other.min_bubble_size.or(self.min_bubble_size),
            gutter: other.gutter.or(self.gutter),
            num_cols: other.num_cols.or(self.num_cols),
            fringe_width: other.fringe_width.or(self.fringe_width),
            y_radius: other.y_radius.or(self.y_radius),
            x_radius: other.x_radius.or(self.x_radius),
            corner_radius: other.corner_radius.or(self.corner_radius),
            compact: other.compact.or(self.compact),
            gravitation: other.gravitation.or(self.gravitation),
            show_guides: other.show_guides.or(self.show_guides),
            provide_props: other.provide_props.or(self.provide_props),
            guide_shape: other.guide_shape.or(self.guide_shape),
        }
    }
}

/// Validated, immutable layout configuration.
///
/// Construct with [`LayoutConfig::resolve`]. `num_cols` is already clamped to
/// the item count, so it is zero only for an empty item list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutConfig {
    /// Full bubble diameter.
    pub bubble_size: f64,
    /// Smallest bubble diameter.
    pub min_bubble_size: f64,
    /// Space between neighbouring bubbles.
    pub gutter: f64,
    /// Columns in a full row, clamped to the item count.
    pub num_cols: usize,
    /// Width of the shrinking band.
    pub fringe_width: f64,
    /// Vertical half-extent of the full-size region.
    pub y_radius: f64,
    /// Horizontal half-extent of the full-size region.
    pub x_radius: f64,
    /// Corner radius of the full-size region.
    pub corner_radius: f64,
    /// Pull shrinking bubbles inward.
    pub compact: bool,
    /// Extra inward pull beyond the fringe.
    pub gravitation: f64,
    /// Expose guide outlines.
    pub show_guides: bool,
    /// Attach `ProvidedProps` to frames.
    pub provide_props: bool,
    /// Guide outline shape.
    pub guide_shape: GuideShape,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bubble_size: DEFAULT_BUBBLE_SIZE,
            min_bubble_size: DEFAULT_MIN_BUBBLE_SIZE,
            gutter: DEFAULT_GUTTER,
            num_cols: DEFAULT_NUM_COLS,
            fringe_width: DEFAULT_FRINGE_WIDTH,
            y_radius: DEFAULT_Y_RADIUS,
            x_radius: DEFAULT_X_RADIUS,
            corner_radius: DEFAULT_CORNER_RADIUS,
            compact: false,
            gravitation: 0.0,
            show_guides: false,
            provide_props: false,
            guide_shape: GuideShape::Rounded,
        }
    }
}

impl LayoutConfig {
    /// Merge `options` over the defaults, validate, and clamp `num_cols` to
    /// `item_count`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` for a zero column count,
    /// non-finite numbers, non-positive bubble size or fringe width, negative
    /// gutter/radii/min size/gravitation, `min_bubble_size > bubble_size`, or
    /// a corner radius larger than either radius.
    pub fn resolve(options: &BubbleOptions, item_count: usize) -> Result<Self, LayoutError> {
        let defaults = Self::default();
        let config = Self {
            bubble_size: options.bubble_size.unwrap_or(defaults.bubble_size),
            min_bubble_size: options.min_bubble_size.unwrap_or(defaults.min_bubble_size),
            gutter: options.gutter.unwrap_or(defaults.gutter),
            num_cols: options.num_cols.unwrap_or(defaults.num_cols),
            fringe_width: options.fringe_width.unwrap_or(defaults.fringe_width),
            y_radius: options.y_radius.unwrap_or(defaults.y_radius),
            x_radius: options.x_radius.unwrap_or(defaults.x_radius),
            corner_radius: options.corner_radius.unwrap_or(defaults.corner_radius),
            compact: options.compact.unwrap_or(defaults.compact),
            gravitation: options.gravitation.unwrap_or(defaults.gravitation),
            show_guides: options.show_guides.unwrap_or(defaults.show_guides),
            provide_props: options.provide_props.unwrap_or(defaults.provide_props),
            guide_shape: options.guide_shape.unwrap_or(defaults.guide_shape),
        };
        config.validate()?;

        Ok(Self {
            num_cols: config.num_cols.min(item_count),
            ..config
        })
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.num_cols == 0 {
            return Err(LayoutError::invalid("num_cols", "must be at least 1"));
        }

        let numbers = [
            ("bubble_size", self.bubble_size),
            ("min_bubble_size", self.min_bubble_size),
            ("gutter", self.gutter),
            ("fringe_width", self.fringe_width),
            ("y_radius", self.y_radius),
            ("x_radius", self.x_radius),
            ("corner_radius", self.corner_radius),
            ("gravitation", self.gravitation),
        ];
        if let Some((field, value)) = numbers.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(LayoutError::invalid(
                field,
                format!("must be finite (got {value})"),
            ));
        }

        if self.bubble_size <= 0.0 {
            return Err(LayoutError::invalid("bubble_size", "must be positive"));
        }
        if self.fringe_width <= 0.0 {
            return Err(LayoutError::invalid("fringe_width", "must be positive"));
        }
        for (field, value) in [
            ("min_bubble_size", self.min_bubble_size),
            ("gutter", self.gutter),
            ("y_radius", self.y_radius),
            ("x_radius", self.x_radius),
            ("corner_radius", self.corner_radius),
            ("gravitation", self.gravitation),
        ] {
            if value < 0.0 {
                return Err(LayoutError::invalid(
                    field,
                    format!("must not be negative (got {value})"),
                ));
            }
        }
        if self.min_bubble_size > self.bubble_size {
            return Err(LayoutError::invalid(
                "min_bubble_size",
                format!(
                    "must not exceed bubble_size ({} > {})",
                    self.min_bubble_size, self.bubble_size
                ),
            ));
        }
        if self.corner_radius > self.x_radius.min(self.y_radius) {
            return Err(LayoutError::invalid(
                "corner_radius",
                format!(
                    "must not exceed the smaller radius ({} > {})",
                    self.corner_radius,
                    self.x_radius.min(self.y_radius)
                ),
            ));
        }

        Ok(())
    }

    /// Smallest scale factor, `min_bubble_size / bubble_size`.
    pub fn min_proportion(&self) -> f64 {
        self.min_bubble_size / self.bubble_size
    }

    /// Distance between neighbouring column centres.
    pub fn pitch(&self) -> f64 {
        self.bubble_size + self.gutter
    }

    /// Distance between neighbouring row centres.
    pub fn row_pitch(&self) -> f64 {
        self.pitch() * SQRT3_OVER_2
    }

    /// Flattening term that folds the corner radius into the effective
    /// radius of the focal region.
    pub fn corner_adjust(&self) -> f64 {
        (self.corner_radius * (SQRT2 - 1.0)) / SQRT2
    }

    /// Vertical overlap between consecutive rows (negative margin).
    pub fn row_overlap(&self) -> f64 {
        self.bubble_size * ROW_OVERLAP_FACTOR + self.gutter * SQRT3_OVER_2
    }

    /// Distance from the viewport centre to the top padding edge.
    pub fn inset_y(&self) -> f64 {
        self.y_radius + self.bubble_size / 2.0 - self.corner_adjust()
    }

    /// Distance from the viewport centre to the left padding edge.
    pub fn inset_x(&self) -> f64 {
        self.x_radius + self.bubble_size / 2.0 - self.corner_adjust()
    }

    /// Width of a full row of bubbles.
    pub fn row_width(&self) -> f64 {
        let cols = self.num_cols as f64;
        self.bubble_size * cols + self.gutter * (cols - 1.0).max(0.0)
    }

    /// Height of `rows` packed rows of bubbles.
    pub fn content_height(&self, rows: usize) -> f64 {
        if rows == 0 {
            return 0.0;
        }
        let rows = rows as f64;
        self.bubble_size * rows + self.row_overlap() * (rows - 1.0)
    }
}
