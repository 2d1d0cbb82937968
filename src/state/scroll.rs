//! Scroll position and drag-to-scroll.
//!
//! The field scrolls inside `[0, max_top] x [0, max_left]`. A drag captures
//! the pointer and scroll position when it starts; every move then sets the
//! scroll to that anchor minus the pointer delta times the drag multiplier,
//! so the content follows the pointer.

use crate::model::{LayoutConfig, LayoutError};
use serde::Serialize;
use tracing::trace;

/// Default scale applied to pointer movement while dragging.
pub const DEFAULT_DRAG_MULTIPLIER: f64 = 2.0;

/// Largest scroll offsets for a layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollBounds {
    /// Largest vertical offset.
    pub max_top: f64,
    /// Largest horizontal offset.
    pub max_left: f64,
}

impl ScrollBounds {
    /// Bounds for `row_count` packed rows under `config`.
    ///
    /// The content is padded so that the first and last rows can reach the
    /// focal region but no further: the scrollable extent is the content size
    /// minus twice the focal inset on each axis, clamped at 0.
    pub fn for_layout(config: &LayoutConfig, row_count: usize) -> Self {
        if row_count == 0 {
            return Self::default();
        }
        Self {
            max_top: (config.content_height(row_count) - 2.0 * config.inset_y()).max(0.0),
            max_left: (config.row_width() - 2.0 * config.inset_x()).max(0.0),
        }
    }

    /// Midpoint of both ranges as `(top, left)`.
    pub fn centre(&self) -> (f64, f64) {
        (self.max_top / 2.0, self.max_left / 2.0)
    }

    fn clamp_top(&self, top: f64) -> f64 {
        top.clamp(0.0, self.max_top)
    }

    fn clamp_left(&self, left: f64) -> f64 {
        left.clamp(0.0, self.max_left)
    }
}

/// Pointer and scroll position captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer_x: f64,
    pointer_y: f64,
    scroll_top: f64,
    scroll_left: f64,
}

/// Current scroll offsets plus any drag in progress.
///
/// Mutators return `true` when the offsets changed, so the owner knows when
/// to mark its layout dirty.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    scroll_top: f64,
    scroll_left: f64,
    bounds: ScrollBounds,
    drag: Option<DragAnchor>,
    drag_multiplier: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(ScrollBounds::default())
    }
}

impl ScrollState {
    /// Scroll state at the origin, using [`DEFAULT_DRAG_MULTIPLIER`].
    pub fn new(bounds: ScrollBounds) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_left: 0.0,
            bounds,
            drag: None,
            drag_multiplier: DEFAULT_DRAG_MULTIPLIER,
        }
    }

    /// Scroll state positioned at the centre of `bounds`.
    pub fn centred(bounds: ScrollBounds) -> Self {
        let (scroll_top, scroll_left) = bounds.centre();
        Self {
            scroll_top,
            scroll_left,
            ..Self::new(bounds)
        }
    }

    /// Builder form of [`ScrollState::set_drag_multiplier`].
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` unless `multiplier` is
    /// finite and positive.
    pub fn with_drag_multiplier(mut self, multiplier: f64) -> Result<Self, LayoutError> {
        self.set_drag_multiplier(multiplier)?;
        Ok(self)
    }

    /// Vertical offset.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Horizontal offset.
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Current bounds.
    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    /// Pointer movement scale while dragging.
    pub fn drag_multiplier(&self) -> f64 {
        self.drag_multiplier
    }

    /// Change the pointer movement scale for subsequent drag moves.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` unless `multiplier` is
    /// finite and positive. The current multiplier is kept on error.
    pub fn set_drag_multiplier(&mut self, multiplier: f64) -> Result<(), LayoutError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(LayoutError::invalid(
                "drag_multiplier",
                format!("must be finite and positive (got {multiplier})"),
            ));
        }
        self.drag_multiplier = multiplier;
        Ok(())
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag with the pointer at `(x, y)`.
    ///
    /// A drag already in progress is re-anchored.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor {
            pointer_x: x,
            pointer_y: y,
            scroll_top: self.scroll_top,
            scroll_left: self.scroll_left,
        });
    }

    /// Move the pointer of the current drag to `(x, y)`.
    ///
    /// Does nothing without a drag in progress.
    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let top = anchor.scroll_top - (y - anchor.pointer_y) * self.drag_multiplier;
        let left = anchor.scroll_left - (x - anchor.pointer_x) * self.drag_multiplier;
        self.scroll_to(top, left)
    }

    /// Finish the current drag. Returns whether one was in progress.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Jump to `(top, left)`, clamped into bounds.
    ///
    /// Non-finite requests are ignored.
    pub fn scroll_to(&mut self, top: f64, left: f64) -> bool {
        if !top.is_finite() || !left.is_finite() {
            return false;
        }
        let top = self.bounds.clamp_top(top);
        let left = self.bounds.clamp_left(left);
        if top == self.scroll_top && left == self.scroll_left {
            return false;
        }
        trace!(top, left, "Scrolled");
        self.scroll_top = top;
        self.scroll_left = left;
        true
    }

    /// Scroll by a relative amount.
    pub fn scroll_by(&mut self, delta_top: f64, delta_left: f64) -> bool {
        self.scroll_to(self.scroll_top + delta_top, self.scroll_left + delta_left)
    }

    /// Jump to the centre of the bounds.
    pub fn centre(&mut self) -> bool {
        let (top, left) = self.bounds.centre();
        self.scroll_to(top, left)
    }

    /// Replace the bounds and clamp the current offsets into them.
    ///
    /// Any drag in progress keeps its anchor.
    pub fn set_bounds(&mut self, bounds: ScrollBounds) -> bool {
        self.bounds = bounds;
        let top = bounds.clamp_top(self.scroll_top);
        let left = bounds.clamp_left(self.scroll_left);
        let changed = top != self.scroll_top || left != self.scroll_left;
        self.scroll_top = top;
        self.scroll_left = left;
        changed
    }
}

#[cfg(test)]
#[path = "scroll_tests.rs"]
mod tests;
