//! Bubble field: packed rows, scroll state and cached frames.
//!
//! `BubbleField` is the one stateful piece of the engine. It owns the item
//! list (packed into rows), the resolved configuration and the scroll
//! position. Every mutation that can change geometry marks the field dirty;
//! [`BubbleField::recompute`] re-evaluates the frames only then and hands
//! back the cache otherwise.

use crate::geometry::{anchor_offset, guides, metrics_at, pack, Guides, Row};
use crate::model::{
    BubbleFrame, BubbleOptions, GridPosition, LayoutConfig, LayoutError, ProvidedProps,
};
use crate::state::scroll::{ScrollBounds, ScrollState};
use tracing::{debug, trace};

/// A pannable hex field of items of type `T`.
#[derive(Debug, Clone)]
pub struct BubbleField<T> {
    options: BubbleOptions,
    config: LayoutConfig,
    rows: Vec<Row<T>>,
    item_count: usize,
    scroll: ScrollState,
    frames: Vec<BubbleFrame>,
    dirty: bool,
}

impl<T> BubbleField<T> {
    /// Pack `items` under `options` and centre the scroll position.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if `options` do not
    /// resolve to a valid layout.
    ///
    /// # Example
    ///
    /// ```
    /// use hexbubble::model::BubbleOptions;
    /// use hexbubble::state::BubbleField;
    ///
    /// let mut field = BubbleField::new((0..20).collect(), BubbleOptions::default()).unwrap();
    /// assert_eq!(field.rows().len(), 4);
    /// assert_eq!(field.recompute().len(), 20);
    /// ```
    pub fn new(items: Vec<T>, options: BubbleOptions) -> Result<Self, LayoutError> {
        let item_count = items.len();
        let config = LayoutConfig::resolve(&options, item_count)?;
        let rows = pack(items, config.num_cols)?;
        let bounds = ScrollBounds::for_layout(&config, rows.len());
        debug!(items = item_count, rows = rows.len(), ?bounds, "Created bubble field");

        Ok(Self {
            options,
            config,
            rows,
            item_count,
            scroll: ScrollState::centred(bounds),
            frames: Vec::with_capacity(item_count),
            dirty: true,
        })
    }

    /// Use `multiplier` for subsequent drags.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` unless `multiplier` is
    /// finite and positive.
    pub fn with_drag_multiplier(mut self, multiplier: f64) -> Result<Self, LayoutError> {
        self.scroll.set_drag_multiplier(multiplier)?;
        Ok(self)
    }

    /// Replace the items and repack. The scroll position is kept, clamped to
    /// the new bounds.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if the current options do
    /// not resolve for the new item count. The field is unchanged on error.
    pub fn set_items(&mut self, items: Vec<T>) -> Result<(), LayoutError> {
        let config = LayoutConfig::resolve(&self.options, items.len())?;
        self.relayout(items, config)
    }

    /// Replace the options and repack the existing items.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidConfiguration` if `options` do not
    /// resolve. The field is unchanged on error.
    pub fn set_options(&mut self, options: BubbleOptions) -> Result<(), LayoutError> {
        let config = LayoutConfig::resolve(&options, self.item_count)?;
        self.options = options;
        let items: Vec<T> = std::mem::take(&mut self.rows)
            .into_iter()
            .flat_map(Row::into_items)
            .collect();
        self.relayout(items, config)
    }

    fn relayout(&mut self, items: Vec<T>, config: LayoutConfig) -> Result<(), LayoutError> {
        self.item_count = items.len();
        self.rows = pack(items, config.num_cols)?;
        self.config = config;
        self.scroll
            .set_bounds(ScrollBounds::for_layout(&self.config, self.rows.len()));
        self.dirty = true;
        debug!(
            items = self.item_count,
            rows = self.rows.len(),
            bounds = ?self.scroll.bounds(),
            "Repacked bubble field"
        );
        Ok(())
    }

    /// Start a drag with the pointer at `(x, y)` in field units.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.scroll.begin_drag(x, y);
    }

    /// Move the current drag's pointer to `(x, y)`.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        if self.scroll.drag_to(x, y) {
            self.dirty = true;
        }
    }

    /// Finish the current drag.
    pub fn end_drag(&mut self) {
        self.scroll.end_drag();
    }

    /// Jump to `(top, left)`, clamped.
    pub fn scroll_to(&mut self, top: f64, left: f64) {
        if self.scroll.scroll_to(top, left) {
            self.dirty = true;
        }
    }

    /// Scroll by a relative amount, clamped.
    pub fn scroll_by(&mut self, delta_top: f64, delta_left: f64) {
        if self.scroll.scroll_by(delta_top, delta_left) {
            self.dirty = true;
        }
    }

    /// Return to the centre of the scroll range.
    pub fn centre(&mut self) {
        if self.scroll.centre() {
            self.dirty = true;
        }
    }

    /// Frames for the current scroll position, one per item in row-major
    /// order. Fillers get no frame.
    ///
    /// Only re-evaluates the geometry if something changed since the last
    /// call.
    pub fn recompute(&mut self) -> &[BubbleFrame] {
        if self.dirty {
            self.frames.clear();
            let config = &self.config;
            let (scroll_top, scroll_left) = (self.scroll.scroll_top(), self.scroll.scroll_left());

            for (row_index, row) in self.rows.iter().enumerate() {
                for (col, slot) in row.slots().iter().enumerate() {
                    if slot.is_filler() {
                        continue;
                    }
                    let position = GridPosition::new(row_index, col);
                    let (anchor_x, anchor_y) = anchor_offset(position, row.len(), config);
                    let offset_x = anchor_x - scroll_left;
                    let offset_y = anchor_y - scroll_top;
                    let metrics = metrics_at(offset_x, offset_y, config);
                    let props = config.provide_props.then_some(ProvidedProps {
                        bubble_size: metrics.scale * config.bubble_size,
                        distance_to_center: metrics.distance_to_center,
                        max_size: config.bubble_size,
                        min_size: config.min_bubble_size,
                    });
                    self.frames.push(BubbleFrame {
                        position,
                        offset_x,
                        offset_y,
                        metrics,
                        props,
                    });
                }
            }

            self.dirty = false;
            trace!(frames = self.frames.len(), scroll_top, scroll_left, "Recomputed frames");
        }
        &self.frames
    }

    /// Frames from the last [`recompute`](Self::recompute), possibly stale.
    pub fn frames(&self) -> &[BubbleFrame] {
        &self.frames
    }

    /// Check if the cached frames are out of date.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Packed rows.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Number of items, fillers excluded.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Options the field was configured with.
    pub fn options(&self) -> &BubbleOptions {
        &self.options
    }

    /// Resolved configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Scroll state.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Scroll bounds for the current layout.
    pub fn bounds(&self) -> ScrollBounds {
        self.scroll.bounds()
    }

    /// Guide outlines, when enabled.
    pub fn guides(&self) -> Option<Guides> {
        guides(&self.config)
    }

    /// The item at `position`, if it is a real item.
    pub fn item(&self, position: GridPosition) -> Option<&T> {
        self.rows.get(position.row)?.get(position.col)?.item()
    }
}

#[cfg(test)]
#[path = "bubble_field_tests.rs"]
mod tests;
