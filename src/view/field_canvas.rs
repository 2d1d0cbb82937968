//! Canvas widget that draws the bubble field.
//!
//! The canvas is centred on the viewport centre, so a frame's rendered
//! centre maps straight onto canvas coordinates (with y flipped, since the
//! canvas y axis points up).

use crate::model::BubbleFrame;
use crate::state::BubbleField;
use crate::view::constants::{
    GUIDE_SAMPLES_PER_CORNER, LABEL_SCALE_THRESHOLD, UNITS_PER_COLUMN, UNITS_PER_ROW,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Points},
        Widget,
    },
};

/// Canvas x and y bounds for `area`, in field units centred on 0.
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let half_width = f64::from(area.width) * UNITS_PER_COLUMN / 2.0;
    let half_height = f64::from(area.height) * UNITS_PER_ROW / 2.0;
    ([-half_width, half_width], [-half_height, half_height])
}

/// Outline colour for a bubble at `scale`.
///
/// Full-size bubbles are cyan, fully shrunk ones dark gray, everything in
/// the fringe blue.
pub fn bubble_color(scale: f64, min_proportion: f64) -> Color {
    if scale >= 1.0 {
        Color::Cyan
    } else if scale <= min_proportion {
        Color::DarkGray
    } else {
        Color::Blue
    }
}

/// `label` truncated to fit inside a bubble of `diameter` field units, or
/// `None` if not even one character fits.
pub fn fit_label(label: &str, diameter: f64) -> Option<String> {
    let max_chars = ((diameter / UNITS_PER_COLUMN).floor() as usize).saturating_sub(1);
    if max_chars == 0 || label.is_empty() {
        return None;
    }
    Some(label.chars().take(max_chars).collect())
}

/// Check if any part of `frame` falls inside the canvas bounds.
pub fn is_visible(frame: &BubbleFrame, bubble_size: f64, bounds: ([f64; 2], [f64; 2])) -> bool {
    let (x_bounds, y_bounds) = bounds;
    let (x, y) = frame.center();
    let radius = frame.metrics.scale * bubble_size / 2.0;
    x + radius >= x_bounds[0]
        && x - radius <= x_bounds[1]
        && y + radius >= y_bounds[0]
        && y - radius <= y_bounds[1]
}

/// Number of cached frames of `field` that show up in `area`.
pub fn visible_count<T>(field: &BubbleField<T>, area: Rect) -> usize {
    let bounds = canvas_bounds(area);
    let bubble_size = field.config().bubble_size;
    field
        .frames()
        .iter()
        .filter(|frame| is_visible(frame, bubble_size, bounds))
        .count()
}

/// Draws the frames of a [`BubbleField`] as circles, with labels on the
/// larger ones and the guide outlines when enabled.
///
/// Call [`BubbleField::recompute`] before rendering; the widget draws
/// whatever frames are cached.
pub struct FieldCanvas<'a> {
    field: &'a BubbleField<String>,
}

impl<'a> FieldCanvas<'a> {
    /// Create a canvas over `field`.
    pub fn new(field: &'a BubbleField<String>) -> Self {
        Self { field }
    }
}

impl Widget for FieldCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = canvas_bounds(area);
        let (x_bounds, y_bounds) = bounds;
        let config = self.field.config();
        let min_proportion = config.min_proportion();

        let guide_outlines: Vec<Vec<(f64, f64)>> = self
            .field
            .guides()
            .map(|guides| {
                [guides.inner, guides.outer]
                    .iter()
                    .map(|rect| {
                        rect.outline(GUIDE_SAMPLES_PER_CORNER)
                            .into_iter()
                            .map(|(x, y)| (x, -y))
                            .collect()
                    })
                    .collect()
            })
            .unwrap_or_default();

        let visible: Vec<&BubbleFrame> = self
            .field
            .frames()
            .iter()
            .filter(|frame| is_visible(frame, config.bubble_size, bounds))
            .collect();

        let labels: Vec<(f64, f64, String)> = visible
            .iter()
            .filter(|frame| frame.metrics.scale >= LABEL_SCALE_THRESHOLD)
            .filter_map(|frame| {
                let label = self.field.item(frame.position)?;
                let text = fit_label(label, frame.metrics.scale * config.bubble_size)?;
                let (x, y) = frame.center();
                let width = text.chars().count() as f64 * UNITS_PER_COLUMN;
                Some((x - width / 2.0, -y, text))
            })
            .collect();

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for outline in &guide_outlines {
                    ctx.draw(&Points {
                        coords: outline,
                        color: Color::Yellow,
                    });
                }
                for frame in &visible {
                    let (x, y) = frame.center();
                    ctx.draw(&Circle {
                        x,
                        y: -y,
                        radius: frame.metrics.scale * config.bubble_size / 2.0,
                        color: bubble_color(frame.metrics.scale, min_proportion),
                    });
                }
                ctx.layer();
                for (x, y, text) in &labels {
                    ctx.print(*x, *y, text.clone());
                }
            })
            .render(area, buf);
    }
}
