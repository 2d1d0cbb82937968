//! Mouse event handler.
//!
//! Maps terminal mouse events onto a [`BubbleField`]: left button drags the
//! field, the wheel scrolls it.

use crate::state::BubbleField;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// How terminal cells map to field units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    /// Field units covered by one terminal column.
    pub units_per_column: f64,
    /// Field units covered by one terminal row.
    pub units_per_row: f64,
}

impl CellScale {
    /// Position of the cell `(column, row)` in field units, relative to the
    /// top-left of `area`.
    pub fn to_units(&self, column: u16, row: u16, area: Rect) -> (f64, f64) {
        let x = f64::from(column.saturating_sub(area.x)) * self.units_per_column;
        let y = f64::from(row.saturating_sub(area.y)) * self.units_per_row;
        (x, y)
    }
}

/// What a mouse event did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseOutcome {
    /// A drag started.
    DragStarted,
    /// The drag in progress moved.
    Dragged,
    /// The drag in progress finished.
    DragEnded,
    /// The wheel scrolled the field.
    Scrolled,
    /// Nothing happened.
    Ignored,
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Apply `mouse` to `field`.
///
/// # Arguments
/// * `area` - The rectangle the field is drawn in. Drags only start inside it.
/// * `scale` - Cell to field-unit conversion.
/// * `wheel_step` - Field units scrolled per wheel notch.
///
/// # Behavior
/// - Left press inside `area` starts a drag at the pointer.
/// - Left drag moves the field while a drag is in progress, even if the
///   pointer has left `area`.
/// - Left release ends the drag.
/// - Wheel up/down scrolls vertically; wheel left/right horizontally.
pub fn handle_mouse_event<T>(
    field: &mut BubbleField<T>,
    mouse: MouseEvent,
    area: Rect,
    scale: CellScale,
    wheel_step: f64,
) -> MouseOutcome {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !contains(area, mouse.column, mouse.row) {
                return MouseOutcome::Ignored;
            }
            let (x, y) = scale.to_units(mouse.column, mouse.row, area);
            field.begin_drag(x, y);
            MouseOutcome::DragStarted
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !field.scroll().is_dragging() {
                return MouseOutcome::Ignored;
            }
            let (x, y) = scale.to_units(mouse.column, mouse.row, area);
            field.drag_to(x, y);
            MouseOutcome::Dragged
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if !field.scroll().is_dragging() {
                return MouseOutcome::Ignored;
            }
            field.end_drag();
            MouseOutcome::DragEnded
        }
        MouseEventKind::ScrollUp => {
            field.scroll_by(-wheel_step, 0.0);
            MouseOutcome::Scrolled
        }
        MouseEventKind::ScrollDown => {
            field.scroll_by(wheel_step, 0.0);
            MouseOutcome::Scrolled
        }
        MouseEventKind::ScrollLeft => {
            field.scroll_by(0.0, -wheel_step);
            MouseOutcome::Scrolled
        }
        MouseEventKind::ScrollRight => {
            field.scroll_by(0.0, wheel_step);
            MouseOutcome::Scrolled
        }
        _ => MouseOutcome::Ignored,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
