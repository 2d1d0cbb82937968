//! Status bar widget: scroll position, counts, toggles and key hints.

use crate::state::BubbleField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Key hints shown at the right of the status bar.
const KEY_HINTS: &str = "drag/arrows: scroll  r: centre  c: compact  g: guides  q: quit";

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// One-line summary of the field state.
pub struct StatusBar<'a, T> {
    field: &'a BubbleField<T>,
    visible: usize,
}

impl<'a, T> StatusBar<'a, T> {
    /// Create a status bar for `field`, with `visible` bubbles on screen.
    pub fn new(field: &'a BubbleField<T>, visible: usize) -> Self {
        Self { field, visible }
    }

    /// The status text as a styled line.
    pub fn line(&self) -> Line<'static> {
        let scroll = self.field.scroll();
        let config = self.field.config();
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().add_modifier(Modifier::BOLD);

        Line::from(vec![
            Span::styled(" scroll ", label),
            Span::styled(
                format!("{:.0},{:.0}", scroll.scroll_top(), scroll.scroll_left()),
                value,
            ),
            Span::styled("  shown ", label),
            Span::styled(format!("{}/{}", self.visible, self.field.item_count()), value),
            Span::styled("  compact ", label),
            Span::styled(on_off(config.compact), value),
            Span::styled("  guides ", label),
            Span::styled(on_off(config.show_guides), value),
            Span::styled(format!("  {KEY_HINTS}"), label),
        ])
    }
}

impl<T> Widget for StatusBar<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}
