//! # PagerBar Component
//!
//! One line: `◀ Prev   Page 2 of 5   Next ▶`. A control at its bound is
//! drawn dimmed to show it is disabled.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct PagerBar {
    pub label: String,
    pub can_prev: bool,
    pub can_next: bool,
}

impl PagerBar {
    pub fn new(label: String, can_prev: bool, can_next: bool) -> Self {
        Self {
            label,
            can_prev,
            can_next,
        }
    }

    fn control_style(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }
}

impl Component for PagerBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("◀ Prev", Self::control_style(self.can_prev)),
            Span::raw("   "),
            Span::styled(self.label.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("Next ▶", Self::control_style(self.can_next)),
        ])
        .centered();

        frame.render_widget(Paragraph::new(line), area);
    }
}
