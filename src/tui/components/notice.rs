//! # Notice Popup
//!
//! Modal message drawn over everything else. While it is open the event loop
//! routes keys only to dismissal (Esc or Enter).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::state::Notice;
use crate::tui::component::Component;

pub struct NoticePopup {
    pub notice: Notice,
}

impl NoticePopup {
    pub fn new(notice: Notice) -> Self {
        Self { notice }
    }

    fn color(&self) -> Color {
        match self.notice {
            Notice::GenerationFailed => Color::Red,
            Notice::NoCards => Color::Yellow,
        }
    }
}

impl Component for NoticePopup {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let color = self.color();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notice.title()))
            .title_bottom(Line::from(" Enter/Esc dismiss ").centered())
            .padding(Padding::uniform(1));

        let paragraph = Paragraph::new(self.notice.to_string())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
