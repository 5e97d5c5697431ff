//! # TitleBar Component
//!
//! Top status bar: service endpoint, status text, and a spinner while a
//! generation request is in flight.
//!
//! Stateless. Every field is a prop copied from `App` each frame.
//!
//! 1. **Loading**: `"flashdeck (http://host) | ⠹ Generating flashcards..."`
//! 2. **Status message**: `"flashdeck (http://host) | Generated 12 flashcards"`
//! 3. **Default**: `"flashdeck (http://host)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub endpoint: String,
    pub status_message: String,
    pub is_loading: bool,
    /// Monotonic frame counter driving the spinner.
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(endpoint: String, status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            endpoint,
            status_message,
            is_loading,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let head = format!("flashdeck ({})", self.endpoint);
        if self.is_loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            format!("{head} | {spinner} {}", self.status_message)
        } else if self.status_message.is_empty() {
            head
        } else {
            format!("{head} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_loading {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "http://localhost:8080".to_string(),
            "Generated 3 flashcards".to_string(),
            false,
            0,
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("flashdeck (http://localhost:8080)"));
        assert!(text.contains("| Generated 3 flashcards"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("http://h".to_string(), "".to_string(), false, 0);
        let text = rendered(&mut title_bar);
        assert!(text.contains("flashdeck (http://h)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_spinner_advances_with_frame() {
        let a = TitleBar::new("h".to_string(), "Generating".to_string(), true, 0).text();
        let b = TitleBar::new("h".to_string(), "Generating".to_string(), true, 1).text();
        assert_ne!(a, b);
        assert!(a.contains("⠋ Generating"));
    }
}
