use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::deck::Flashcard;
use crate::tui::component::Component;

/// A stateless component that renders one flashcard.
///
/// Sided cards show their front unless `flipped` is set, in which case
/// they show their back. The side currently shown is named in the bottom
/// border. Section records list every section as a labelled block and
/// ignore `flipped`.
///
/// Like `TitleBar`, this is created fresh each frame with borrowed data.
#[derive(Clone, Copy)]
pub struct FlashcardView<'a> {
    pub card: &'a Flashcard,
    pub flipped: bool,
    /// Whether this card owns the keyboard in the deck area.
    pub is_selected: bool,
}

impl<'a> FlashcardView<'a> {
    pub fn new(card: &'a Flashcard, flipped: bool, is_selected: bool) -> Self {
        Self {
            card,
            flipped,
            is_selected,
        }
    }

    fn border_style(&self) -> Style {
        if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }
}

impl<'a> Widget for FlashcardView<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let border_style = self.border_style();

        match self.card {
            Flashcard::Sided(card) => {
                let (side, body, body_style) = if self.flipped {
                    ("back", card.back.as_str(), Style::default().fg(Color::Green))
                } else {
                    ("front", card.front.as_str(), Style::default())
                };

                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(Line::from(format!(" {} ", card.title)).bold())
                    .title_bottom(Line::from(format!(" {side} · Space to flip ")).right_aligned())
                    .padding(Padding::uniform(1));

                Paragraph::new(body)
                    .style(body_style)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(area, buf);
            }
            Flashcard::Sections(_) => {
                let mut lines: Vec<Line> = Vec::new();
                for (label, text) in self.card.sections() {
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }
                    lines.push(Line::from(Span::styled(
                        label.to_string(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )));
                    lines.extend(text.lines().map(|l| Line::from(l.to_string())));
                }

                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .padding(Padding::horizontal(1));

                Paragraph::new(Text::from(lines))
                    .wrap(Wrap { trim: true })
                    .block(block)
                    .render(area, buf);
            }
        }
    }
}

impl<'a> Component for FlashcardView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
