//! # InputPanel Component
//!
//! The two mutually exclusive ways of feeding the generator:
//!
//! ```text
//! ┌ PDF file ─────────────────────────────────┐
//! │ ~/notes/lecture-3.pdf                     │
//! └──────────────── ✓ lecture-3.pdf (48.2 KB) ┘
//! ┌ Or type text ─────────────────────────────┐
//! │                                           │
//! └───────────────────────────────────────────┘
//!  Only PDF files are accepted (got image/png).
//! ```
//!
//! ## State Management
//!
//! The two edit buffers are internal state. Which field has focus, the
//! current selection, the inline error and whether text is enabled are props
//! synced from `App` / `TuiState` before each frame.
//!
//! Editing is append-only at the end of each buffer; there is no cursor
//! movement inside a field.

mod text_wrap;

use std::path::PathBuf;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::validation::SelectedFile;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_wrap::{
    MAX_VISIBLE_LINES, MIN_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, unquote_path,
    wrapped_lines,
};

/// Height of the single-line path field including borders.
const FILE_FIELD_HEIGHT: u16 = 3;
/// Height of the inline error line.
const ERROR_LINE_HEIGHT: u16 = 1;

/// Which field of the panel owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    File,
    Text,
}

/// High-level events emitted by the InputPanel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// Enter pressed in the file field with a non-empty path.
    SelectFile(PathBuf),
    /// The free-text buffer changed.
    TextChanged(String),
}

pub struct InputPanel {
    /// Path being typed (Internal State)
    pub path_buffer: String,
    /// Free text being typed (Internal State)
    pub text_buffer: String,
    /// Field with keyboard focus, None when focus is elsewhere (Prop)
    pub focused: Option<PanelField>,
    /// Currently selected file (Prop)
    pub selected_file: Option<SelectedFile>,
    /// Inline validation message (Prop)
    pub error: Option<String>,
    /// False while a file is selected (Prop)
    pub text_enabled: bool,
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            path_buffer: String::new(),
            text_buffer: String::new(),
            focused: Some(PanelField::File),
            selected_file: None,
            error: None,
            text_enabled: true,
        }
    }

    /// Total height for the given width: file field, text area, error line.
    pub fn calculate_height(&self, width: u16) -> u16 {
        FILE_FIELD_HEIGHT + self.text_area_height(width) + ERROR_LINE_HEIGHT
    }

    fn text_area_height(&self, width: u16) -> u16 {
        let lines = wrapped_lines(&self.text_buffer, inner_width(width)).len() as u16;
        lines.clamp(MIN_VISIBLE_LINES, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn focus_style(&self, field: PanelField) -> Style {
        if self.focused == Some(field) {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    fn selection_summary(&self) -> Option<Line<'static>> {
        let file = self.selected_file.as_ref()?;
        let size_kb = file.size as f64 / 1024.0;
        let (mark, color) = if self.error.is_some() {
            ("✗", Color::Red)
        } else {
            ("✓", Color::Green)
        };
        Some(
            Line::styled(
                format!(" {mark} {} ({size_kb:.1} KB) ", file.name),
                Style::default().fg(color),
            )
            .right_aligned(),
        )
    }

    fn render_file_field(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.focus_style(PanelField::File))
            .title(" PDF file (Enter select, Ctrl+X clear) ");
        if let Some(summary) = self.selection_summary() {
            block = block.title_bottom(summary);
        }

        frame.render_widget(Paragraph::new(self.path_buffer.as_str()).block(block), area);

        if self.focused == Some(PanelField::File) {
            let width = self.path_buffer.chars().count() as u16;
            let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }

    fn render_text_area(&self, frame: &mut Frame, area: Rect) {
        let (title, text_style) = if self.text_enabled {
            (" Or type text ", Style::default())
        } else {
            (
                " Text (disabled while a file is selected) ",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            )
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.focus_style(PanelField::Text))
            .title(title);

        // Keep the tail of the text visible once it outgrows the area
        let lines = wrapped_lines(&self.text_buffer, inner_width(area.width));
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD) as usize;
        let start = lines.len().saturating_sub(visible.max(1));
        let shown = lines[start..].join("\n");

        frame.render_widget(Paragraph::new(shown).style(text_style).block(block), area);

        if self.focused == Some(PanelField::Text) && self.text_enabled {
            let last = lines.last().map(|l| l.chars().count()).unwrap_or(0) as u16;
            let row = (lines.len() - start).saturating_sub(1) as u16;
            let x = (area.x + 1 + last).min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1 + row));
        }
    }
}

impl Component for InputPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [file_area, text_area, error_area] = Layout::vertical([
            Constraint::Length(FILE_FIELD_HEIGHT),
            Constraint::Length(self.text_area_height(area.width)),
            Constraint::Length(ERROR_LINE_HEIGHT),
        ])
        .areas(area);

        self.render_file_field(frame, file_area);
        self.render_text_area(frame, text_area);

        if let Some(error) = &self.error {
            let line = Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red));
            frame.render_widget(line, error_area);
        }
    }
}

impl EventHandler for InputPanel {
    type Event = PanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match self.focused? {
            PanelField::File => match event {
                TuiEvent::InputChar(c) if *c != '\n' => {
                    self.path_buffer.push(*c);
                    None
                }
                TuiEvent::Paste(text) => {
                    self.path_buffer.push_str(text.trim_end_matches(['\r', '\n']));
                    None
                }
                TuiEvent::Backspace => {
                    self.path_buffer.pop();
                    None
                }
                TuiEvent::Submit => {
                    let path = unquote_path(&self.path_buffer);
                    (!path.is_empty()).then(|| PanelEvent::SelectFile(PathBuf::from(path)))
                }
                _ => None,
            },
            PanelField::Text => {
                if !self.text_enabled {
                    return None;
                }
                match event {
                    TuiEvent::InputChar(c) => self.text_buffer.push(*c),
                    TuiEvent::Submit => self.text_buffer.push('\n'),
                    TuiEvent::Paste(text) => self.text_buffer.push_str(text),
                    TuiEvent::Backspace => {
                        self.text_buffer.pop()?;
                    }
                    _ => return None,
                }
                Some(PanelEvent::TextChanged(self.text_buffer.clone()))
            }
        }
    }
}
