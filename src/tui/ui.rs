use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{FlashcardView, NoticePopup, PagerBar, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let panel_height = tui.input_panel.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Length(panel_height), Min(3), Length(1), Length(1)]);
    let [title_area, panel_area, deck_area, pager_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.endpoint.clone(),
        app.status_message.clone(),
        app.is_loading,
        spinner_frame,
    )
    .render(frame, title_area);

    tui.input_panel.render(frame, panel_area);

    draw_deck(frame, deck_area, app, tui);

    if let Some(label) = app.page_label() {
        let len = app.deck.len();
        PagerBar::new(label, app.pager.can_prev(), app.pager.can_next(len)).render(frame, pager_area);
    }

    draw_help(frame, help_area, app);

    if let Some(notice) = app.notice {
        let full = frame.area();
        NoticePopup::new(notice).render(frame, full);
    }
}

fn draw_deck(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    tui.card_areas.clear();

    if app.deck.is_empty() {
        let message = if app.is_loading {
            "Generating flashcards..."
        } else {
            "No flashcards yet. Choose a PDF or type some text, then press Ctrl+G."
        };
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ));
        frame.render_widget(placeholder, area);
        return;
    }

    let per_page = app.pager.per_page() as u32;
    let slots = Layout::horizontal((0..per_page).map(|_| Constraint::Ratio(1, per_page))).split(area);
    let deck_focused = tui.focus == Focus::Deck;

    for (slot, (index, card)) in app.visible_cards().enumerate() {
        let slot_area = slots[slot];
        let is_selected = deck_focused && slot == tui.selected_slot;
        frame.render_widget(
            FlashcardView::new(card, app.is_flipped(index), is_selected),
            slot_area,
        );
        tui.card_areas.push((index, slot_area));
    }
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let dim = Style::default().fg(Color::DarkGray);
    let generate = if app.can_submit() { key } else { dim.add_modifier(Modifier::DIM) };

    let line = Line::from(vec![
        Span::styled(" Ctrl+G", generate),
        Span::styled(" generate  ", dim),
        Span::styled("Tab", key),
        Span::styled(" focus  ", dim),
        Span::styled("←/→", key),
        Span::styled(" page  ", dim),
        Span::styled("Space", key),
        Span::styled(" flip  ", dim),
        Span::styled("Ctrl+Q", key),
        Span::styled(" quit", dim),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Hit test: which card (by deck index), if any, was drawn at this cell.
pub fn hit_test_card(card_areas: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    card_areas
        .iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(index, _)| *index)
}
