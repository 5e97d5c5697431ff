//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. It is also
//! where `Effect`s turn into real work: reading file metadata for a typed
//! path, and spawning the generation request on tokio.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::validation::SelectedFile;
use crate::generation::{FlashcardGenerator, GenerationInput, GenerationOutcome, HttpGenerator};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputPanel, PanelEvent, PanelField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which area of the screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    File,
    Text,
    Deck,
}

impl Focus {
    /// Tab order File → Text → Deck, skipping areas that can't take input.
    fn cycle(self, forward: bool, text_enabled: bool, has_deck: bool) -> Focus {
        let order = [Focus::File, Focus::Text, Focus::Deck];
        let available = |f: &Focus| match f {
            Focus::File => true,
            Focus::Text => text_enabled,
            Focus::Deck => has_deck,
        };
        let pos = order.iter().position(|f| *f == self).unwrap_or(0);
        (1..=order.len())
            .map(|step| {
                if forward {
                    order[(pos + step) % order.len()]
                } else {
                    order[(pos + order.len() * 2 - step) % order.len()]
                }
            })
            .find(available)
            .unwrap_or(Focus::File)
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_panel: InputPanel,
    pub focus: Focus,
    /// Card slot on the current page that Space/Enter flips.
    pub selected_slot: usize,
    /// Deck index and screen rect of every card drawn last frame.
    pub card_areas: Vec<(usize, Rect)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_panel: InputPanel::new(),
            focus: Focus::File,
            selected_slot: 0,
            card_areas: Vec::new(),
        }
    }

    /// Copy props from `App` into the components before drawing.
    pub fn sync_props(&mut self, app: &App) {
        // A file selected while typing text pushes focus back to the file field
        if self.focus == Focus::Text && !app.text_enabled() {
            self.focus = Focus::File;
        }
        if self.focus == Focus::Deck && app.deck.is_empty() {
            self.focus = Focus::File;
        }
        let visible = app.pager.range(app.deck.len()).len();
        self.selected_slot = self.selected_slot.min(visible.saturating_sub(1));

        let panel = &mut self.input_panel;
        panel.focused = match self.focus {
            Focus::File => Some(PanelField::File),
            Focus::Text => Some(PanelField::Text),
            Focus::Deck => None,
        };
        panel.selected_file = app.selected_file.clone();
        panel.error = app.validation_error.as_ref().map(|e| e.to_string());
        panel.text_enabled = app.text_enabled();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Inspect a path and turn the result into an action.
pub fn select_path(path: &Path) -> Action {
    match SelectedFile::from_path(path) {
        Ok(file) => Action::FileSelected(file),
        Err(e) => Action::FileUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}

pub fn run(config: ResolvedConfig, initial_file: Option<PathBuf>) -> std::io::Result<()> {
    let generator: Arc<dyn FlashcardGenerator> = Arc::new(HttpGenerator::new(config.endpoint.clone()));
    let mut app = App::from_config(generator, &config);
    let mut tui = TuiState::new();

    if let Some(path) = initial_file {
        tui.input_panel.path_buffer = path.display().to_string();
        update(&mut app, select_path(&path));
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.sync_props(&app);
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            tui.sync_props(&app);
            match dispatch(&mut app, &mut tui, event) {
                Effect::Quit => break 'main,
                Effect::SpawnRequest(input) => {
                    spawn_request(app.generator.clone(), input, tx.clone());
                }
                Effect::None => {}
            }
        }

        // Completions from the request task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                break 'main;
            }
        }
    }

    ratatui::restore();
    info!("flashdeck shutting down");
    Ok(())
}

/// Route one terminal event to the notice, the input panel, or the deck.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Ctrl+C / Ctrl+Q always quits, even with a notice open
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // The notice is modal
    if app.notice.is_some() {
        if matches!(event, TuiEvent::Escape | TuiEvent::Submit) {
            return update(app, Action::DismissNotice);
        }
        return Effect::None;
    }

    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Generate => update(app, Action::Generate),
        TuiEvent::ClearFile => {
            tui.input_panel.path_buffer.clear();
            update(app, Action::ClearFile)
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            let forward = matches!(event, TuiEvent::FocusNext);
            tui.focus = tui
                .focus
                .cycle(forward, app.text_enabled(), !app.deck.is_empty());
            Effect::None
        }
        TuiEvent::MouseClick(column, row) => {
            match ui::hit_test_card(&tui.card_areas, column, row) {
                Some(index) => {
                    tui.focus = Focus::Deck;
                    let start = app.pager.range(app.deck.len()).start;
                    tui.selected_slot = index.saturating_sub(start);
                    update(app, Action::FlipCard(index))
                }
                None => Effect::None,
            }
        }
        _ if tui.focus == Focus::Deck => handle_deck_event(app, tui, &event),
        _ => match tui.input_panel.handle_event(&event) {
            Some(PanelEvent::SelectFile(path)) => update(app, select_path(&path)),
            Some(PanelEvent::TextChanged(text)) => update(app, Action::TextChanged(text)),
            None => Effect::None,
        },
    }
}

fn handle_deck_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::CursorLeft | TuiEvent::PageUp => {
            tui.selected_slot = 0;
            update(app, Action::PrevPage)
        }
        TuiEvent::CursorRight | TuiEvent::PageDown => {
            tui.selected_slot = 0;
            update(app, Action::NextPage)
        }
        TuiEvent::CursorUp => {
            tui.selected_slot = tui.selected_slot.saturating_sub(1);
            Effect::None
        }
        TuiEvent::CursorDown => {
            let visible = app.pager.range(app.deck.len()).len();
            tui.selected_slot = (tui.selected_slot + 1).min(visible.saturating_sub(1));
            Effect::None
        }
        TuiEvent::InputChar(' ') | TuiEvent::Submit => {
            let index = app.pager.range(app.deck.len()).start + tui.selected_slot;
            update(app, Action::FlipCard(index))
        }
        _ => Effect::None,
    }
}

/// Run the request on tokio and report back exactly one completion.
fn spawn_request(
    generator: Arc<dyn FlashcardGenerator>,
    input: GenerationInput,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning generation request via {}", generator.name());
    tokio::spawn(async move {
        let request_start = std::time::Instant::now();
        let outcome = GenerationOutcome::from(generator.generate(input).await);
        debug!(
            "Generation settled in {}ms",
            request_start.elapsed().as_millis()
        );
        if tx.send(Action::GenerationFinished(outcome)).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Notice;
    use crate::core::validation::ValidationError;
    use crate::test_support::{sample_deck, test_app};
    use std::io::Write;

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            tui.sync_props(app);
            dispatch(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_focus_cycle_skips_disabled_text() {
        assert_eq!(Focus::File.cycle(true, true, false), Focus::Text);
        assert_eq!(Focus::File.cycle(true, false, true), Focus::Deck);
        assert_eq!(Focus::File.cycle(true, false, false), Focus::File);
        assert_eq!(Focus::Deck.cycle(true, true, true), Focus::File);
        assert_eq!(Focus::File.cycle(false, true, true), Focus::Deck);
        assert_eq!(Focus::Text.cycle(false, true, true), Focus::File);
    }

    #[test]
    fn test_typed_text_then_generate_spawns_request() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.focus = Focus::Text;

        type_str(&mut app, &mut tui, " osmosis ");
        assert_eq!(app.text, " osmosis ");

        let effect = dispatch(&mut app, &mut tui, TuiEvent::Generate);
        assert_eq!(
            effect,
            Effect::SpawnRequest(GenerationInput::Text("osmosis".to_string()))
        );
        assert!(app.is_loading);
    }

    #[test]
    fn test_selecting_pdf_path_from_panel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"%PDF-1.4 minimal")
            .unwrap();

        let mut app = test_app();
        let mut tui = TuiState::new();
        type_str(&mut app, &mut tui, &path.display().to_string());
        dispatch(&mut app, &mut tui, TuiEvent::Submit);

        assert_eq!(app.selected_file.as_ref().map(|f| f.name.as_str()), Some("notes.pdf"));
        assert!(app.validation_error.is_none());
        assert!(!app.text_enabled());
    }

    #[test]
    fn test_selecting_missing_path_reports_error() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        type_str(&mut app, &mut tui, "/definitely/not/here.pdf");
        dispatch(&mut app, &mut tui, TuiEvent::Submit);

        assert!(matches!(
            app.validation_error,
            Some(ValidationError::Unreadable { .. })
        ));
        tui.sync_props(&app);
        assert!(tui.input_panel.error.is_some());
    }

    #[test]
    fn test_clear_file_empties_path_field() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.input_panel.path_buffer = "x.pdf".to_string();
        dispatch(&mut app, &mut tui, TuiEvent::ClearFile);
        assert!(tui.input_panel.path_buffer.is_empty());
    }

    #[test]
    fn test_notice_is_modal() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.notice = Some(Notice::GenerationFailed);
        app.text = "cells".to_string();

        assert_eq!(dispatch(&mut app, &mut tui, TuiEvent::Generate), Effect::None);
        assert!(!app.is_loading);

        dispatch(&mut app, &mut tui, TuiEvent::Escape);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_force_quit_wins_over_notice() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        app.notice = Some(Notice::NoCards);
        assert_eq!(dispatch(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_deck_keys_page_and_flip() {
        let mut app = test_app();
        app.replace_deck(sample_deck(2));
        let mut tui = TuiState::new();
        tui.focus = Focus::Deck;

        dispatch(&mut app, &mut tui, TuiEvent::InputChar(' '));
        assert!(app.is_flipped(0));

        dispatch(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.pager.page, 1);
        dispatch(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.pager.page, 1);

        dispatch(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.is_flipped(1));

        dispatch(&mut app, &mut tui, TuiEvent::CursorLeft);
        dispatch(&mut app, &mut tui, TuiEvent::CursorLeft);
        assert_eq!(app.pager.page, 0);
    }

    #[test]
    fn test_click_on_card_flips_it() {
        let mut app = test_app();
        app.replace_deck(sample_deck(1));
        let mut tui = TuiState::new();
        tui.card_areas = vec![(0, Rect::new(0, 10, 80, 10))];

        dispatch(&mut app, &mut tui, TuiEvent::MouseClick(3, 12));
        assert!(app.is_flipped(0));
        assert_eq!(tui.focus, Focus::Deck);

        dispatch(&mut app, &mut tui, TuiEvent::MouseClick(3, 12));
        assert!(!app.is_flipped(0));

        dispatch(&mut app, &mut tui, TuiEvent::MouseClick(3, 2));
        assert!(!app.is_flipped(0));
    }

    #[test]
    fn test_sync_props_moves_focus_off_disabled_text() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.focus = Focus::Text;
        app.selected_file = Some(SelectedFile {
            path: PathBuf::from("a.pdf"),
            name: "a.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size: 10,
        });
        tui.sync_props(&app);
        assert_eq!(tui.focus, Focus::File);
        assert!(!tui.input_panel.text_enabled);
    }

    #[tokio::test]
    async fn test_spawned_request_always_reports_back() {
        let (tx, rx) = mpsc::channel();
        spawn_request(
            Arc::new(crate::test_support::NoopGenerator),
            GenerationInput::Text("x".to_string()),
            tx,
        );

        let action = tokio::task::spawn_blocking(move || rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action, Action::GenerationFinished(GenerationOutcome::Empty));
    }
}
