//! # Actions
//!
//! Everything that can happen in flashdeck becomes an `Action`.
//! User presses Ctrl+G? That's `Action::Generate`.
//! The service answers? That's `Action::GenerationFinished(outcome)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter to carry out. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};
use std::path::PathBuf;

use crate::core::state::{App, Notice};
use crate::core::validation::{SelectedFile, ValidationError, validate_file};
use crate::generation::{GenerationInput, GenerationOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A file was picked and its metadata read.
    FileSelected(SelectedFile),
    /// A path was entered but could not be inspected.
    FileUnreadable { path: PathBuf, reason: String },
    ClearFile,
    TextChanged(String),
    Generate,
    GenerationFinished(GenerationOutcome),
    NextPage,
    PrevPage,
    /// Toggle front/back of the card at this deck index.
    FlipCard(usize),
    DismissNotice,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnRequest(GenerationInput),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FileSelected(file) => {
            match validate_file(Some(&file)) {
                Ok(()) => {
                    info!("Accepted {} ({} bytes)", file.name, file.size);
                    app.validation_error = None;
                    app.status_message = format!("Ready: {}", file.name);
                }
                Err(e) => {
                    info!("Rejected {}: {}", file.name, e);
                    app.validation_error = Some(e);
                    app.status_message = String::from("File rejected");
                }
            }
            app.selected_file = Some(file);
            Effect::None
        }
        Action::FileUnreadable { path, reason } => {
            warn!("Cannot inspect {}: {}", path.display(), reason);
            app.selected_file = None;
            app.validation_error = Some(ValidationError::Unreadable { path, reason });
            app.status_message = String::from("File rejected");
            Effect::None
        }
        Action::ClearFile => {
            app.selected_file = None;
            app.validation_error = None;
            app.status_message = String::from("Choose a PDF or type some text");
            Effect::None
        }
        Action::TextChanged(text) => {
            if app.text_enabled() {
                app.text = text;
                if matches!(app.validation_error, Some(ValidationError::NoInput)) {
                    app.validation_error = None;
                }
            }
            Effect::None
        }
        Action::Generate => {
            if app.is_loading {
                debug!("Generate ignored: request already in flight");
                return Effect::None;
            }

            let input = match &app.selected_file {
                Some(file) => {
                    if let Err(e) = validate_file(Some(file)) {
                        app.validation_error = Some(e);
                        return Effect::None;
                    }
                    GenerationInput::Pdf(file.clone())
                }
                None => {
                    let text = app.text.trim();
                    if text.is_empty() {
                        app.validation_error = Some(ValidationError::NoInput);
                        return Effect::None;
                    }
                    GenerationInput::Text(text.to_string())
                }
            };

            info!("Generating flashcards from '{}' input", input.field_name());
            app.is_loading = true;
            app.notice = None;
            app.validation_error = None;
            app.status_message = String::from("Generating flashcards...");
            Effect::SpawnRequest(input)
        }
        Action::GenerationFinished(outcome) => {
            app.is_loading = false;
            match outcome {
                GenerationOutcome::Deck(deck) => {
                    info!("Loaded deck of {} cards", deck.len());
                    app.status_message = format!("Generated {} flashcards", deck.len());
                    app.replace_deck(deck);
                }
                GenerationOutcome::Empty => {
                    info!("Service returned no flashcards");
                    app.notice = Some(Notice::NoCards);
                    app.status_message = String::from("No flashcards produced");
                }
                GenerationOutcome::Failed(reason) => {
                    warn!("Flashcard generation failed: {}", reason);
                    app.notice = Some(Notice::GenerationFailed);
                    app.status_message = String::from("Generation failed");
                }
            }
            Effect::None
        }
        Action::NextPage => {
            app.pager.next(app.deck.len());
            Effect::None
        }
        Action::PrevPage => {
            app.pager.prev();
            Effect::None
        }
        Action::FlipCard(index) => {
            let flippable = app.deck.get(index).is_some_and(|c| c.is_flippable());
            if flippable && let Some(flag) = app.flipped.get_mut(index) {
                *flag = !*flag;
            }
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
