//! # Application State
//!
//! Core business state for flashdeck. Domain logic only, no TUI types.
//! Presentation state (focus, field buffers, hit-test rects) lives in `tui`.
//!
//! ```text
//! App
//! ├── generator: Arc<dyn FlashcardGenerator>  // remote service
//! ├── endpoint: String                  // shown in the title bar
//! ├── selected_file: Option<SelectedFile>
//! ├── text: String                      // free-text alternative
//! ├── validation_error: Option<ValidationError>
//! ├── deck: Deck                        // last successful generation
//! ├── flipped: Vec<bool>                // one flag per card, false = front
//! ├── pager: Pager                      // current page
//! ├── is_loading: bool                  // request in flight
//! ├── notice: Option<Notice>            // modal message
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;
use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::deck::{Deck, Flashcard};
use crate::core::pagination::{CardLayout, Pager};
use crate::core::validation::{SelectedFile, ValidationError};
use crate::generation::FlashcardGenerator;

/// A message the user must acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    GenerationFailed,
    NoCards,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::GenerationFailed => "Generation failed",
            Notice::NoCards => "No flashcards",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::GenerationFailed => {
                write!(f, "Failed to generate flashcards. Please try again.")
            }
            Notice::NoCards => write!(
                f,
                "No flashcards could be generated from this input. Try a different document."
            ),
        }
    }
}

pub struct App {
    pub generator: Arc<dyn FlashcardGenerator>,
    pub endpoint: String,
    pub selected_file: Option<SelectedFile>,
    pub text: String,
    pub validation_error: Option<ValidationError>,
    pub deck: Deck,
    pub flipped: Vec<bool>,
    pub pager: Pager,
    pub is_loading: bool,
    pub notice: Option<Notice>,
    pub status_message: String,
}

impl App {
    pub fn new(generator: Arc<dyn FlashcardGenerator>, endpoint: String, layout: CardLayout) -> Self {
        Self {
            generator,
            endpoint,
            selected_file: None,
            text: String::new(),
            validation_error: None,
            deck: Vec::new(),
            flipped: Vec::new(),
            pager: Pager::new(layout),
            is_loading: false,
            notice: None,
            status_message: String::from("Choose a PDF or type some text"),
        }
    }

    pub fn from_config(generator: Arc<dyn FlashcardGenerator>, config: &ResolvedConfig) -> Self {
        Self::new(generator, config.endpoint.clone(), config.layout)
    }

    /// Free text is only accepted while no file is selected.
    pub fn text_enabled(&self) -> bool {
        self.selected_file.is_none()
    }

    /// Whether a Generate press would send a request right now.
    pub fn can_submit(&self) -> bool {
        if self.is_loading {
            return false;
        }
        match &self.selected_file {
            Some(_) => self.validation_error.is_none(),
            None => !self.text.trim().is_empty(),
        }
    }

    /// Replace the deck and start over from the first page, all cards face up.
    pub fn replace_deck(&mut self, deck: Deck) {
        self.flipped = vec![false; deck.len()];
        self.deck = deck;
        self.pager.reset();
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    /// Cards on the current page with their deck index.
    pub fn visible_cards(&self) -> impl Iterator<Item = (usize, &Flashcard)> {
        let range = self.pager.range(self.deck.len());
        self.deck[range.clone()]
            .iter()
            .enumerate()
            .map(move |(offset, card)| (range.start + offset, card))
    }

    pub fn page_label(&self) -> Option<String> {
        (!self.deck.is_empty()).then(|| self.pager.label(self.deck.len()))
    }
}
