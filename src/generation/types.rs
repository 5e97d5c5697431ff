use serde::Deserialize;

use super::provider::GeneratorError;
use crate::core::deck::{Deck, Flashcard};
use crate::core::validation::SelectedFile;

/// What gets uploaded. A selected file always wins over typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationInput {
    /// Sent as multipart field `pdf`.
    Pdf(SelectedFile),
    /// Trimmed text, sent as multipart field `text`.
    Text(String),
}

impl GenerationInput {
    /// Multipart field name for this input.
    pub fn field_name(&self) -> &'static str {
        match self {
            GenerationInput::Pdf(_) => "pdf",
            GenerationInput::Text(_) => "text",
        }
    }
}

/// Success body of `POST /generate-flashcards`.
#[derive(Deserialize, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub flashcards: Option<Vec<Flashcard>>,
}

impl GenerateResponse {
    pub fn into_deck(self) -> Deck {
        self.flashcards.unwrap_or_default()
    }
}

/// How a generation round ended. Consumed by a single completion handler.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// At least one card came back.
    Deck(Deck),
    /// The service succeeded but produced nothing usable.
    Empty,
    /// Transport, HTTP, file, or decode failure.
    Failed(String),
}

impl From<Result<Deck, GeneratorError>> for GenerationOutcome {
    fn from(result: Result<Deck, GeneratorError>) -> Self {
        match result {
            Ok(deck) if deck.is_empty() => GenerationOutcome::Empty,
            Ok(deck) => GenerationOutcome::Deck(deck),
            Err(e) => GenerationOutcome::Failed(e.to_string()),
        }
    }
}
