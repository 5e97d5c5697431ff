use std::fmt;

use async_trait::async_trait;

use super::types::GenerationInput;
use crate::core::deck::Deck;

/// Errors that can occur while asking the service for a deck.
#[derive(Debug)]
pub enum GeneratorError {
    /// The selected file could not be read for upload.
    Io(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The success body was not the expected JSON.
    Parse(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Io(msg) => write!(f, "file error: {msg}"),
            GeneratorError::Network(msg) => write!(f, "network error: {msg}"),
            GeneratorError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GeneratorError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[async_trait]
pub trait FlashcardGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Sends the input to the service and returns the cards it produced.
    /// An empty deck is a successful answer, not an error.
    async fn generate(&self, input: GenerationInput) -> Result<Deck, GeneratorError>;
}
