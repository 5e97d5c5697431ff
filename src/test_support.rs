//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::deck::{Deck, Flashcard};
use crate::core::pagination::CardLayout;
use crate::generation::{FlashcardGenerator, GenerationInput, GeneratorError};

/// A no-op generator for tests that don't need real API calls.
pub struct NoopGenerator;

#[async_trait]
impl FlashcardGenerator for NoopGenerator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn generate(&self, _input: GenerationInput) -> Result<Deck, GeneratorError> {
        Ok(Vec::new())
    }
}

/// Creates a test App with a NoopGenerator and one card per page.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(
        Arc::new(NoopGenerator),
        "http://test.invalid".to_string(),
        CardLayout::Single,
    )
}

/// `n` sided cards titled "Card 1".."Card n".
pub fn sample_deck(n: usize) -> Deck {
    (1..=n)
        .map(|i| {
            Flashcard::sided(
                &format!("Card {i}"),
                &format!("front {i}"),
                &format!("back {i}"),
            )
        })
        .collect()
}
