//! # Generation
//!
//! The seam between flashdeck and the remote flashcard service. The core
//! only sees [`FlashcardGenerator`]; the HTTP details live in `providers`.

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{FlashcardGenerator, GeneratorError};
pub use providers::HttpGenerator;
pub use types::{GenerateResponse, GenerationInput, GenerationOutcome};
