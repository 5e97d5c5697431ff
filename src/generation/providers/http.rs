//! HTTP generator: uploads the input as `multipart/form-data` to
//! `<base_url>/generate-flashcards` and decodes `{ "flashcards": [...] }`.
//!
//! No timeout or retry is applied. A request that never settles leaves the
//! caller waiting.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};

use crate::core::deck::Deck;
use crate::core::validation::{PDF_MIME, check_pdf_bytes};
use crate::generation::{FlashcardGenerator, GenerateResponse, GenerationInput, GeneratorError};

pub const GENERATE_PATH: &str = "generate-flashcards";

pub struct HttpGenerator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url, GENERATE_PATH)
    }

    async fn build_form(&self, input: GenerationInput) -> Result<Form, GeneratorError> {
        let field = input.field_name();
        let form = match input {
            GenerationInput::Pdf(file) => {
                let bytes = tokio::fs::read(&file.path)
                    .await
                    .map_err(|e| GeneratorError::Io(format!("{}: {e}", file.path.display())))?;
                // The file may have changed on disk since it was selected
                check_pdf_bytes(&bytes).map_err(|e| {
                    warn!("Refusing to upload {}: {}", file.name, e);
                    GeneratorError::Io(format!("{}: {e}", file.path.display()))
                })?;
                debug!("Uploading {} ({} bytes) as '{}'", file.name, bytes.len(), field);
                let part = Part::bytes(bytes)
                    .file_name(file.name)
                    .mime_str(PDF_MIME)
                    .map_err(|e| GeneratorError::Io(e.to_string()))?;
                Form::new().part(field, part)
            }
            GenerationInput::Text(text) => {
                debug!("Uploading {} chars of text as '{}'", text.chars().count(), field);
                Form::new().text(field, text)
            }
        };
        Ok(form)
    }
}

#[async_trait]
impl FlashcardGenerator for HttpGenerator {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(&self, input: GenerationInput) -> Result<Deck, GeneratorError> {
        let form = self.build_form(input).await?;
        let url = self.url();
        info!("Generation request: POST {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        debug!("Generation response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Generation API error: {} - {}", status, err_body);
            return Err(GeneratorError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;
        let parsed: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Undecodable generation response: {} ({} bytes)", e, body.len());
            GeneratorError::Parse(e.to_string())
        })?;

        let deck = parsed.into_deck();
        info!("Generation complete: {} cards", deck.len());
        Ok(deck)
    }
}
