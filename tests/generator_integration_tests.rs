use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use flashdeck::core::deck::Flashcard;
use flashdeck::core::validation::SelectedFile;
use flashdeck::generation::{
    FlashcardGenerator, GenerationInput, GenerationOutcome, GeneratorError, HttpGenerator,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Writes a small PDF-looking file and returns its selection record.
fn write_pdf(dir: &tempfile::TempDir, name: &str) -> SelectedFile {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n%%EOF\n")
        .unwrap();
    SelectedFile::from_path(&path).unwrap()
}

async fn mount_json(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn text(s: &str) -> GenerationInput {
    GenerationInput::Text(s.to_string())
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_pdf_upload_uses_pdf_field() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_pdf(&dir, "lecture.pdf");

    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .and(body_string_contains("name=\"pdf\""))
        .and(body_string_contains("filename=\"lecture.pdf\""))
        .and(body_string_contains("application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"flashcards":[{"Title":"Cells","Front side":"What is a cell?","Back side":"The unit of life"}]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let deck = generator
        .generate(GenerationInput::Pdf(file))
        .await
        .unwrap();

    assert_eq!(
        deck,
        vec![Flashcard::sided("Cells", "What is a cell?", "The unit of life")]
    );
}

#[tokio::test]
async fn test_text_upload_uses_text_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .and(body_string_contains("name=\"text\""))
        .and(body_string_contains("Mitochondria produce ATP"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"flashcards":[
                {"Title":"Energy","Front side":"What makes ATP?","Back side":"Mitochondria"},
                {"Title":"Energy 2","Front side":"ATP stands for?","Back side":"Adenosine triphosphate"}
            ]}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(format!("{}/", mock_server.uri()));
    let deck = generator
        .generate(text("Mitochondria produce ATP"))
        .await
        .unwrap();

    assert_eq!(deck.len(), 2);
    assert!(deck.iter().all(Flashcard::is_flippable));
}

// ============================================================================
// Response handling
// ============================================================================

#[tokio::test]
async fn test_server_error_is_failed_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&mock_server)
        .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let result = generator.generate(text("anything")).await;

    match &result {
        Err(GeneratorError::Api { status, message }) => {
            assert_eq!(*status, 500);
            assert!(message.contains("model overloaded"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
    assert!(matches!(
        GenerationOutcome::from(result),
        GenerationOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn test_empty_array_is_empty_outcome() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, r#"{"flashcards":[]}"#).await;

    let generator = HttpGenerator::new(mock_server.uri());
    let outcome = GenerationOutcome::from(generator.generate(text("hi")).await);

    assert_eq!(outcome, GenerationOutcome::Empty);
}

#[tokio::test]
async fn test_missing_flashcards_key_is_empty_outcome() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, r#"{"detail":"nothing to do"}"#).await;

    let generator = HttpGenerator::new(mock_server.uri());
    let outcome = GenerationOutcome::from(generator.generate(text("hi")).await);

    assert_eq!(outcome, GenerationOutcome::Empty);
}

#[tokio::test]
async fn test_section_records_are_accepted() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        r#"{"flashcards":[{"Question":"Capital of France?","Answer":"Paris","Hint":"Eiffel"}]}"#,
    )
    .await;

    let generator = HttpGenerator::new(mock_server.uri());
    let deck = generator.generate(text("geography")).await.unwrap();

    assert_eq!(deck.len(), 1);
    assert!(!deck[0].is_flippable());
    let sections = deck[0].sections();
    assert_eq!(sections.len(), 3);
    assert!(sections.contains(&("Answer", "Paris".to_string())));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "<html>gateway</html>").await;

    let generator = HttpGenerator::new(mock_server.uri());
    let result = generator.generate(text("hi")).await;

    assert!(
        matches!(result, Err(GeneratorError::Parse(_))),
        "Expected Parse error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_vanished_file_is_io_error_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"flashcards":[]}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let file = SelectedFile {
        path: PathBuf::from("/nonexistent/flashdeck/gone.pdf"),
        name: "gone.pdf".to_string(),
        mime: "application/pdf".to_string(),
        size: 10,
    };

    let generator = HttpGenerator::new(mock_server.uri());
    let result = generator.generate(GenerationInput::Pdf(file)).await;

    assert!(
        matches!(result, Err(GeneratorError::Io(_))),
        "Expected Io error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_file_grown_after_selection_is_not_uploaded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"flashcards":[]}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_pdf(&dir, "growing.pdf");
    assert!(file.size < 1_000);

    OpenOptions::new()
        .append(true)
        .open(&file.path)
        .unwrap()
        .write_all(&vec![b' '; 200_000])
        .unwrap();

    let generator = HttpGenerator::new(mock_server.uri());
    let result = generator.generate(GenerationInput::Pdf(file)).await;

    match &result {
        Err(GeneratorError::Io(message)) => assert!(message.contains("120 KB")),
        other => panic!("Expected Io error, got {:?}", other),
    }
    assert!(matches!(
        GenerationOutcome::from(result),
        GenerationOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn test_file_replaced_after_selection_is_not_uploaded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-flashcards"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"flashcards":[]}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_pdf(&dir, "swapped.pdf");
    std::fs::write(&file.path, b"\x89PNG\r\n\x1a\n").unwrap();

    let generator = HttpGenerator::new(mock_server.uri());
    let result = generator.generate(GenerationInput::Pdf(file)).await;

    assert!(
        matches!(result, Err(GeneratorError::Io(_))),
        "Expected Io error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    // Bind and drop a server so the port is closed
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let generator = HttpGenerator::new(uri);
    let result = generator.generate(text("hi")).await;

    assert!(
        matches!(result, Err(GeneratorError::Network(_))),
        "Expected Network error, got {:?}",
        result
    );
}
