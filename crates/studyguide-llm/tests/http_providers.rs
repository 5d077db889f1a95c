//! HTTP-level tests for the Gemini and Ollama providers against a mock server
//!
//! The providers use reqwest's blocking client, so each call runs on a
//! blocking thread while the mock server lives on the async runtime.

use serde_json::json;
use studyguide_domain::traits::LlmProvider;
use studyguide_llm::{GeminiConfig, GeminiProvider, LlmError, OllamaConfig, OllamaProvider};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gemini_call(endpoint: String, prompt: &'static str) -> Result<String, LlmError> {
    tokio::task::spawn_blocking(move || {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-test")
            .with_endpoint(endpoint)
            .with_timeout_secs(5);
        GeminiProvider::new(config)?.generate(prompt)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gemini_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Explain entropy" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Entropy measures disorder." }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = gemini_call(server.uri(), "Explain entropy").await.unwrap();
    assert_eq!(text, "Entropy measures disorder.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gemini_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = gemini_call(server.uri(), "anything").await.unwrap_err();
    assert!(matches!(err, LlmError::RateLimitExceeded));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gemini_unknown_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gemini_call(server.uri(), "anything").await.unwrap_err();
    assert!(matches!(err, LlmError::ModelNotAvailable(ref m) if m == "gemini-test"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gemini_server_error_keeps_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let err = gemini_call(server.uri(), "anything").await.unwrap_err();
    match err {
        LlmError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal failure");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gemini_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = gemini_call(server.uri(), "anything").await.unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ollama_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({ "model": "llama3", "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama3",
            "response": "Term: Gene\nDefinition: Unit of heredity",
            "done": true
        })))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let text = tokio::task::spawn_blocking(move || {
        let config = OllamaConfig::new("llama3").with_endpoint(endpoint);
        OllamaProvider::new(config)?.generate("Make flashcards")
    })
    .await
    .expect("blocking task panicked")
    .unwrap();

    assert_eq!(text, "Term: Gene\nDefinition: Unit of heredity");
}
