//! HTTP contract tests for the OpenRouter adapter against a local mock server.

use std::time::Duration;

use hanming_core::{HanmingClient, error::HanmingError, provider::PromptExecutionProvider as _};
use hanming_openrouter::{OpenRouterAdapter, OpenRouterAdapterBuilder};
use hanming_types::{
    fragments::NamePrompt,
    request::{Gender, GenerationRequest, NameStyle},
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(server: &MockServer, api_key: &str) -> OpenRouterAdapter {
    OpenRouterAdapterBuilder::new()
        .with_api_key(api_key)
        .with_site("https://hanming.example", "Hanming")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5))
        .build()
        .expect("adapter should build")
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "gen-123",
        "model": "deepseek/deepseek-chat-v3.1",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 180, "completion_tokens": 240, "total_tokens": 420}
    })
}

fn name_object() -> String {
    json!({
        "characters": "雷明",
        "pinyin": "Léi Míng",
        "englishName": "Not Raymond",
        "meaning": "Thunder and brightness",
        "individualMeanings": [
            {"character": "雷", "pinyin": "Léi", "meaning": "Thunder"},
            {"character": "明", "pinyin": "Míng", "meaning": "Bright"}
        ],
        "culturalSignificance": "Strong and clear.",
        "bestUsedFor": ["Business"],
        "alternatives": []
    })
    .to_string()
}

async fn generate(
    adapter: OpenRouterAdapter,
    request: &GenerationRequest,
) -> Result<hanming_types::name::GeneratedName, HanmingError> {
    let client = HanmingClient::new(adapter);
    client.prompt_execute(NamePrompt::new(request)).await
}

#[tokio::test]
async fn sends_fixed_parameters_and_attribution_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("http-referer", "https://hanming.example"))
        .and(header("x-title", "Hanming"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(&format!("Here you go:\n{}", name_object()))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerationRequest::new("Raymond")
        .with_gender(Gender::Male)
        .with_style(NameStyle::Heroic)
        .with_preference("Brave");

    let payload = generate(adapter(&server, "test-key"), &request)
        .await
        .expect("generation should succeed");
    assert_eq!(payload.characters, "雷明");
    assert_eq!(payload.romanization, "Léi Míng");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "deepseek/deepseek-chat-v3.1");
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["max_tokens"], 1200);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    let content = messages[0]["content"].as_str().unwrap();
    assert!(content.starts_with(
        "Generate a Chinese name for: Raymond (male, heroic, with preferences for: Brave)"
    ));
}

#[tokio::test]
async fn server_error_surfaces_status_and_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": {"message": "Upstream overloaded", "code": 500}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = generate(adapter(&server, "test-key"), &GenerationRequest::new("Raymond"))
        .await
        .unwrap_err();

    match err {
        HanmingError::Transport { status, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "Upstream overloaded");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn placeholder_key_fails_without_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&name_object())))
        .expect(0)
        .mount(&server)
        .await;

    let backend = adapter(&server, "your_openrouter_api_key_here");
    assert!(!backend.is_configured());

    let err = generate(backend, &GenerationRequest::new("Raymond"))
        .await
        .unwrap_err();
    assert!(matches!(err, HanmingError::Configuration(_)), "{err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion(&name_object()))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let backend = OpenRouterAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = generate(backend, &GenerationRequest::new("Raymond"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, HanmingError::Transport { status: None, .. }),
        "{err:?}"
    );
}

#[tokio::test]
async fn completion_without_braces_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("I am sorry, I cannot help with that.")),
        )
        .mount(&server)
        .await;

    let err = generate(adapter(&server, "test-key"), &GenerationRequest::new("Raymond"))
        .await
        .unwrap_err();
    assert!(matches!(err, HanmingError::MalformedResponse(_)), "{err:?}");
}

#[tokio::test]
async fn empty_choices_are_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = generate(adapter(&server, "test-key"), &GenerationRequest::new("Raymond"))
        .await
        .unwrap_err();
    assert!(matches!(err, HanmingError::MalformedResponse(_)), "{err:?}");
}
