//! HTTP behavior of ReqwestTransport against a local mock server.

use serde_json::{Value, json};
use viralcopy_core::GenerationRequest;
use viralcopy_error::GeminiErrorKind;
use viralcopy_models::{
    CopyGenerationClient, GeminiConfig, GeminiTransport, GenerateContentRequest, ReqwestTransport,
    to_generate_request,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn config_for(server_uri: &str) -> GeminiConfig {
    GeminiConfig::builder()
        .api_key(Some("test-api-key".to_string()))
        .base_url(format!("{}/v1beta", server_uri))
        .build()
        .expect("valid config")
}

fn transport_for(server_uri: &str) -> ReqwestTransport {
    ReqwestTransport::new(&config_for(server_uri)).expect("client builds")
}

fn sample_request() -> GenerateContentRequest {
    to_generate_request(&GenerationRequest::new("morning market", None, Vec::new()))
}

fn success_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "totalTokenCount": 480 }
    })
}

#[tokio::test]
async fn test_posts_to_model_endpoint_with_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("{\"tags\":[]}")))
        .expect(1)
        .mount(&server)
        .await;

    let response = transport_for(&server.uri())
        .generate_content(MODEL, "test-api-key", &sample_request())
        .await
        .expect("call succeeds");

    assert_eq!(response.text().as_deref(), Some("{\"tags\":[]}"));
}

#[tokio::test]
async fn test_request_body_carries_generation_config() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("{}")))
        .mount(&server)
        .await;

    transport_for(&server.uri())
        .generate_content(MODEL, "test-api-key", &sample_request())
        .await
        .expect("call succeeds");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let body: Value = serde_json::from_slice(&received[0].body).expect("body is json");
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["generationConfig"]["temperature"], 0.7);
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert!(body["systemInstruction"]["parts"][0]["text"].is_string());
}

#[tokio::test]
async fn test_rate_limit_status_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;

    let err = transport_for(&server.uri())
        .generate_content(MODEL, "test-api-key", &sample_request())
        .await
        .expect_err("429 is an error");

    match err.kind() {
        GeminiErrorKind::HttpError {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 429);
            assert!(message.contains("RESOURCE_EXHAUSTED"));
        }
        other => panic!("expected HttpError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_response_parsing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = transport_for(&server.uri())
        .generate_content(MODEL, "test-api-key", &sample_request())
        .await
        .expect_err("body does not decode");

    assert!(matches!(err.kind(), GeminiErrorKind::ResponseParsing(_)));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_api_request() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let err = transport_for(&uri)
        .generate_content(MODEL, "test-api-key", &sample_request())
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err.kind(), GeminiErrorKind::ApiRequest(_)));
}

#[tokio::test]
async fn test_client_returns_text_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("{\"tags\":[\"a\"]}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = CopyGenerationClient::new(config_for(&server.uri())).expect("client builds");
    let text = client
        .generate("morning market", None, &[])
        .await
        .expect("call succeeds");

    assert_eq!(text, "{\"tags\":[\"a\"]}");
}
