use prompt_lab::{
    Error, GenerationParams, InferenceClient, InferenceConfig, TextGenerator,
    NO_RESPONSE_PLACEHOLDER,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> InferenceClient {
    let config = InferenceConfig::new("test-api-key", "org/test-model");
    InferenceClient::with_base_url(config, base_url.to_string())
        .expect("Failed to create inference client")
}

#[tokio::test]
async fn returns_generated_text_from_first_element() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/org/test-model"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_json(json!({
            "inputs": "2+2=?",
            "parameters": {"max_new_tokens": 50, "temperature": 0.0}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "2+2=4"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let params = GenerationParams::default().max_new_tokens(50).temperature(0.0);
    let result = client.generate("2+2=?", params).await.unwrap();

    assert_eq!(result, "2+2=4");
}

#[tokio::test]
async fn default_params_are_sent_when_unspecified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/org/test-model"))
        .and(body_json(json!({
            "inputs": "hello",
            "parameters": {"max_new_tokens": 200, "temperature": 0.7}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "hi"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.generate_text("hello").await;

    assert_eq!(result, "hi");
}

#[tokio::test]
async fn missing_generated_text_yields_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"score": 0.5}])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .generate("hello", GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(result, NO_RESPONSE_PLACEHOLDER);
}

#[tokio::test]
async fn empty_result_array_yields_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .generate("hello", GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(result, NO_RESPONSE_PLACEHOLDER);
}

#[tokio::test]
async fn slow_response_becomes_timeout_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"generated_text": "too late"}]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = InferenceConfig::new("test-api-key", "org/test-model")
        .with_timeout(Duration::from_millis(100));
    let client = InferenceClient::with_base_url(config, mock_server.uri()).unwrap();

    let err = client
        .generate("hello", GenerationParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(
        err.to_string(),
        "The server took too long to respond. Try again later."
    );

    // The print-friendly surface renders the same sentence.
    let text = client.generate_text("hello").await;
    assert_eq!(
        text,
        "Error: The server took too long to respond. Try again later."
    );
}

#[tokio::test]
async fn unreachable_host_becomes_connection_error() {
    // Port 1 is never bound; the connect attempt is refused immediately.
    let client = test_client("http://127.0.0.1:1");

    let err = client
        .generate("hello", GenerationParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Connection));
    assert_eq!(
        err.to_string(),
        "Could not connect to the inference service. Check your network."
    );
}

#[tokio::test]
async fn error_status_carries_code_and_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .generate("hello", GenerationParams::default())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, detail } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(detail, "Model is loading");
        }
        other => panic!("Expected status error, got: {other}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .generate("hello", GenerationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn config_from_env_reads_and_reports_missing_variables() {
    std::env::remove_var("API_KEY");
    std::env::remove_var("MODEL_NAME");

    let err = InferenceConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("API_KEY"));

    std::env::set_var("API_KEY", "env-key");
    let err = InferenceConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("MODEL_NAME"));

    std::env::set_var("MODEL_NAME", "org/env-model");
    let config = InferenceConfig::from_env().unwrap();
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.model, "org/env-model");

    std::env::remove_var("API_KEY");
    std::env::remove_var("MODEL_NAME");
}
