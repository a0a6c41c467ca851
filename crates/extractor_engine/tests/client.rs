use std::time::Duration;

use extractor_engine::{
    ClientSettings, ExtractClient, ExtractedContent, FailureKind, ReqwestExtractClient,
    GENERIC_API_ERROR, NETWORK_ERROR_MESSAGE,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn extract_returns_summary_and_key_points() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .and(body_json(json!({ "url": "https://example.com/article" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "x",
            "keyPoints": ["y"],
        })))
        .mount(&server)
        .await;

    let client = ReqwestExtractClient::new(server.uri(), ClientSettings::default());
    let content = client
        .extract("https://example.com/article")
        .await
        .expect("extraction ok");

    assert_eq!(
        content,
        ExtractedContent {
            summary: "x".to_string(),
            key_points: vec!["y".to_string()],
        }
    );
}

#[tokio::test]
async fn api_failure_uses_error_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "No extractable content found on the page.",
        })))
        .mount(&server)
        .await;

    let client = ReqwestExtractClient::new(server.uri(), ClientSettings::default());
    let err = client
        .extract("https://example.com/article")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Api { status: 400 });
    assert_eq!(err.message, "No extractable content found on the page.");
}

#[tokio::test]
async fn api_failure_without_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = ReqwestExtractClient::new(server.uri(), ClientSettings::default());
    let err = client
        .extract("https://example.com/article")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Api { status: 502 });
    assert_eq!(err.message, GENERIC_API_ERROR);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ReqwestExtractClient::new(server.uri(), ClientSettings::default());
    let err = client
        .extract("https://example.com/article")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
    // Port 9 (discard) is not listening; the connection is refused outright.
    let client = ReqwestExtractClient::new("http://127.0.0.1:9", ClientSettings::default());
    let err = client
        .extract("https://example.com/article")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "summary": "late", "keyPoints": [] })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = ReqwestExtractClient::new(server.uri(), settings);
    let err = client
        .extract("https://example.com/article")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn rejects_invalid_url_without_a_request() {
    let client = ReqwestExtractClient::new("http://127.0.0.1:9", ClientSettings::default());
    let err = client.extract("not a url").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
