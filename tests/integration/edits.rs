//! Edits endpoint: request encoding, success, service errors, malformed bodies
#![allow(deprecated)]

use crate::integration::mock_server::MockServerFixture;
use openai_rest::edits::EditRequest;
use openai_rest::models::presets;
use openai_rest::{ApiErrorKind, Error};

const EDIT_RESPONSE: &str = r#"{
    "object": "edit",
    "created": 1589478378,
    "choices": [{"text": "What day of the week is it?\n", "index": 0}],
    "usage": {"prompt_tokens": 25, "completion_tokens": 32, "total_tokens": 57}
}"#;

#[tokio::test]
async fn test_create_edit_text_fixes_spelling() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_body(
            "POST",
            "/edits",
            serde_json::json!({
                "input": "What day of the wek is it?",
                "instruction": "Fix the spelling mistakes"
            }),
            200,
            EDIT_RESPONSE,
        )
        .await;

    let client = fixture.client();
    let text = client
        .edits()
        .create_edit_text(
            "What day of the wek is it?",
            "Fix the spelling mistakes",
            None,
            None,
            None,
            None,
        )
        .await
        .expect("edit succeeds");

    assert!(text.contains("What day of the week is it?"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_edit_sends_every_set_parameter() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_body(
            "POST",
            "/edits",
            serde_json::json!({
                "input": "teh",
                "instruction": "fix",
                "n": 2,
                "temperature": 0.5,
                "model": "text-davinci-edit-001"
            }),
            200,
            EDIT_RESPONSE,
        )
        .await;

    let request = EditRequest::new("teh", "fix")
        .with_edit_count(2)
        .with_temperature(0.5)
        .with_model(presets::get(presets::DAVINCI_EDIT).unwrap());
    let response = fixture
        .client()
        .edits()
        .create_edit(&request)
        .await
        .expect("edit succeeds");

    assert_eq!(response.choices.len(), 1);
    assert_eq!(response.usage.unwrap().total_tokens, 57);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_a_remote_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            "/edits",
            401,
            r#"{"error":{"message":"Incorrect API key provided: sk-test.","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#,
        )
        .await;

    let request = EditRequest::new("What day of the wek is it?", "Fix the spelling mistakes");
    let err = fixture
        .client()
        .edits()
        .create_edit(&request)
        .await
        .unwrap_err();

    match err {
        Error::Remote {
            status,
            kind,
            message,
            code,
            request_id,
            ..
        } => {
            assert_eq!(status, 401);
            assert_eq!(kind, ApiErrorKind::Authentication);
            assert_eq!(message, "Incorrect API key provided: sk-test.");
            assert_eq!(code.as_deref(), Some("invalid_api_key"));
            assert_eq!(request_id.as_deref(), Some("req_mock"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_on_success_status() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            "/edits",
            200,
            r#"{"error":{"message":"The model `text-davinci-edit-001` has been deprecated","type":"invalid_request_error","code":"model_not_found"}}"#,
        )
        .await;

    let err = fixture
        .client()
        .edits()
        .create_edit(&EditRequest::new("a", "b"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Remote { status: 200, kind: ApiErrorKind::NotFound, .. }
    ));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("POST", "/edits", 200, r#"{"object":"edit","choices":"nope"}"#)
        .await;

    let err = fixture
        .client()
        .edits()
        .create_edit(&EditRequest::new("a", "b"))
        .await
        .unwrap_err();

    match err {
        Error::MalformedResponse { body, .. } => {
            assert_eq!(body, r#"{"object":"edit","choices":"nope"}"#)
        }
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_json_keeps_raw_body() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("POST", "/edits", 503, "upstream unavailable")
        .await;

    let err = fixture
        .client()
        .edits()
        .create_edit(&EditRequest::new("a", "b"))
        .await
        .unwrap_err();

    match err {
        Error::Remote {
            status,
            kind,
            message,
            ..
        } => {
            assert_eq!(status, 503);
            assert_eq!(kind, ApiErrorKind::Overloaded);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}
