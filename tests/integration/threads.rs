//! Thread messages endpoint

use crate::integration::mock_server::{client_for, MockServerFixture, API_KEY};
use mockito::Matcher;
use openai_rest::threads::Role;
use openai_rest::{Error, Message};

const MESSAGE: &str = r#"{
    "id": "msg_abc123",
    "object": "thread.message",
    "created_at": 1699017614,
    "thread_id": "thread_abc123",
    "role": "user",
    "content": [{"type": "text", "text": {"value": "How does AI work? Explain it in simple terms.", "annotations": []}}],
    "file_ids": ["file-1"],
    "assistant_id": null,
    "run_id": null,
    "metadata": {"scene": "tavern"}
}"#;

#[tokio::test]
async fn test_create_message_sends_beta_header_and_wire_shape() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/threads/thread_abc123/messages")
        .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
        .match_header("openai-beta", "assistants=v1")
        .match_body(Matcher::Json(serde_json::json!({
            "role": "user",
            "content": "How does AI work? Explain it in simple terms.",
            "file_ids": ["file-1"],
            "metadata": {"scene": "tavern"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MESSAGE)
        .create_async()
        .await;

    let message = Message::new("How does AI work? Explain it in simple terms.")
        .with_file_ids(["file-1"])
        .with_metadata([("scene", "tavern")]);
    let created = fixture
        .client()
        .threads()
        .create_message("thread_abc123", &message)
        .await
        .expect("create");

    assert_eq!(created.id, "msg_abc123");
    assert_eq!(created.role, Role::User);
    assert_eq!(created.text(), "How does AI work? Explain it in simple terms.");
    assert_eq!(created.file_ids, vec!["file-1".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_content_only_message_omits_optional_keys() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_body(
            "POST",
            "/threads/thread_abc123/messages",
            serde_json::json!({"role": "user", "content": "hello"}),
            200,
            MESSAGE,
        )
        .await;

    fixture
        .client()
        .threads()
        .create_message("thread_abc123", &"hello".into())
        .await
        .expect("create");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_retrieve_and_list_messages() {
    let mut fixture = MockServerFixture::new().await;
    let retrieve = fixture
        .mock_json("GET", "/threads/thread_abc123/messages/msg_abc123", 200, MESSAGE)
        .await;
    let list_body = format!(
        r#"{{"object":"list","data":[{}],"first_id":"msg_abc123","last_id":"msg_abc123","has_more":false}}"#,
        MESSAGE
    );
    let list = fixture
        .mock_json("GET", "/threads/thread_abc123/messages", 200, &list_body)
        .await;

    let client = fixture.client();
    let threads = client.threads();
    let message = threads
        .retrieve_message("thread_abc123", "msg_abc123")
        .await
        .expect("retrieve");
    assert_eq!(
        message.metadata.as_ref().and_then(|m| m.get("scene")).map(String::as_str),
        Some("tavern")
    );

    let page = threads.list_messages("thread_abc123").await.expect("list");
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.first_id.as_deref(), Some("msg_abc123"));
    assert!(!page.has_more);

    retrieve.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_blank_thread_id_is_rejected_locally() {
    let client = client_for("http://127.0.0.1:9");
    let err = client
        .threads()
        .create_message(" ", &Message::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    let err = client
        .threads()
        .retrieve_message("thread_1", "")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}
