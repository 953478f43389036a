//! Cancellation: a fired token wins over a pending response
#![allow(deprecated)]

use crate::integration::mock_server::{client_for, silent_server};
use openai_rest::edits::EditRequest;
use openai_rest::Error;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_cancel_while_waiting_for_response() {
    let (base_url, server) = silent_server().await;
    let client = client_for(&base_url);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let request = EditRequest::new("What day of the wek is it?", "Fix the spelling mistakes");
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client.edits().create_edit_with_cancel(&request, &cancel),
    )
    .await
    .expect("cancellation should end the call well before the client timeout");

    let err = result.unwrap_err();
    assert!(err.is_cancelled(), "got {err:?}");
    assert!(!matches!(err, Error::Transport(_) | Error::Remote { .. }));
    server.abort();
}

#[tokio::test]
async fn test_already_cancelled_token() {
    let (base_url, server) = silent_server().await;
    let client = client_for(&base_url);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client
        .models()
        .list_models_with_cancel(&cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));

    let err = client
        .edits()
        .create_edit_text_with_cancel("a", "b", None, None, None, None, &cancel)
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
    server.abort();
}

#[tokio::test]
async fn test_child_token_cancelled_by_parent() {
    let (base_url, server) = silent_server().await;
    let client = client_for(&base_url);
    let parent = CancellationToken::new();
    let child = parent.child_token();

    let call = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .threads()
                .list_messages_with_cancel("thread_1", &child)
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    parent.cancel();

    let err = call.await.expect("join").unwrap_err();
    assert!(err.is_cancelled());
    server.abort();
}
