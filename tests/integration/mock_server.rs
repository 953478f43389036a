//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use openai_rest::{Authentication, OpenAiClient};
use std::time::Duration;

pub const API_KEY: &str = "sk-test";
pub const ORGANIZATION: &str = "org-test";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Create a client pointed at the mock server
    pub fn client(&self) -> OpenAiClient {
        client_for(&self.base_url)
    }

    /// Mock a JSON response; asserts the auth and organization headers were sent
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .match_header("openai-organization", ORGANIZATION)
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_header("x-request-id", "req_mock")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a JSON response that only matches an exact JSON request body
    pub async fn mock_json_with_body(
        &mut self,
        method: &str,
        path: &str,
        expected_body: serde_json::Value,
        status: usize,
        body: &str,
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", API_KEY).as_str())
            .match_body(Matcher::Json(expected_body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn client_for(base_url: &str) -> OpenAiClient {
    let auth = Authentication::new(API_KEY)
        .and_then(|a| a.with_organization(ORGANIZATION))
        .expect("valid test credentials");
    OpenAiClient::builder()
        .authentication(auth)
        .base_url(base_url)
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build client")
}

/// A server that accepts connections but never answers.
pub async fn silent_server() -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    (format!("http://{}", addr), handle)
}
