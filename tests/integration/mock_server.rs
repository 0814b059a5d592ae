//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Mock a JSON POST reply expected `hits` times; `query` pairs must all
    /// be present.
    pub async fn mock_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        status: u16,
        body: &str,
        hits: usize,
    ) -> Mock {
        let mut server = self.server.lock().await;
        let matcher = if query.is_empty() {
            Matcher::Any
        } else {
            Matcher::AllOf(
                query
                    .iter()
                    .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
                    .collect(),
            )
        };
        server
            .mock("POST", path)
            .match_query(matcher)
            .expect(hits)
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a JSON POST reply that requires a header value and a URL with
    /// no query string.
    pub async fn mock_json_with_header(
        &self,
        path: &str,
        header: (&str, &str),
        status: u16,
        body: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", path)
            .match_header(header.0, header.1)
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// A Gemini `generateContent` success body carrying `text`.
pub fn gemini_reply(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
