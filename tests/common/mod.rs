//! Shared helpers for integration tests against a mock TextMagic server.

use std::time::Duration;

use textmagic::TextmagicClient;
use wiremock::MockServer;

pub const USERNAME: &str = "jdoe";
pub const TOKEN: &str = "test-key";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with throttling disabled.
pub fn client_for(server: &MockServer) -> TextmagicClient {
    client_with_interval(server, Duration::ZERO)
}

pub fn client_with_interval(server: &MockServer, interval: Duration) -> TextmagicClient {
    TextmagicClient::builder(USERNAME, TOKEN)
        .base_url(format!("{}/api/v2", server.uri()))
        .min_request_interval(interval)
        .build()
        .expect("client should build")
}
