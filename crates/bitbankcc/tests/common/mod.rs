/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitbankcc tests

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bitbankcc::{AuthMethod, Clock, Credentials, PrivateClient, SigningConfig};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_API_SECRET)
}

/// Clock that advances one millisecond per reading
#[derive(Debug)]
pub struct SteppingClock(AtomicU64);

impl SteppingClock {
    pub fn starting_at(millis: u64) -> Self {
        Self(AtomicU64::new(millis))
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

/// Private client pointed at `{server}/v1`
#[allow(dead_code)]
pub fn private_client(server: &MockServer, auth_method: AuthMethod, start_millis: u64) -> PrivateClient {
    PrivateClient::with_signing_config(
        test_credentials(),
        SigningConfig::default()
            .with_endpoint(format!("{}/v1", server.uri()))
            .with_auth_method(auth_method),
    )
    .expect("client init")
    .with_clock(Arc::new(SteppingClock::starting_at(start_millis)))
}

/// Success envelope around `data`
#[allow(dead_code)]
pub fn success(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": 1, "data": data })
}

/// Failure envelope with an exchange error code
#[allow(dead_code)]
pub fn failure(code: u32) -> serde_json::Value {
    serde_json::json!({ "success": 0, "data": { "code": code } })
}
