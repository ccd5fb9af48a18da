/*
[INPUT]:  Credentials, signing configuration, request path + params/body
[OUTPUT]: Signed GET/POST requests and normalized payloads
[POS]:    HTTP layer - authenticated request core shared by trade/user endpoints
[UPDATE]: When changing how private requests are signed or dispatched
*/

use std::sync::Arc;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::client::{self, ClientConfig};
use super::signature::{self, Clock, Credentials, SignedHeaders, SigningConfig, SystemClock};
use super::{QueryParams, Result};

/// Client for authenticated trading and account endpoints
#[derive(Debug, Clone)]
pub struct PrivateClient {
    http_client: Client,
    credentials: Credentials,
    signing: SigningConfig,
    path_prefix: String,
    clock: Arc<dyn Clock>,
}

impl PrivateClient {
    /// Create a client against the default endpoint and signing scheme
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_signing_config(credentials, SigningConfig::default())
    }

    /// Create a client with a custom endpoint, scheme or time window
    pub fn with_signing_config(credentials: Credentials, signing: SigningConfig) -> Result<Self> {
        Self::with_config(credentials, signing, ClientConfig::default())
    }

    /// Create a client with custom signing and transport configuration
    pub fn with_config(
        credentials: Credentials,
        signing: SigningConfig,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_endpoint = client::normalize_endpoint(&signing.base_endpoint)?;
        let path_prefix = signature::path_prefix(&base_endpoint)?;
        Ok(Self {
            http_client: config.build_http_client()?,
            credentials,
            signing: SigningConfig {
                base_endpoint,
                ..signing
            },
            path_prefix,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source used for nonces and request times
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn signing_config(&self) -> &SigningConfig {
        &self.signing
    }

    /// Path component of the base endpoint prepended to GET signing payloads
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    fn sign(&self, payload: &str) -> SignedHeaders {
        self.signing.auth_method.sign(
            &self.credentials,
            self.clock.now_millis(),
            self.signing.time_window_ms,
            payload,
        )
    }

    /// Headers for a GET request, stamped with the current time
    pub fn sign_get(&self, path: &str, params: &QueryParams) -> SignedHeaders {
        self.sign(&signature::get_payload(&self.path_prefix, path, params))
    }

    /// Headers for a POST request whose body is exactly `body`
    pub fn sign_post(&self, body: &str) -> SignedHeaders {
        self.sign(body)
    }

    /// Signed GET; `params` are encoded identically for the signature and the URL
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> Result<T> {
        let url = client::request_url(&self.signing.base_endpoint, path, params)?;
        let headers = self.sign_get(path, params).to_header_map()?;
        debug!(method = "GET", %path, query = %params.to_query_string(), "private request");
        client::send_json(self.http_client.get(url).headers(headers)).await
    }

    /// Signed POST; the body is serialized once and the same bytes are signed and sent
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        let url = client::request_url(&self.signing.base_endpoint, path, &QueryParams::new())?;
        let headers = self.sign_post(&body).to_header_map()?;
        debug!(method = "POST", %path, %body, "private request");
        client::send_json(self.http_client.post(url).headers(headers).body(body)).await
    }
}
