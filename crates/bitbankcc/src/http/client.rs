/*
[INPUT]:  HTTP configuration (timeouts) and request builders
[OUTPUT]: Configured reqwest client, normalized response payloads
[POS]:    HTTP layer - shared transport for public and private clients
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{BitbankError, Result};
use super::params::QueryParams;
use super::response;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub(crate) fn build_http_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()?)
    }
}

/// Strip trailing slashes so `endpoint + path` never doubles them
pub(crate) fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim_end_matches('/');
    Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}

/// `endpoint + path + query`, the URL actually requested
pub(crate) fn request_url(endpoint: &str, path: &str, params: &QueryParams) -> Result<Url> {
    Ok(Url::parse(&format!(
        "{endpoint}{path}{}",
        params.to_query_string()
    ))?)
}

/// Send a request and normalize the response body.
///
/// Non-success HTTP statuses fail before the body is read.
pub(crate) async fn send_raw(builder: RequestBuilder) -> Result<Value> {
    let response = builder.send().await?.error_for_status()?;
    let body = response.text().await.map_err(BitbankError::Transport)?;
    response::normalize(&body)
}

/// Send a request and decode the normalized payload into `T`
pub(crate) async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let data = send_raw(builder).await?;
    serde_json::from_value(data).map_err(BitbankError::Decode)
}
