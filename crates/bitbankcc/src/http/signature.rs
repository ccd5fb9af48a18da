/*
[INPUT]:  API credentials, signing scheme, request payload and current time
[OUTPUT]: Signed request headers (ACCESS-KEY / ACCESS-SIGNATURE + scheme headers)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use url::Url;

use super::error::{BitbankError, Result};
use super::params::QueryParams;

type HmacSha256 = Hmac<Sha256>;

/// Default base endpoint for private endpoints
pub const DEFAULT_PRIVATE_ENDPOINT: &str = "https://api.bitbank.cc/v1";

/// Default tolerance for the request-time scheme
pub const DEFAULT_TIME_WINDOW_MS: u64 = 5_000;

pub const ACCESS_KEY: &str = "ACCESS-KEY";
pub const ACCESS_NONCE: &str = "ACCESS-NONCE";
pub const ACCESS_REQUEST_TIME: &str = "ACCESS-REQUEST-TIME";
pub const ACCESS_TIME_WINDOW: &str = "ACCESS-TIME-WINDOW";
pub const ACCESS_SIGNATURE: &str = "ACCESS-SIGNATURE";

pub const CONTENT_TYPE: &str = "Content-Type";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Hex-encoded HMAC-SHA256 of `message` keyed with `secret`
pub fn sign_message(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// API key and secret for private endpoints
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create new credentials from API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a message with the API secret
    pub fn sign(&self, message: &str) -> String {
        sign_message(&self.api_secret, message)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);
        f.debug_struct("Credentials")
            .field("api_key", &format!("{shown}..."))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Authentication scheme accepted by the private API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// `ACCESS-NONCE`: signs `nonce + payload`
    Nonce,
    /// `ACCESS-REQUEST-TIME` + `ACCESS-TIME-WINDOW`: signs `time + window + payload`
    #[default]
    RequestTime,
}

impl AuthMethod {
    /// Build the header set for one request.
    ///
    /// `timestamp_ms` is used as the nonce or the request time depending on
    /// the scheme; `time_window_ms` is ignored by the nonce scheme.
    pub fn sign(
        self,
        credentials: &Credentials,
        timestamp_ms: u64,
        time_window_ms: u64,
        payload: &str,
    ) -> SignedHeaders {
        match self {
            AuthMethod::Nonce => nonce_headers(credentials, timestamp_ms, payload),
            AuthMethod::RequestTime => {
                request_time_headers(credentials, timestamp_ms, time_window_ms, payload)
            }
        }
    }
}

/// Headers for the nonce scheme
pub fn nonce_headers(credentials: &Credentials, nonce: u64, payload: &str) -> SignedHeaders {
    let nonce = nonce.to_string();
    let signature = credentials.sign(&format!("{nonce}{payload}"));
    SignedHeaders {
        entries: vec![
            (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
            (ACCESS_KEY, credentials.api_key().to_string()),
            (ACCESS_NONCE, nonce),
            (ACCESS_SIGNATURE, signature),
        ],
    }
}

/// Headers for the request-time scheme
pub fn request_time_headers(
    credentials: &Credentials,
    request_time: u64,
    time_window: u64,
    payload: &str,
) -> SignedHeaders {
    let request_time = request_time.to_string();
    let time_window = time_window.to_string();
    let signature = credentials.sign(&format!("{request_time}{time_window}{payload}"));
    SignedHeaders {
        entries: vec![
            (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
            (ACCESS_KEY, credentials.api_key().to_string()),
            (ACCESS_REQUEST_TIME, request_time),
            (ACCESS_TIME_WINDOW, time_window),
            (ACCESS_SIGNATURE, signature),
        ],
    }
}

/// Signing payload for a GET request
pub fn get_payload(path_prefix: &str, path: &str, params: &QueryParams) -> String {
    format!("{path_prefix}{path}{}", params.to_query_string())
}

/// Path component of a base endpoint, or `""` when it has none.
///
/// `https://api.bitbank.cc/v1` yields `/v1`.
pub fn path_prefix(endpoint: &str) -> Result<String> {
    let url = Url::parse(endpoint)?;
    if url.cannot_be_a_base() {
        return Err(BitbankError::Config(format!(
            "endpoint must be an absolute http(s) URL: {endpoint}"
        )));
    }
    let path = url.path();
    Ok(if path == "/" { String::new() } else { path.to_string() })
}

/// Header set produced for a single signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    entries: Vec<(&'static str, String)>,
}

impl SignedHeaders {
    /// Look up a header value by name (ASCII case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over header name/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into a reqwest header map
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| BitbankError::Config(format!("invalid header name {name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| BitbankError::Config(format!("invalid value for {name}: {e}")))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

/// Signing settings for a private client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningConfig {
    pub base_endpoint: String,
    pub auth_method: AuthMethod,
    pub time_window_ms: u64,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            base_endpoint: DEFAULT_PRIVATE_ENDPOINT.to_string(),
            auth_method: AuthMethod::default(),
            time_window_ms: DEFAULT_TIME_WINDOW_MS,
        }
    }
}

impl SigningConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.base_endpoint = endpoint.into();
        self
    }

    pub fn with_auth_method(mut self, auth_method: AuthMethod) -> Self {
        self.auth_method = auth_method;
        self
    }

    pub fn with_time_window(mut self, time_window_ms: u64) -> Self {
        self.time_window_ms = time_window_ms;
        self
    }
}

/// Source of wall-clock milliseconds for nonces and request times
pub trait Clock: Send + Sync + fmt::Debug {
    fn now_millis(&self) -> u64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
    }
}
