/*
[INPUT]:  YAML configuration file, BITBANK_API_KEY / BITBANK_API_SECRET
[OUTPUT]: Credentials and client settings for the CLI
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use anyhow::{Context, bail};
use bitbankcc::http::public::DEFAULT_PUBLIC_ENDPOINT;
use bitbankcc::http::signature::{DEFAULT_PRIVATE_ENDPOINT, DEFAULT_TIME_WINDOW_MS};
use bitbankcc::{AuthMethod, ClientConfig, Credentials, PrivateClient, PublicClient, SigningConfig};
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "BITBANK_API_KEY";
pub const API_SECRET_ENV: &str = "BITBANK_API_SECRET";

/// Settings read from `--config`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key; required for private commands only
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Private API base endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Public API base endpoint
    #[serde(default = "default_public_endpoint")]
    pub public_endpoint: String,
    /// `nonce` or `request_time`
    #[serde(default)]
    pub auth_method: AuthMethod,
    #[serde(default = "default_time_window_ms")]
    pub time_window_ms: u64,
    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            endpoint: default_endpoint(),
            public_endpoint: default_public_endpoint(),
            auth_method: AuthMethod::default(),
            time_window_ms: default_time_window_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_PRIVATE_ENDPOINT.to_string()
}

fn default_public_endpoint() -> String {
    DEFAULT_PUBLIC_ENDPOINT.to_string()
}

fn default_time_window_ms() -> u64 {
    DEFAULT_TIME_WINDOW_MS
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("read config file {path}"))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        Ok(config)
    }

    /// Override credentials from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Override credentials from `lookup`; empty values are ignored
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(secret) = lookup(API_SECRET_ENV).filter(|v| !v.is_empty()) {
            self.api_secret = Some(secret);
        }
        self
    }

    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) => Ok(Credentials::new(key, secret)),
            _ => bail!(
                "api_key and api_secret are required (config file or {API_KEY_ENV}/{API_SECRET_ENV})"
            ),
        }
    }

    pub fn signing_config(&self) -> SigningConfig {
        SigningConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_auth_method(self.auth_method)
            .with_time_window(self.time_window_ms)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn public_client(&self) -> anyhow::Result<PublicClient> {
        PublicClient::with_config_and_endpoint(self.client_config(), &self.public_endpoint)
            .context("create public client")
    }

    pub fn private_client(&self) -> anyhow::Result<PrivateClient> {
        PrivateClient::with_config(self.credentials()?, self.signing_config(), self.client_config())
            .context("create private client")
    }
}
