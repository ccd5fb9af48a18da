/*
[INPUT]:  Pair identifiers, candle types and dates
[OUTPUT]: Market data (ticker, depth, transactions, candlesticks)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::client::{self, ClientConfig};
use super::{QueryParams, Result};
use crate::types::{CandleType, Candlestick, Depth, Ticker, Transactions};

/// Base endpoint for public market data
pub const DEFAULT_PUBLIC_ENDPOINT: &str = "https://public.bitbank.cc";

/// Client for unauthenticated market data
#[derive(Debug, Clone)]
pub struct PublicClient {
    http_client: Client,
    base_endpoint: String,
}

impl PublicClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_endpoint(config, DEFAULT_PUBLIC_ENDPOINT)
    }

    /// Create a new client against a non-default endpoint
    pub fn with_config_and_endpoint(config: ClientConfig, endpoint: &str) -> Result<Self> {
        Ok(Self {
            http_client: config.build_http_client()?,
            base_endpoint: client::normalize_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// GET an arbitrary public path and decode the envelope's `data`.
    ///
    /// Use `T = serde_json::Value` to skip schema expectations.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = client::request_url(&self.base_endpoint, path, &QueryParams::new())?;
        debug!(method = "GET", %path, "public request");
        client::send_json(self.http_client.get(url)).await
    }

    /// GET /{pair}/ticker
    pub async fn get_ticker(&self, pair: &str) -> Result<Ticker> {
        self.get(&format!("/{pair}/ticker")).await
    }

    /// GET /tickers
    pub async fn get_tickers(&self) -> Result<Vec<Ticker>> {
        self.get("/tickers").await
    }

    /// GET /{pair}/depth
    pub async fn get_depth(&self, pair: &str) -> Result<Depth> {
        self.get(&format!("/{pair}/depth")).await
    }

    /// GET /{pair}/transactions[/{yyyymmdd}]
    ///
    /// Without a date the most recent transactions are returned.
    pub async fn get_transactions(&self, pair: &str, yyyymmdd: Option<&str>) -> Result<Transactions> {
        let path = match yyyymmdd {
            Some(date) => format!("/{pair}/transactions/{date}"),
            None => format!("/{pair}/transactions"),
        };
        self.get(&path).await
    }

    /// GET /{pair}/candlestick/{type}/{date}
    ///
    /// `date` is `yyyymmdd` for intraday candles and `yyyy` for
    /// [`CandleType::is_yearly`] ones.
    pub async fn get_candlestick(
        &self,
        pair: &str,
        candle_type: CandleType,
        date: &str,
    ) -> Result<Candlestick> {
        self.get(&format!("/{pair}/candlestick/{candle_type}/{date}"))
            .await
    }
}
