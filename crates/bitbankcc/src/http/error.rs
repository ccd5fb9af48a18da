/*
[INPUT]:  Error sources (transport, envelope parsing, exchange codes, serialization)
[OUTPUT]: Structured error types with exchange codes and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use super::error_codes;

/// Message used when the server returns a body that is not a JSON envelope
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "不正なJSONデータがサーバーから返ってきました。お問い合わせください";

/// Logical error reported by the exchange inside a `success: 0` envelope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("エラーコード: {code} 内容: {message}")]
pub struct ExchangeError {
    pub code: String,
    pub message: String,
}

impl ExchangeError {
    /// Build an error for `code`, resolving its message from the code table.
    ///
    /// Unknown codes get the generic fallback message.
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        let message = error_codes::message_for(&code)
            .unwrap_or(error_codes::UNKNOWN_ERROR_MESSAGE)
            .to_string();
        Self { code, message }
    }

    /// Whether the code has an entry in the exchange's code table
    pub fn is_known(&self) -> bool {
        error_codes::message_for(&self.code).is_some()
    }
}

/// Main error type for the bitbank client
#[derive(Error, Debug)]
pub enum BitbankError {
    /// Connection failure, timeout or non-success HTTP status
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP succeeded but the body is not a JSON envelope
    #[error("{}", MALFORMED_RESPONSE_MESSAGE)]
    MalformedResponse { body: String },

    /// The exchange answered with `success != 1`
    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    /// Envelope was fine but `data` did not match the expected shape
    #[error("Unexpected response payload: {0}")]
    Decode(serde_json::Error),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BitbankError {
    /// Exchange error code, if this is an exchange-level error
    pub fn exchange_code(&self) -> Option<&str> {
        match self {
            BitbankError::Exchange(err) => Some(err.code.as_str()),
            _ => None,
        }
    }

    /// Check if the error indicates an authentication failure (2xxxx codes)
    pub fn is_auth_error(&self) -> bool {
        self.exchange_code()
            .is_some_and(|code| code.len() == 5 && code.starts_with('2'))
    }

    /// Hint for callers deciding whether to resend.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            BitbankError::Transport(err) => err.is_timeout() || err.is_connect(),
            BitbankError::Exchange(err) => {
                matches!(err.code.as_str(), "10005" | "70011")
            }
            _ => false,
        }
    }
}

/// Result type alias for bitbank operations
pub type Result<T> = std::result::Result<T, BitbankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_error_known_code() {
        let err = ExchangeError::from_code("20003");
        assert_eq!(err.code, "20003");
        assert_eq!(err.message, "ACCESS-KEYが存在しません");
        assert!(err.is_known());
        assert_eq!(
            err.to_string(),
            "エラーコード: 20003 内容: ACCESS-KEYが存在しません"
        );
    }

    #[test]
    fn test_exchange_error_unknown_code_falls_back() {
        let err = ExchangeError::from_code("99999");
        assert_eq!(err.code, "99999");
        assert_eq!(err.message, error_codes::UNKNOWN_ERROR_MESSAGE);
        assert!(!err.is_known());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(BitbankError::from(ExchangeError::from_code("20001")).is_auth_error());
        assert!(!BitbankError::from(ExchangeError::from_code("60001")).is_auth_error());
        assert!(!BitbankError::Config("bad".to_string()).is_auth_error());
    }

    #[test]
    fn test_error_retryable() {
        assert!(BitbankError::from(ExchangeError::from_code("70011")).is_retryable());
        assert!(BitbankError::from(ExchangeError::from_code("10005")).is_retryable());
        assert!(!BitbankError::from(ExchangeError::from_code("40001")).is_retryable());
        let malformed = BitbankError::MalformedResponse {
            body: "<html>".to_string(),
        };
        assert!(!malformed.is_retryable());
    }

    #[test]
    fn test_malformed_response_message() {
        let err = BitbankError::MalformedResponse {
            body: "oops".to_string(),
        };
        assert_eq!(err.to_string(), MALFORMED_RESPONSE_MESSAGE);
        assert_eq!(err.exchange_code(), None);
    }
}
