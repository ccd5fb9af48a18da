/*
[INPUT]:  Raw response bodies from public and private endpoints
[OUTPUT]: Envelope `data` payload or typed error (malformed / exchange)
[POS]:    HTTP layer - shared response normalization
[UPDATE]: When the response envelope format changes
*/

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::{BitbankError, ExchangeError, Result};

/// Turn a response body into the envelope's `data` payload.
///
/// `{"success":1,"data":...}` yields `data`; any other `success` value
/// raises an [`ExchangeError`] built from `data.code`. Bodies that are not
/// JSON, or not an envelope, raise [`BitbankError::MalformedResponse`].
pub fn normalize(body: &str) -> Result<Value> {
    let envelope: Value = serde_json::from_str(body).map_err(|err| {
        debug!(error = %err, body = %body, "invalid JSON returned by server");
        malformed(body)
    })?;

    let Some(success) = envelope.get("success") else {
        debug!(body = %body, "response is missing the success flag");
        return Err(malformed(body));
    };

    if is_success(success) {
        return Ok(envelope.get("data").cloned().unwrap_or(Value::Null));
    }

    let code = envelope
        .get("data")
        .and_then(|data| data.get("code"))
        .and_then(code_string)
        .ok_or_else(|| {
            debug!(body = %body, "failure response is missing data.code");
            malformed(body)
        })?;

    let err = ExchangeError::from_code(code);
    warn!(code = %err.code, message = %err.message, "exchange returned an error");
    Err(BitbankError::Exchange(err))
}

/// Normalize and deserialize `data` into an endpoint model
pub fn normalize_into<T: DeserializeOwned>(body: &str) -> Result<T> {
    let data = normalize(body)?;
    serde_json::from_value(data).map_err(BitbankError::Decode)
}

fn is_success(flag: &Value) -> bool {
    match flag {
        Value::Number(n) => n.as_i64() == Some(1),
        Value::Bool(b) => *b,
        _ => false,
    }
}

fn code_string(code: &Value) -> Option<String> {
    match code {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn malformed(body: &str) -> BitbankError {
    BitbankError::MalformedResponse {
        body: body.to_string(),
    }
}
