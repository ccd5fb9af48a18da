/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Normalized API results or typed errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod error_codes;
pub mod params;
pub mod private;
pub mod public;
pub mod response;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{BitbankError, ExchangeError, Result};
pub use params::QueryParams;
pub use signature::{AuthMethod, Clock, Credentials, SignedHeaders, SigningConfig, SystemClock};

pub use client::ClientConfig;
pub use private::PrivateClient;
pub use public::PublicClient;
