/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public bitbank client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    AuthMethod,
    BitbankError,
    Clock,
    ClientConfig,
    Credentials,
    ExchangeError,
    PrivateClient,
    PublicClient,
    QueryParams,
    Result,
    SignedHeaders,
    SigningConfig,
    SystemClock,
};

// Re-export all types
pub use types::*;
