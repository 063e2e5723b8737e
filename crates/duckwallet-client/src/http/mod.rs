/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod invoice;
pub mod wallet;

pub use error::{ConfigError, DEFAULT_ERROR_MESSAGE, DuckWalletError, Result};

pub use client::{
    API_KEY_ENV, API_KEY_HEADER, ApiRequest, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL,
    DuckWalletClient, LEGACY_BASE_URL,
};
