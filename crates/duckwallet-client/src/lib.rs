/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Duck Wallet client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Async client for the Duck Wallet custodial wallet API.
//!
//! Every call sends one JSON request with the `x-api-key` header and returns
//! either the decoded body or a [`DuckWalletError`].

pub mod api;
pub mod http;
pub mod types;

pub use api::CustodialWalletApi;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    ClientConfig,
    ConfigError,
    DEFAULT_BASE_URL,
    DEFAULT_ERROR_MESSAGE,
    DuckWalletClient,
    DuckWalletError,
    LEGACY_BASE_URL,
    Result,
};

// Re-export all types
pub use types::*;
