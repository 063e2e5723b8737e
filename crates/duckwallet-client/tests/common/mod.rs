/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for duckwallet-client tests

#![allow(dead_code)]

use duckwallet_client::{ClientConfig, DuckWalletClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with the test API key
pub fn test_client(server: &MockServer) -> DuckWalletClient {
    test_client_with(server, ClientConfig::new(TEST_API_KEY))
}

pub fn test_client_with(server: &MockServer, config: ClientConfig) -> DuckWalletClient {
    DuckWalletClient::new(config.with_base_url(server.uri())).expect("client init")
}

pub fn invoice_with_code_json() -> Value {
    json!({
        "id": "test-invoice-id",
        "status": "pending",
        "expiresAt": "2024-01-01T01:00:00Z",
        "code": "invoice-code-123"
    })
}

pub fn payment_transaction_json() -> Value {
    json!({
        "id": "test-transaction-id",
        "type": "payment",
        "status": "completed",
        "amount": "100.00",
        "fee": "1.50",
        "currency": {
            "id": "usd-id",
            "name": "USD",
            "contractAddress": "0x123...",
            "onchain": false,
            "icon": "https://example.com/usd-icon.png",
            "priceUsd": "1.00"
        },
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

pub fn currencies_json() -> Value {
    json!({
        "total": 2,
        "data": [
            {
                "id": "usd-id",
                "name": "USD",
                "contractAddress": "0x123...",
                "onchain": false,
                "icon": "https://example.com/usd-icon.png",
                "priceUsd": "1.00",
                "priceUsdYesterday": "1.00",
                "priceUsdHistorical": [
                    { "date": "2024-01-01", "priceUsd": "1.00" }
                ],
                "decimals": 6
            },
            {
                "id": "btc-id",
                "name": "Bitcoin",
                "contractAddress": "",
                "onchain": true,
                "icon": "https://example.com/btc-icon.png",
                "priceUsd": "50000.00",
                "priceUsdYesterday": "49500.00",
                "priceUsdHistorical": [
                    { "date": "2024-01-01", "priceUsd": "50000.00" }
                ],
                "decimals": 8
            }
        ]
    })
}
