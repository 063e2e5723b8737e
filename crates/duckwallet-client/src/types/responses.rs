/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: Timestamps stay as sent; parsed views are accessor methods
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{Currency, TransactionCurrency, WireDecimal};

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStatus {
    pub id: String,
    pub status: String,
    pub expires_at: String,
}

impl InvoiceStatus {
    /// `expires_at` as an RFC 3339 timestamp, `None` when it is not one
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.expires_at)
    }

    /// `None` when the expiry cannot be parsed
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> Option<bool> {
        self.expires_at_utc().map(|expires_at| now >= expires_at)
    }
}

/// Returned on invoice creation; `code` is needed to pay the invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceStatusWithCode {
    #[serde(flatten)]
    pub invoice: InvoiceStatus,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub amount: WireDecimal,
    pub fee: WireDecimal,
    pub currency: TransactionCurrency,
    pub created_at: String,
}

impl PaymentTransaction {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrenciesPaginated {
    pub total: u64,
    pub data: Vec<Currency>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(expires_at: &str) -> InvoiceStatus {
        InvoiceStatus {
            id: "inv".to_string(),
            status: "pending".to_string(),
            expires_at: expires_at.to_string(),
        }
    }

    #[test]
    fn test_invoice_with_code_flattened() {
        let raw = r#"{
            "id": "test-invoice-id",
            "status": "pending",
            "expiresAt": "2024-01-01T01:00:00Z",
            "code": "invoice-code-123"
        }"#;

        let invoice: InvoiceStatusWithCode = serde_json::from_str(raw).expect("invoice");
        assert_eq!(invoice.invoice.id, "test-invoice-id");
        assert_eq!(invoice.invoice.status, "pending");
        assert_eq!(invoice.code, "invoice-code-123");
    }

    #[test]
    fn test_invoice_expiry() {
        let invoice = invoice("2024-01-01T03:00:00.000+02:00");
        let before: DateTime<Utc> = "2024-01-01T00:59:59Z".parse().expect("before");
        let after: DateTime<Utc> = "2024-01-01T01:00:00Z".parse().expect("after");

        assert_eq!(invoice.expires_at_utc(), Some(after));
        assert_eq!(invoice.is_expired_at(before), Some(false));
        assert_eq!(invoice.is_expired_at(after), Some(true));
    }

    #[test]
    fn test_unparseable_expiry_kept() {
        let invoice = invoice("2024-01-01 01:00:00");
        assert_eq!(invoice.expires_at, "2024-01-01 01:00:00");
        assert_eq!(invoice.expires_at_utc(), None);
        assert_eq!(invoice.is_expired_at(Utc::now()), None);
    }

    #[test]
    fn test_payment_transaction_type_field() {
        let raw = r#"{
            "id": "tx",
            "type": "payment",
            "status": "completed",
            "amount": "100.00",
            "fee": 1.5,
            "currency": {
                "id": "usd-id",
                "name": "USD",
                "contractAddress": "0x123...",
                "onchain": false,
                "icon": "https://example.com/usd-icon.png",
                "priceUsd": "1.00"
            },
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;

        let tx: PaymentTransaction = serde_json::from_str(raw).expect("transaction");
        assert_eq!(tx.kind, "payment");
        assert_eq!(tx.amount, WireDecimal::from("100.00"));
        assert_eq!(tx.fee.to_decimal(), Some("1.5".parse().expect("fee")));
        assert_eq!(tx.currency.contract_address, "0x123...");
        assert_eq!(
            tx.created_at_utc(),
            Some("2024-01-01T00:00:00Z".parse().expect("created_at"))
        );
    }
}
