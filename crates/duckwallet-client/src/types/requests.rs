/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceOptions {
    pub id: String,
    pub user_telegram_id: i64,
    pub currency: InvoiceCurrency,
    pub product: InvoiceProduct,
}

/// Currency an invoice is priced in, referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCurrency {
    pub name: String,
}

/// `price` is a JSON number kept as given, so `100` is sent as `100`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
}

/// Path parameters for paying an invoice; sent in the URL, not the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteInvoicePaymentOptions {
    pub id: String,
    pub code: String,
    pub user_telegram_id: i64,
}
