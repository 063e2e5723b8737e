/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: Wire fields keep the server's exact form; typed views parse on demand
*/

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Decimal value as sent by the server, either a JSON string or a JSON number.
///
/// Re-serializes in the form it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireDecimal {
    Number(Number),
    Text(String),
}

impl WireDecimal {
    /// Parse as a [`Decimal`], `None` when the text is not a decimal
    pub fn to_decimal(&self) -> Option<Decimal> {
        let raw = match self {
            WireDecimal::Number(number) => number.to_string(),
            WireDecimal::Text(text) => text.clone(),
        };
        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .ok()
    }
}

impl From<&str> for WireDecimal {
    fn from(value: &str) -> Self {
        WireDecimal::Text(value.to_string())
    }
}

impl fmt::Display for WireDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireDecimal::Number(number) => write!(f, "{number}"),
            WireDecimal::Text(text) => f.write_str(text),
        }
    }
}

/// Currency summary embedded in a payment transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCurrency {
    pub id: String,
    pub name: String,
    pub contract_address: String,
    pub onchain: bool,
    pub icon: String,
    pub price_usd: WireDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub name: String,
    pub contract_address: String,
    pub onchain: bool,
    pub icon: String,
    pub price_usd: WireDecimal,
    pub price_usd_yesterday: WireDecimal,
    #[serde(default)]
    pub price_usd_historical: Vec<PriceUsdHistorical>,
    pub decimals: u32,
}

impl Currency {
    /// Relative price change since yesterday.
    ///
    /// `None` when either price is not a decimal or yesterday's price is zero.
    pub fn daily_change(&self) -> Option<Decimal> {
        let today = self.price_usd.to_decimal()?;
        let yesterday = self.price_usd_yesterday.to_decimal()?;
        if yesterday.is_zero() {
            return None;
        }
        Some((today - yesterday) / yesterday)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUsdHistorical {
    pub date: String,
    pub price_usd: WireDecimal,
}

impl PriceUsdHistorical {
    /// `date` parsed as `YYYY-MM-DD`
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
