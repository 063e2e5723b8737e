/*
[INPUT]:  DUCKWALLET_API_KEY / DUCKWALLET_BASE_URL environment variables
[OUTPUT]: Created invoice, its status, and the first page of currencies
[POS]:    Examples - end-to-end invoice flow
[UPDATE]: When the public client API changes
*/

use anyhow::{Context, Result};
use duckwallet_client::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Example: create an invoice and poll its status
///
/// Run with `RUST_LOG=debug` to see the request log.
#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ClientConfig::from_env().context("load client config")?;
    let client = DuckWalletClient::new(config).context("create client")?;
    info!(base_url = client.base_url(), "client ready");

    let currencies = client.get_currencies(1, 10).await?;
    for currency in &currencies.data {
        info!(name = %currency.name, price_usd = %currency.price_usd, "currency");
    }

    let options = CreateInvoiceOptions {
        id: format!("demo-{}", chrono::Utc::now().timestamp()),
        user_telegram_id: 123_456_789,
        currency: InvoiceCurrency {
            name: "USD".to_string(),
        },
        product: InvoiceProduct {
            id: "demo-product".to_string(),
            name: "Demo Product".to_string(),
            description: "Created by the invoice example".to_string(),
            price: serde_json::Number::from(1u64),
        },
    };

    match client.create_invoice(&options).await {
        Ok(created) => {
            info!(id = %created.invoice.id, code = %created.code, "invoice created");
            let status = client.get_invoice_status(&created.invoice.id).await?;
            info!(
                status = %status.status,
                expires_at = %status.expires_at,
                expired = ?status.is_expired_at(chrono::Utc::now()),
                "invoice status"
            );
        }
        Err(err) => {
            info!(
                message = %err.message,
                status_code = ?err.status_code,
                code = ?err.code,
                "invoice creation rejected"
            );
        }
    }

    Ok(())
}
