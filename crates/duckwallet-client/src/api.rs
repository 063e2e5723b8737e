/*
[INPUT]:  Invoice options, identifiers and pagination parameters
[OUTPUT]: Typed API results behind an object-safe async trait
[POS]:    API layer - abstraction over the wallet client for callers and test doubles
[UPDATE]: When the set of public operations changes
*/

use async_trait::async_trait;

use crate::http::{DuckWalletClient, Result};
use crate::types::{
    CompleteInvoicePaymentOptions, CreateInvoiceOptions, CurrenciesPaginated, InvoiceStatus,
    InvoiceStatusWithCode, PaymentTransaction,
};

/// Operations of the custodial wallet customer API
#[async_trait]
pub trait CustodialWalletApi: Send + Sync {
    async fn create_invoice(
        &self,
        options: &CreateInvoiceOptions,
    ) -> Result<InvoiceStatusWithCode>;

    async fn get_invoice_status(&self, invoice_id: &str) -> Result<InvoiceStatus>;

    async fn complete_invoice_payment(
        &self,
        options: &CompleteInvoicePaymentOptions,
    ) -> Result<PaymentTransaction>;

    async fn get_currencies(&self, page: u32, limit: u32) -> Result<CurrenciesPaginated>;

    async fn request_payout(&self) -> Result<()>;
}

#[async_trait]
impl CustodialWalletApi for DuckWalletClient {
    async fn create_invoice(
        &self,
        options: &CreateInvoiceOptions,
    ) -> Result<InvoiceStatusWithCode> {
        DuckWalletClient::create_invoice(self, options).await
    }

    async fn get_invoice_status(&self, invoice_id: &str) -> Result<InvoiceStatus> {
        DuckWalletClient::get_invoice_status(self, invoice_id).await
    }

    async fn complete_invoice_payment(
        &self,
        options: &CompleteInvoicePaymentOptions,
    ) -> Result<PaymentTransaction> {
        DuckWalletClient::complete_invoice_payment(self, options).await
    }

    async fn get_currencies(&self, page: u32, limit: u32) -> Result<CurrenciesPaginated> {
        DuckWalletClient::get_currencies(self, page, limit).await
    }

    async fn request_payout(&self) -> Result<()> {
        DuckWalletClient::request_payout(self).await
    }
}
