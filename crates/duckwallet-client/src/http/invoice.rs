/*
[INPUT]:  Invoice options and identifiers
[OUTPUT]: Invoice status and payment transactions
[POS]:    HTTP layer - customer invoice endpoints
[UPDATE]: When adding invoice endpoints or changing path templates
*/

use crate::http::{ApiRequest, DuckWalletClient, Result};
use crate::types::{
    CompleteInvoicePaymentOptions, CreateInvoiceOptions, InvoiceStatus, InvoiceStatusWithCode,
    PaymentTransaction,
};

const INVOICE_ENDPOINT: &str = "/custodial-wallet/customer/invoice";

impl DuckWalletClient {
    /// Create an invoice
    ///
    /// POST /custodial-wallet/customer/invoice
    pub async fn create_invoice(
        &self,
        options: &CreateInvoiceOptions,
    ) -> Result<InvoiceStatusWithCode> {
        let request = ApiRequest::post(INVOICE_ENDPOINT).with_json(options)?;
        self.request(request).await
    }

    /// Query invoice status
    ///
    /// GET /custodial-wallet/customer/invoice/{id}/status
    pub async fn get_invoice_status(&self, invoice_id: &str) -> Result<InvoiceStatus> {
        let endpoint = format!("{INVOICE_ENDPOINT}/{invoice_id}/status");
        self.request(ApiRequest::get(endpoint)).await
    }

    /// Pay an invoice on behalf of a Telegram user
    ///
    /// POST /custodial-wallet/customer/invoice/{id}/{code}/{userTelegramId}/payment
    pub async fn complete_invoice_payment(
        &self,
        options: &CompleteInvoicePaymentOptions,
    ) -> Result<PaymentTransaction> {
        let endpoint = format!(
            "{}/{}/{}/{}/payment",
            INVOICE_ENDPOINT, options.id, options.code, options.user_telegram_id
        );
        self.request(ApiRequest::post(endpoint)).await
    }

    /// Older name for [`DuckWalletClient::complete_invoice_payment`]
    pub async fn pay_invoice(
        &self,
        options: &CompleteInvoicePaymentOptions,
    ) -> Result<PaymentTransaction> {
        self.complete_invoice_payment(options).await
    }
}
