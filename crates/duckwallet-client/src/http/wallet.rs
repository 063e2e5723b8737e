/*
[INPUT]:  Pagination parameters
[OUTPUT]: Supported currencies and payout confirmation
[POS]:    HTTP layer - customer wallet endpoints
[UPDATE]: When adding wallet endpoints or changing query parameters
*/

// ### Wallet Endpoints

use crate::http::{ApiRequest, DuckWalletClient, Result};
use crate::types::CurrenciesPaginated;

const CURRENCIES_ENDPOINT: &str = "/custodial-wallet/customer/currencies";
const PAYOUT_ENDPOINT: &str = "/custodial-wallet/customer/payout";

impl DuckWalletClient {
    /// List supported currencies, one page at a time
    ///
    /// GET /custodial-wallet/customer/currencies?page={page}&limit={limit}
    pub async fn get_currencies(&self, page: u32, limit: u32) -> Result<CurrenciesPaginated> {
        let endpoint = format!("{CURRENCIES_ENDPOINT}?page={page}&limit={limit}");
        self.request(ApiRequest::get(endpoint)).await
    }

    /// List supported currencies using the server's default paging
    ///
    /// GET /custodial-wallet/customer/currencies
    pub async fn get_all_currencies(&self) -> Result<CurrenciesPaginated> {
        self.request(ApiRequest::get(CURRENCIES_ENDPOINT)).await
    }

    /// Request a payout of the customer balance
    ///
    /// POST /custodial-wallet/customer/payout
    pub async fn request_payout(&self) -> Result<()> {
        self.request_empty(ApiRequest::post(PAYOUT_ENDPOINT)).await
    }
}
