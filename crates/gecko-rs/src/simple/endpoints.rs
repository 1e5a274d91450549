//! Simple module endpoints.
//!
//! # Usage
//!
//! All endpoint methods are available on [`GeckoClient`](crate::client::GeckoClient).

use crate::client::GeckoClient;
use crate::errors::GeckoError;
use crate::helpers::parse_json;
use crate::simple::models::{SimplePriceParams, SimplePrices};


const GET_SUPPORTED_VS_CURRENCIES: &str = "/simple/supported_vs_currencies";
const GET_SIMPLE_PRICE: &str = "/simple/price";


impl GeckoClient {
    /// Lists every quote currency code the API prices in.
    ///
    /// **Endpoint:** `GET /simple/supported_vs_currencies`
    pub async fn get_supported_vs_currencies(&self) -> Result<Vec<String>, GeckoError> {
        let resp = self.get(GET_SUPPORTED_VS_CURRENCIES).await?;
        parse_json(&resp)
    }


    /// Retrieves current prices for several coins in several quote currencies.
    ///
    /// **Endpoint:** `GET /simple/price`
    ///
    /// # Query Parameters
    /// - `ids` - Comma-separated coin ids (required)
    /// - `vs_currencies` - Comma-separated quote currencies (required)
    /// - `include_market_cap`, `include_24hr_vol`, `include_24hr_change`,
    ///   `include_last_updated_at` - Always sent as `true`/`false`
    ///
    /// # Returns
    /// [`SimplePrices`] with one entry per returned coin, each holding exactly
    /// the requested currencies.
    ///
    /// # Models Used
    /// - Query: [`SimplePriceParams`]
    /// - Response: [`SimplePrices`]
    pub async fn get_simple_price(
        &self,
        params: &SimplePriceParams,
    ) -> Result<SimplePrices, GeckoError> {
        // The currency list is both a query parameter and the decode context.
        let resp = self.get_with(GET_SIMPLE_PRICE, params).await?;
        SimplePrices::from_json(&resp, &params.vs_currencies)
    }
}
