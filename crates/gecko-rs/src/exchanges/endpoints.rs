//! Exchanges module endpoints.

use crate::client::GeckoClient;
use crate::errors::GeckoError;
use crate::exchanges::models::{Exchange, ExchangeSummary, ExchangesParams};
use crate::helpers::parse_json;


const GET_EXCHANGES_LIST: &str = "/exchanges/list";
const GET_EXCHANGES: &str = "/exchanges";


impl GeckoClient {
    /// Get Exchanges List.
    ///
    /// **Endpoint:** `GET /exchanges/list`
    ///
    /// # Returns
    /// Every exchange id and name, unpaginated
    pub async fn get_exchanges_list(&self) -> Result<Vec<ExchangeSummary>, GeckoError> {
        let resp = self.get(GET_EXCHANGES_LIST).await?;
        parse_json(&resp)
    }


    /// Get Exchanges.
    ///
    /// **Endpoint:** `GET /exchanges`
    ///
    /// # Query Parameters
    /// - `per_page` - Page size, at most 250
    /// - `page` - Page number
    pub async fn get_exchanges(
        &self,
        params: &ExchangesParams,
    ) -> Result<Vec<Exchange>, GeckoError> {
        let resp = self.get_with(GET_EXCHANGES, params).await?;
        parse_json(&resp)
    }
}
