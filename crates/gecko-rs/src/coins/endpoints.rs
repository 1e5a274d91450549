//! Coins module endpoints.
//!
//! This module implements the coin catalog, market snapshot, coin detail,
//! market chart and OHLC endpoints.
//!
//! # Usage
//!
//! All endpoint methods are available on [`GeckoClient`](crate::client::GeckoClient).
//! See the client documentation for a complete list of available methods.

use crate::client::GeckoClient;
use crate::coins::models::{
    decode_coins_list, Coin, CoinDetail, CoinParams, CoinsListParams, CoinsMarketsParams,
    Market, MarketChart, MarketChartParams, Ohlc, OhlcParams,
};
use crate::errors::GeckoError;
use crate::helpers::parse_json;


const GET_COINS_LIST: &str = "/coins/list";
const GET_COINS_MARKETS: &str = "/coins/markets";
const GET_COIN: &str = "/coins/{}";
const GET_COIN_MARKET_CHART: &str = "/coins/{}/market_chart";
const GET_COIN_OHLC: &str = "/coins/{}/ohlc";


impl GeckoClient {
    /// Retrieves every supported coin's id, symbol and name.
    ///
    /// **Endpoint:** `GET /coins/list`
    ///
    /// # Query Parameters
    /// - `include_platform` - Attach platform contract addresses to each coin
    ///
    /// # Returns
    /// The coin catalog. A leading sentinel entry with an empty id is dropped.
    ///
    /// # Models Used
    /// - Query: [`CoinsListParams`]
    /// - Response: [`Coin`]
    pub async fn get_coins_list(
        &self,
        params: &CoinsListParams,
    ) -> Result<Vec<Coin>, GeckoError> {
        let resp = self.get_with(GET_COINS_LIST, params).await?;
        decode_coins_list(&resp)
    }


    /// Retrieves market snapshots (price, market cap, volume, price changes).
    ///
    /// **Endpoint:** `GET /coins/markets`
    ///
    /// # Query Parameters
    /// - `vs_currency` - Quote currency (required)
    /// - `ids` - Restrict to these coin ids
    /// - `category` - Restrict to a category, e.g. `stablecoins`
    /// - `order` - Sort order
    /// - `per_page` - Page size, at most 250
    /// - `page` - Page number
    /// - `price_change_percentage` - Extra price change windows
    /// - `sparkline` - Include 7 day sparkline
    ///
    /// # Models Used
    /// - Query: [`CoinsMarketsParams`]
    /// - Response: [`Market`]
    pub async fn get_coins_markets(
        &self,
        params: &CoinsMarketsParams,
    ) -> Result<Vec<Market>, GeckoError> {
        let resp = self.get_with(GET_COINS_MARKETS, params).await?;
        parse_json(&resp)
    }


    /// Retrieves the full record for one coin.
    ///
    /// **Endpoint:** `GET /coins/{id}`
    ///
    /// # Returns
    /// [`CoinDetail`] with an English-only description and populated platforms
    ///
    /// # Models Used
    /// - Query: [`CoinParams`]
    /// - Response: [`CoinDetail`]
    pub async fn get_coin(&self, params: &CoinParams) -> Result<CoinDetail, GeckoError> {
        let resp = self.get_with_id(GET_COIN, &params.id, params).await?;
        parse_json(&resp)
    }


    /// Retrieves price, market cap and volume history for one coin.
    ///
    /// **Endpoint:** `GET /coins/{id}/market_chart`
    ///
    /// # Query Parameters
    /// - `vs_currency` - Quote currency (required)
    /// - `days` - Day range or `max` (required)
    ///
    /// # Models Used
    /// - Query: [`MarketChartParams`]
    /// - Response: [`MarketChart`]
    pub async fn get_coin_market_chart(
        &self,
        params: &MarketChartParams,
    ) -> Result<MarketChart, GeckoError> {
        let resp = self.get_with_id(GET_COIN_MARKET_CHART, &params.id, params).await?;
        parse_json(&resp)
    }


    /// Retrieves OHLC candles for one coin.
    ///
    /// **Endpoint:** `GET /coins/{id}/ohlc`
    ///
    /// # Query Parameters
    /// - `vs_currency` - Quote currency (required)
    /// - `days` - Day range (required)
    ///
    /// # Models Used
    /// - Query: [`OhlcParams`]
    /// - Response: [`Ohlc`]
    pub async fn get_coin_ohlc(&self, params: &OhlcParams) -> Result<Vec<Ohlc>, GeckoError> {
        let resp = self.get_with_id(GET_COIN_OHLC, &params.id, params).await?;
        parse_json(&resp)
    }
}
