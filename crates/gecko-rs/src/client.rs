use crate::errors::GeckoError;
use crate::helpers;
use crate::query::QueryParams;
use reqwest::Client;


// Public API base URL
pub const GECKO_API: &str = "https://api.coingecko.com/api/v3";


/// Main client for the CoinGecko market-data API.
///
/// Every endpoint method lives on `GeckoClient`, grouped by module:
///
/// ## Ping
/// - [`ping`](GeckoClient::ping) - API status check
///
/// ## Simple
/// - [`get_supported_vs_currencies`](GeckoClient::get_supported_vs_currencies) - Quote currency codes
/// - [`get_simple_price`](GeckoClient::get_simple_price) - Prices for several coins in several currencies
///
/// ## Coins
/// - [`get_coins_list`](GeckoClient::get_coins_list) - Every coin id, symbol and name
/// - [`get_coins_markets`](GeckoClient::get_coins_markets) - Market snapshots
/// - [`get_coin`](GeckoClient::get_coin) - Full detail for one coin
/// - [`get_coin_market_chart`](GeckoClient::get_coin_market_chart) - Price, market cap and volume history
/// - [`get_coin_ohlc`](GeckoClient::get_coin_ohlc) - OHLC candles
///
/// ## Exchanges
/// - [`get_exchanges_list`](GeckoClient::get_exchanges_list) - Exchange ids and names
/// - [`get_exchanges`](GeckoClient::get_exchanges) - Paginated exchange records
///
/// The client holds no mutable state; share it freely between tasks.
/// Timeouts and cancellation belong to the underlying [`reqwest::Client`],
/// see [`with_http_client`](GeckoClient::with_http_client).
///
/// # Example
/// ```no_run
/// use gecko_rs::GeckoClient;
/// use gecko_rs::simple::models::SimplePriceParams;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeckoClient::new();
/// let prices = client.get_simple_price(&SimplePriceParams {
///     ids: vec!["bitcoin".to_string()],
///     vs_currencies: vec!["usd".to_string()],
///     include_market_cap: true,
///     ..Default::default()
/// }).await?;
/// println!("{}", prices);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeckoClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: String,
}


impl Default for GeckoClient {
    fn default() -> Self {
        Self::new()
    }
}


impl GeckoClient {
    /// Create a new GeckoClient with the public API endpoint
    pub fn new() -> GeckoClient {
        GeckoClient {
            http_client: Client::new(),
            base_url: GECKO_API.to_string(),
        }
    }


    /// Create a new GeckoClient with a custom API endpoint
    /// Useful for testing or routing through a proxy
    pub fn new_with_config(configuration: Option<String>) -> GeckoClient {
        GeckoClient {
            http_client: Client::new(),
            base_url: configuration.unwrap_or_else(|| GECKO_API.to_string()),
        }
    }


    /// Create a GeckoClient around a caller-built HTTP client.
    ///
    /// The caller owns timeout, TLS, pooling and default-header policy.
    pub fn with_http_client(http_client: Client, base_url: Option<String>) -> GeckoClient {
        GeckoClient {
            http_client,
            base_url: base_url.unwrap_or_else(|| GECKO_API.to_string()),
        }
    }


    pub fn base_url(&self) -> &str {
        &self.base_url
    }


    /// GET a path without query parameters
    pub(crate) async fn get(&self, path: &str) -> Result<String, GeckoError> {
        helpers::unauthenticated_get(&self.http_client, &self.base_url, path, None, None).await
    }


    /// Validate and encode `params`, then GET the path with them
    pub(crate) async fn get_with<P>(&self, path: &str, params: &P) -> Result<String, GeckoError>
    where
        P: QueryParams + ?Sized,
    {
        helpers::get_with_params(&self.http_client, &self.base_url, path, None, params).await
    }


    /// Like [`get_with`](GeckoClient::get_with), with `id` filling the `{}`
    /// segment of `path` as a single escaped segment
    pub(crate) async fn get_with_id<P>(
        &self,
        path: &str,
        id: &str,
        params: &P,
    ) -> Result<String, GeckoError>
    where
        P: QueryParams + ?Sized,
    {
        helpers::get_with_params(&self.http_client, &self.base_url, path, Some(id), params).await
    }
}
