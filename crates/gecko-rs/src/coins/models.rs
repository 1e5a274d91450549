//! Coins module models.
//!
//! Parameter records and response types for the coin list, market snapshots,
//! coin detail, market chart and OHLC endpoints. A few fields need reshaping
//! on the way in:
//!
//! - `description` arrives as a locale map and is reduced to its English entry
//! - `platforms` drops entries with an empty platform name or address
//! - the coin list may start with a sentinel entry whose id is empty

use crate::errors::GeckoError;
use crate::helpers::parse_json;
use crate::query::{bounded, flag, optional_list, require_str, Query, QueryParams, MAX_PER_PAGE};
use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;


/// Locale kept when reducing multi-language text.
pub const DESCRIPTION_LOCALE: &str = "en";


/// Platform name to contract address, with unsupported platforms removed.
pub type Platforms = HashMap<String, String>;


type RawPlatforms = HashMap<String, Option<String>>;


// ── Query parameters ────────────────────────────────────────────────


/// Query parameters for `GET /coins/list`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoinsListParams {
    pub include_platform: bool,
}


impl QueryParams for CoinsListParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        let mut q = Query::new();
        q.insert("include_platform", flag(self.include_platform));
        Ok(q)
    }
}


/// Sort order for `GET /coins/markets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MarketOrder {
    #[display("gecko_desc")]
    GeckoDesc,
    #[display("gecko_asc")]
    GeckoAsc,
    #[display("market_cap_asc")]
    MarketCapAsc,
    #[display("market_cap_desc")]
    MarketCapDesc,
    #[display("volume_asc")]
    VolumeAsc,
    #[display("volume_desc")]
    VolumeDesc,
    #[display("id_asc")]
    IdAsc,
    #[display("id_desc")]
    IdDesc,
}


/// Price change window requested through `price_change_percentage`.
///
/// Each requested window adds a `price_change_percentage_{window}_in_currency`
/// field to every [`Market`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PriceChangeWindow {
    #[display("1h")]
    Hour1,
    #[display("24h")]
    Hour24,
    #[display("7d")]
    Day7,
    #[display("14d")]
    Day14,
    #[display("30d")]
    Day30,
    #[display("200d")]
    Day200,
    #[display("1y")]
    Year1,
}


/// Query parameters for `GET /coins/markets`.
///
/// `vs_currency` is required. `per_page` must be within `0..=250` and `page`
/// non-negative; zero leaves either to the server default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinsMarketsParams {
    pub vs_currency: String,
    pub ids: Vec<String>,
    pub category: Option<String>,
    pub order: Option<MarketOrder>,
    pub per_page: i32,
    pub page: i32,
    pub price_change_percentage: Vec<PriceChangeWindow>,
    pub sparkline: bool,
}


impl QueryParams for CoinsMarketsParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        let vs_currency = require_str("vs_currency", &self.vs_currency)?;
        let per_page = bounded("per_page", self.per_page, Some(MAX_PER_PAGE))?;
        let page = bounded("page", self.page, None)?;
        let mut q = Query::new();
        q.insert("vs_currency", vs_currency);
        if let Some(ids) = optional_list(&self.ids) {
            q.insert("ids", ids);
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            q.insert("category", category.to_string());
        }
        if let Some(order) = self.order {
            q.insert("order", order.to_string());
        }
        if let Some(per_page) = per_page {
            q.insert("per_page", per_page);
        }
        if let Some(page) = page {
            q.insert("page", page);
        }
        if !self.price_change_percentage.is_empty() {
            let windows = self
                .price_change_percentage
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(",");
            q.insert("price_change_percentage", windows);
        }
        q.insert("sparkline", flag(self.sparkline));
        Ok(q)
    }
}


/// Parameters for `GET /coins/{id}`.
///
/// `id` goes into the path. The section toggles are always sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinParams {
    pub id: String,
    pub localization: bool,
    pub tickers: bool,
    pub market_data: bool,
    pub community_data: bool,
    pub developer_data: bool,
    pub sparkline: bool,
}


impl CoinParams {
    pub fn new(id: impl Into<String>) -> Self {
        CoinParams {
            id: id.into(),
            ..Default::default()
        }
    }
}


impl QueryParams for CoinParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        require_str("id", &self.id)?;
        let mut q = Query::new();
        q.insert("localization", flag(self.localization));
        q.insert("tickers", flag(self.tickers));
        q.insert("market_data", flag(self.market_data));
        q.insert("community_data", flag(self.community_data));
        q.insert("developer_data", flag(self.developer_data));
        q.insert("sparkline", flag(self.sparkline));
        Ok(q)
    }
}


/// Parameters for `GET /coins/{id}/market_chart`.
///
/// `days` accepts a day count or `max`. Granularity is chosen by the server:
/// 5 minutes for 1 day, hourly up to 90 days, daily beyond.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketChartParams {
    pub id: String,
    pub vs_currency: String,
    pub days: String,
}


impl QueryParams for MarketChartParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        series_query(&self.id, &self.vs_currency, &self.days)
    }
}


/// Parameters for `GET /coins/{id}/ohlc`.
///
/// `days` is one of `1`, `7`, `14`, `30`, `90`, `180`, `365` or `max`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcParams {
    pub id: String,
    pub vs_currency: String,
    pub days: String,
}


impl QueryParams for OhlcParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        series_query(&self.id, &self.vs_currency, &self.days)
    }
}


fn series_query(id: &str, vs_currency: &str, days: &str) -> Result<Query, GeckoError> {
    require_str("id", id)?;
    let mut q = Query::new();
    q.insert("vs_currency", require_str("vs_currency", vs_currency)?);
    q.insert("days", require_str("days", days)?);
    Ok(q)
}


// ── Response types ──────────────────────────────────────────────────


/// Entry of `GET /coins/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} ({}): {}", id, symbol, name)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Only present when requested with `include_platform`.
    #[serde(default, deserialize_with = "deserialize_optional_platforms")]
    pub platforms: Option<Platforms>,
}


/// Decode a `/coins/list` body, dropping a leading sentinel entry.
pub fn decode_coins_list(body: &str) -> Result<Vec<Coin>, GeckoError> {
    let coins: Vec<Coin> = parse_json(body)?;
    Ok(strip_sentinel(coins))
}


/// Remove a leading entry with an empty id. An empty list stays empty.
pub fn strip_sentinel(mut coins: Vec<Coin>) -> Vec<Coin> {
    if coins.first().is_some_and(|c| c.id.is_empty()) {
        debug!("dropping sentinel entry from coin list");
        coins.remove(0);
    }
    coins
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}x in {} ({}%)", times, currency, percentage)]
pub struct Roi {
    pub times: f64,
    pub currency: String,
    pub percentage: f64,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Display)]
#[display("{} sparkline points", price.len())]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}


/// Entry of `GET /coins/markets`.
///
/// The `price_change_percentage_*_in_currency` fields are only populated for
/// the windows that were requested, and `sparkline_in_7d` only when
/// `sparkline` was set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} ({}) price {:?} cap {:?}", id, symbol, current_price, market_cap)]
pub struct Market {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub ath_change_percentage: Option<f64>,
    #[serde(default)]
    pub ath_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub atl: Option<f64>,
    #[serde(default)]
    pub atl_change_percentage: Option<f64>,
    #[serde(default)]
    pub atl_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roi: Option<Roi>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_14d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_200d_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y_in_currency: Option<f64>,
}


impl Market {
    /// Price change over `window`, if that window was requested.
    pub fn price_change_percentage(&self, window: PriceChangeWindow) -> Option<f64> {
        match window {
            PriceChangeWindow::Hour1 => self.price_change_percentage_1h_in_currency,
            PriceChangeWindow::Hour24 => self.price_change_percentage_24h_in_currency,
            PriceChangeWindow::Day7 => self.price_change_percentage_7d_in_currency,
            PriceChangeWindow::Day14 => self.price_change_percentage_14d_in_currency,
            PriceChangeWindow::Day30 => self.price_change_percentage_30d_in_currency,
            PriceChangeWindow::Day200 => self.price_change_percentage_200d_in_currency,
            PriceChangeWindow::Year1 => self.price_change_percentage_1y_in_currency,
        }
    }
}


#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Display)]
#[display("{}", large.as_deref().or(small.as_deref()).or(thumb.as_deref()).unwrap_or("-"))]
pub struct Image {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} {} ({})", kind, name, symbol)]
pub struct Project {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub image: Image,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("[{}] {} by {}", category, created_at, user)]
pub struct StatusUpdate {
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub user_title: Option<String>,
    #[serde(default)]
    pub pin: bool,
    pub project: Project,
}


/// Response from `GET /coins/{id}`.
///
/// `links` is kept as untyped JSON; its nested shape differs per key, e.g.
/// `homepage` is an array of strings while `repos_url` is an object of arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} ({}): {}", id, symbol, name)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub asset_platform_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_platforms")]
    pub platforms: Platforms,
    #[serde(default)]
    pub block_time_in_minutes: Option<u32>,
    #[serde(default)]
    pub hashing_algorithm: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_localized")]
    pub description: String,
    #[serde(default)]
    pub links: HashMap<String, Value>,
    #[serde(default)]
    pub image: Image,
    #[serde(default)]
    pub country_origin: Option<String>,
    #[serde(default)]
    pub genesis_date: Option<NaiveDate>,
    #[serde(default)]
    pub sentiment_votes_up_percentage: Option<f64>,
    #[serde(default)]
    pub sentiment_votes_down_percentage: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub coingecko_rank: Option<u32>,
    #[serde(default)]
    pub coingecko_score: Option<f64>,
    #[serde(default)]
    pub status_updates: Vec<StatusUpdate>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}


/// `(timestamp in milliseconds, value)`
pub type ChartPoint = (i64, f64);


/// Response from `GET /coins/{id}/market_chart`.
///
/// The three series are expected to line up index by index, but that is not
/// checked here; see [`MarketChart::is_aligned`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Display)]
#[display(
    "{} prices, {} market caps, {} volumes",
    prices.len(),
    market_caps.len(),
    total_volumes.len()
)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<ChartPoint>,
    #[serde(default)]
    pub market_caps: Vec<ChartPoint>,
    #[serde(default)]
    pub total_volumes: Vec<ChartPoint>,
}


impl MarketChart {
    /// True when all three series have the same length and timestamps.
    pub fn is_aligned(&self) -> bool {
        self.prices.len() == self.market_caps.len()
            && self.prices.len() == self.total_volumes.len()
            && self
                .prices
                .iter()
                .zip(&self.market_caps)
                .zip(&self.total_volumes)
                .all(|((p, m), v)| p.0 == m.0 && p.0 == v.0)
    }
}


/// One OHLC candle, decoded from `[timestamp, open, high, low, close]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display)]
#[serde(from = "(i64, f64, f64, f64, f64)")]
#[display("ts={} O/H/L/C={}/{}/{}/{}", timestamp, open, high, low, close)]
pub struct Ohlc {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}


impl From<(i64, f64, f64, f64, f64)> for Ohlc {
    fn from((timestamp, open, high, low, close): (i64, f64, f64, f64, f64)) -> Self {
        Ohlc {
            timestamp,
            open,
            high,
            low,
            close,
        }
    }
}


// ── Field reshaping ─────────────────────────────────────────────────


/// Keep only the [`DESCRIPTION_LOCALE`] entry of a locale map.
pub fn localize(texts: &HashMap<String, Option<String>>) -> String {
    texts
        .get(DESCRIPTION_LOCALE)
        .cloned()
        .flatten()
        .unwrap_or_default()
}


/// Drop platform entries whose name or address is empty.
pub fn filter_platforms(raw: HashMap<String, Option<String>>) -> Platforms {
    raw.into_iter()
        .filter_map(|(platform, address)| match address {
            Some(address) if !platform.is_empty() && !address.is_empty() => {
                Some((platform, address))
            }
            _ => None,
        })
        .collect()
}


fn deserialize_localized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let texts = Option::<HashMap<String, Option<String>>>::deserialize(deserializer)?;
    Ok(texts.map(|t| localize(&t)).unwrap_or_default())
}


fn deserialize_platforms<'de, D>(deserializer: D) -> Result<Platforms, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPlatforms>::deserialize(deserializer)?;
    Ok(raw.map(filter_platforms).unwrap_or_default())
}


fn deserialize_optional_platforms<'de, D>(deserializer: D) -> Result<Option<Platforms>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPlatforms>::deserialize(deserializer)?;
    Ok(raw.map(filter_platforms))
}


// Upstream occasionally puts nulls in string arrays such as `categories`
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}
