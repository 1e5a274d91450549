//! Simple module models.
//!
//! The `/simple/price` response has no fixed schema: each coin maps to a flat
//! object whose keys are built from the requested currencies, e.g.
//!
//! ```json
//! {"bitcoin": {"usd": 67000.0, "usd_market_cap": 1.3e12, "eur": 61000.0, "last_updated_at": 1700000000}}
//! ```
//!
//! The currency set therefore has to come from the request. [`SimplePrices::from_raw`]
//! looks up `{currency}`, `{currency}_market_cap`, `{currency}_24h_vol` and
//! `{currency}_24h_change` for every requested currency.

use crate::errors::GeckoError;
use crate::helpers::parse_json;
use crate::query::{flag, require_list, Query, QueryParams};
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::Serialize;
use std::collections::HashMap;


const LAST_UPDATED_AT: &str = "last_updated_at";


/// Query parameters for `GET /simple/price`.
///
/// `vs_currencies` doubles as the decode context for the response. The API
/// answers with lowercase currency keys, so codes are lowercased both on the
/// way out and when decoding; `"USD"` and `"usd"` are the same currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplePriceParams {
    pub ids: Vec<String>,
    pub vs_currencies: Vec<String>,
    pub include_market_cap: bool,
    pub include_24hr_vol: bool,
    pub include_24hr_change: bool,
    pub include_last_updated_at: bool,
}


impl QueryParams for SimplePriceParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        let ids = require_list("ids", &self.ids)?;
        let vs_currencies = normalize_currencies(&self.vs_currencies);
        if vs_currencies.is_empty() {
            return Err(GeckoError::MissingContext("vs_currencies"));
        }
        let mut q = Query::new();
        q.insert("ids", ids);
        q.insert("vs_currencies", require_list("vs_currencies", &vs_currencies)?);
        q.insert("include_market_cap", flag(self.include_market_cap));
        q.insert("include_24hr_vol", flag(self.include_24hr_vol));
        q.insert("include_24hr_change", flag(self.include_24hr_change));
        q.insert("include_last_updated_at", flag(self.include_last_updated_at));
        Ok(q)
    }
}


fn normalize_currencies(vs_currencies: &[String]) -> Vec<String> {
    vs_currencies
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}


/// One coin's price in one quote currency.
///
/// The optional fields are `Some` only when the matching `include_*` flag was
/// requested and the API had data; they never stand in as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Display)]
#[display(
    "{} (market cap {:?}, 24h vol {:?}, 24h change {:?})",
    price,
    market_cap,
    vol_24h,
    change_24h
)]
pub struct Price {
    pub price: f64,
    pub market_cap: Option<f64>,
    pub vol_24h: Option<f64>,
    pub change_24h: Option<f64>,
}


/// All requested currency prices for one coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Display)]
#[display("{} currencies, last updated {:?}", currency_prices.len(), last_updated_at)]
pub struct SimplePrice {
    pub currency_prices: HashMap<String, Price>,
    pub last_updated_at: Option<DateTime<Utc>>,
}


/// Decoded `/simple/price` response keyed by coin id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Display)]
#[display("Simple prices for {} coins", prices.len())]
pub struct SimplePrices {
    pub prices: HashMap<String, SimplePrice>,
}


/// Raw `/simple/price` shape: coin id to flat key/number map.
pub type RawSimplePrices = HashMap<String, HashMap<String, Option<f64>>>;


impl SimplePrices {
    /// Decode a response body using the currencies that were requested.
    ///
    /// Fails with [`GeckoError::MissingContext`] before touching the body when
    /// `vs_currencies` is empty.
    pub fn from_json(body: &str, vs_currencies: &[String]) -> Result<Self, GeckoError> {
        if normalize_currencies(vs_currencies).is_empty() {
            return Err(GeckoError::MissingContext("vs_currencies"));
        }
        let raw: RawSimplePrices = parse_json(body)?;
        Self::from_raw(raw, vs_currencies)
    }


    /// Reshape an already-parsed response.
    ///
    /// A requested currency missing for a coin still gets an entry, with a
    /// zero price and no optional fields. Entries are keyed by the lowercased
    /// currency code.
    pub fn from_raw(raw: RawSimplePrices, vs_currencies: &[String]) -> Result<Self, GeckoError> {
        let vs_currencies = normalize_currencies(vs_currencies);
        if vs_currencies.is_empty() {
            return Err(GeckoError::MissingContext("vs_currencies"));
        }
        let prices = raw
            .into_iter()
            .map(|(id, fields)| (id, expand_coin(&fields, &vs_currencies)))
            .collect();
        Ok(SimplePrices { prices })
    }


    pub fn get(&self, id: &str) -> Option<&SimplePrice> {
        self.prices.get(id)
    }


    /// Price of `id` in `currency`, if that coin was returned.
    pub fn price(&self, id: &str, currency: &str) -> Option<f64> {
        self.prices
            .get(id)
            .and_then(|coin| coin.currency_prices.get(&currency.to_lowercase()))
            .map(|p| p.price)
    }


    pub fn len(&self) -> usize {
        self.prices.len()
    }


    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}


fn expand_coin(fields: &HashMap<String, Option<f64>>, vs_currencies: &[String]) -> SimplePrice {
    let lookup = |key: &str| fields.get(key).copied().flatten();
    let currency_prices = vs_currencies
        .iter()
        .map(|currency| {
            let suffixed = |suffix: &str| lookup(&format!("{}_{}", currency, suffix));
            let price = Price {
                price: lookup(currency).unwrap_or_default(),
                market_cap: suffixed("market_cap"),
                vol_24h: suffixed("24h_vol"),
                change_24h: suffixed("24h_change"),
            };
            (currency.clone(), price)
        })
        .collect();
    let last_updated_at = lookup(LAST_UPDATED_AT)
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts as i64, 0));
    SimplePrice {
        currency_prices,
        last_updated_at,
    }
}
