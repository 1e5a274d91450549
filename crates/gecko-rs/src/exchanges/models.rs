//! Exchanges module models.

use crate::errors::GeckoError;
use crate::query::{bounded, Query, QueryParams, MAX_PER_PAGE};
use derive_more::Display;
use serde::{Deserialize, Serialize};


/// Query parameters for `GET /exchanges`.
///
/// Zero for either field lets the server choose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExchangesParams {
    pub per_page: i32,
    pub page: i32,
}


impl QueryParams for ExchangesParams {
    fn to_query(&self) -> Result<Query, GeckoError> {
        let per_page = bounded("per_page", self.per_page, Some(MAX_PER_PAGE))?;
        let page = bounded("page", self.page, None)?;
        let mut q = Query::new();
        if let Some(per_page) = per_page {
            q.insert("per_page", per_page);
        }
        if let Some(page) = page {
            q.insert("page", page);
        }
        Ok(q)
    }
}


/// Entry of `GET /exchanges/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}: {}", id, name)]
pub struct ExchangeSummary {
    pub id: String,
    pub name: String,
}


/// Entry of `GET /exchanges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{} (trust rank {:?}, 24h BTC vol {:?})", name, trust_score_rank, trade_volume_24h_btc)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub year_established: Option<i32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub has_trading_incentive: Option<bool>,
    #[serde(default)]
    pub trust_score: Option<i32>,
    #[serde(default)]
    pub trust_score_rank: Option<i32>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc_normalized: Option<f64>,
}
