use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Snapshot settings.
///
/// Defaults cover a handful of large caps in USD and EUR. Each field can be
/// overridden from the environment (a `.env` file is loaded first):
///
/// - `GECKO_BASE_URL` - alternate API root
/// - `GECKO_COINS` - comma-separated coin ids
/// - `GECKO_VS_CURRENCIES` - comma-separated quote currencies
/// - `GECKO_MARKETS_PER_PAGE` - how many market rows to log (max 250)
/// - `GECKO_TIMEOUT_SECS` - per-request timeout
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Option<String>,
    pub coin_ids: Vec<String>,
    pub vs_currencies: Vec<String>,
    pub markets_per_page: i32,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            coin_ids: vec![
                "bitcoin".to_string(),
                "ethereum".to_string(),
                "solana".to_string(),
            ],
            vs_currencies: vec!["usd".to_string(), "eur".to_string()],
            markets_per_page: 10,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut cfg = Config::default();
        if let Ok(url) = env::var("GECKO_BASE_URL") {
            cfg.base_url = Some(url);
        }
        if let Ok(coins) = env::var("GECKO_COINS") {
            cfg.coin_ids = split_list(&coins);
        }
        if let Ok(currencies) = env::var("GECKO_VS_CURRENCIES") {
            cfg.vs_currencies = split_list(&currencies);
        }
        if let Ok(per_page) = env::var("GECKO_MARKETS_PER_PAGE") {
            cfg.markets_per_page = per_page
                .trim()
                .parse()
                .with_context(|| format!("GECKO_MARKETS_PER_PAGE={per_page} is not an integer"))?;
        }
        if let Ok(secs) = env::var("GECKO_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("GECKO_TIMEOUT_SECS={secs} is not a whole number"))?;
            cfg.request_timeout = Duration::from_secs(secs);
        }
        Ok(cfg)
    }

    /// First configured quote currency, used for the market table.
    pub fn primary_currency(&self) -> &str {
        self.vs_currencies.first().map(String::as_str).unwrap_or("usd")
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
