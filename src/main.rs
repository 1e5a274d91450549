mod config;
mod report;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

use gecko_rs::GeckoClient;
use gecko_rs::coins::models::{CoinsMarketsParams, MarketOrder, PriceChangeWindow};
use gecko_rs::simple::models::SimplePriceParams;

#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let cfg = Config::from_env()?;
    let http_client = reqwest::Client::builder()
        .timeout(cfg.request_timeout)
        .build()
        .context("failed to build HTTP client")?;
    let client = GeckoClient::with_http_client(http_client, cfg.base_url.clone());

    let ping = client.ping().await.context("API status check failed")?;
    info!(base_url = %client.base_url(), status = %ping, "connected");

    let prices = client
        .get_simple_price(&SimplePriceParams {
            ids: cfg.coin_ids.clone(),
            vs_currencies: cfg.vs_currencies.clone(),
            include_market_cap: true,
            include_24hr_vol: true,
            include_24hr_change: true,
            include_last_updated_at: true,
        })
        .await
        .context("simple price lookup failed")?;
    report::log_prices(&prices);

    let currency = cfg.primary_currency().to_string();
    let markets = client
        .get_coins_markets(&CoinsMarketsParams {
            vs_currency: currency.clone(),
            order: Some(MarketOrder::MarketCapDesc),
            per_page: cfg.markets_per_page,
            price_change_percentage: vec![PriceChangeWindow::Hour24],
            ..Default::default()
        })
        .await
        .context("market snapshot failed")?;
    report::log_markets(&currency, &markets);

    Ok(())
}
