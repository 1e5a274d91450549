// src/report.rs
use tracing::info;

use gecko_rs::coins::models::Market;
use gecko_rs::simple::models::SimplePrices;

fn fmt_ts(ts: Option<chrono::DateTime<chrono::Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn log_prices(prices: &SimplePrices) {
    let mut ids: Vec<&String> = prices.prices.keys().collect();
    ids.sort();
    for id in ids {
        let coin = &prices.prices[id];
        let mut currencies: Vec<&String> = coin.currency_prices.keys().collect();
        currencies.sort();
        for currency in currencies {
            let p = &coin.currency_prices[currency];
            info!(
                coin = %id,
                currency = %currency,
                price = p.price,
                market_cap = ?p.market_cap,
                vol_24h = ?p.vol_24h,
                change_24h = ?p.change_24h,
                updated = %fmt_ts(coin.last_updated_at),
                "price"
            );
        }
    }
}

pub fn log_markets(currency: &str, markets: &[Market]) {
    for m in markets {
        info!(
            rank = ?m.market_cap_rank,
            coin = %m.id,
            currency = %currency,
            price = ?m.current_price,
            market_cap = ?m.market_cap,
            change_24h_pct = ?m.price_change_percentage_24h,
            updated = %fmt_ts(m.last_updated),
            "market"
        );
    }
}
