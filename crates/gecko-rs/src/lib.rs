//! CoinGecko Rust client
//!
//! Typed access to the public CoinGecko market-data API. Each endpoint takes
//! a parameter record that is validated and encoded before any request is
//! made, and returns a decoded, normalized response.
//!
//! # Quick Start
//!
//! ```no_run
//! use gecko_rs::GeckoClient;
//! use gecko_rs::coins::models::{CoinsMarketsParams, MarketOrder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeckoClient::new();
//!
//! let markets = client.get_coins_markets(&CoinsMarketsParams {
//!     vs_currency: "usd".to_string(),
//!     order: Some(MarketOrder::MarketCapDesc),
//!     per_page: 10,
//!     ..Default::default()
//! }).await?;
//!
//! println!("Found {} markets", markets.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`GeckoClient`] - Client with all API endpoint methods
//! - [`GeckoError`] - Validation, transport, HTTP and decode failures
//! - [`QueryParams`] - Encoding contract shared by every parameter record
//!
//! # API Endpoint Modules
//!
//! - [`ping`] - API status
//! - [`simple`] - Simple prices and supported quote currencies
//! - [`coins`] - Coin list, markets, coin detail, charts, OHLC
//! - [`exchanges`] - Exchange listings


// Core modules
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub mod query;          // Query parameter encoding
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod coins;          // Coin catalog, markets, detail, history
pub mod exchanges;      // Exchange listings
pub mod ping;           // API status
pub mod simple;         // Simple price lookups


// Re-exports for convenient access
pub use client::GeckoClient;
pub use errors::GeckoError;
pub use query::QueryParams;
