//! Coin catalog, market snapshots, coin detail and price history.

pub mod endpoints;
pub mod models;
