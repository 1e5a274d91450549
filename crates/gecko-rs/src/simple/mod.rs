//! Simple price lookups and supported quote currencies.

pub mod endpoints;
pub mod models;
