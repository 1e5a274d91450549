//! API status check.

pub mod endpoints;
pub mod models;
