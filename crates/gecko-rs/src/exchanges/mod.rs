//! Exchange listings.

pub mod endpoints;
pub mod models;
