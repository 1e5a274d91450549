//! Ping module models.

use derive_more::Display;
use serde::{Deserialize, Serialize};


/// Response from `GET /ping`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("{}", gecko_says)]
pub struct Ping {
    pub gecko_says: String,
}
