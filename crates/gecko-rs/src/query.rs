//! Query-string encoding shared by every endpoint.
//!
//! Each parameter record implements [`QueryParams`], which validates the record
//! and turns it into the exact key/value pairs the API expects. Encoding either
//! succeeds completely or fails with no partial query.
//!
//! Conventions enforced here:
//! - lists are comma-joined into a single value
//! - booleans are always sent as literal `"true"` / `"false"`
//! - bounded integers reject negatives and values above their ceiling, and
//!   are omitted when zero (the server then applies its default)
//! - required strings reject empty values

use crate::errors::GeckoError;
use std::collections::BTreeMap;


/// Upper bound the API accepts for `per_page`.
pub const MAX_PER_PAGE: i32 = 250;


/// Encoded query: key to value, ordered by key.
pub type Query = BTreeMap<&'static str, String>;


/// A per-endpoint parameter record that knows how to encode itself.
pub trait QueryParams {
    /// Validate the record and produce its query pairs.
    fn to_query(&self) -> Result<Query, GeckoError>;
}


/// Join identifiers with commas, failing when the list is empty.
pub(crate) fn require_list(
    name: &'static str,
    values: &[String],
) -> Result<String, GeckoError> {
    if values.is_empty() || values.iter().all(|v| v.is_empty()) {
        return Err(GeckoError::MissingParameter(name));
    }
    Ok(join_list(values))
}


/// Join identifiers with commas, or `None` when the list is empty and the key
/// should be left out of the query.
pub(crate) fn optional_list(values: &[String]) -> Option<String> {
    if values.iter().all(|v| v.is_empty()) {
        None
    } else {
        Some(join_list(values))
    }
}


fn join_list(values: &[String]) -> String {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}


pub(crate) fn flag(value: bool) -> String {
    value.to_string()
}


pub(crate) fn require_str(name: &'static str, value: &str) -> Result<String, GeckoError> {
    if value.is_empty() {
        return Err(GeckoError::MissingParameter(name));
    }
    Ok(value.to_string())
}


/// Validate a non-negative integer with an optional ceiling.
///
/// Returns `Ok(None)` for zero so the key is omitted.
pub(crate) fn bounded(
    name: &'static str,
    value: i32,
    max: Option<i32>,
) -> Result<Option<String>, GeckoError> {
    if value < 0 {
        return Err(GeckoError::invalid(name, format!("{value} is negative")));
    }
    if let Some(max) = max {
        if value > max {
            return Err(GeckoError::invalid(
                name,
                format!("{value} exceeds maximum of {max}"),
            ));
        }
    }
    Ok((value > 0).then(|| value.to_string()))
}
