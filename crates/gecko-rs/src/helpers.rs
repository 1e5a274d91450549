use crate::errors::GeckoError;
use crate::query::{Query, QueryParams};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
/// Helper functions for building request URLs, issuing GETs and decoding bodies
use url::Url;


/// Join base URL, path template and encoded query into a single URL.
///
/// Each segment of `path` is appended as-is except `{}`, which is replaced by
/// `id` as one percent-encoded segment.
pub(crate) fn build_url(
    base_url: &str,
    path: &str,
    id: Option<&str>,
    query: Option<&Query>,
) -> Result<Url, GeckoError> {
    let mut url = Url::parse(base_url.trim_end_matches('/'))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
        segments.pop_if_empty();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if segment == "{}" {
                segments.push(path_id(id)?);
            } else {
                segments.push(segment);
            }
        }
    }
    if let Some(query) = query {
        let encoded = serde_urlencoded::to_string(query)
            .map_err(|e| GeckoError::invalid("query", e.to_string()))?;
        // Only set a query if there are actual params to avoid a dangling '?'
        if !encoded.is_empty() {
            url.set_query(Some(&encoded));
        }
    }
    Ok(url)
}


// `.` and `..` would be dropped by the segment encoder
fn path_id(id: Option<&str>) -> Result<&str, GeckoError> {
    match id {
        None | Some("") => Err(GeckoError::MissingParameter("id")),
        Some("." | "..") => Err(GeckoError::invalid("id", "dot segment")),
        Some(id) => Ok(id),
    }
}


/// Validate params, then GET `path` with the encoded query.
///
/// Validation runs first so a bad parameter never reaches the network.
pub(crate) async fn get_with_params<P>(
    http_client: &Client,
    base_url: &str,
    path: &str,
    id: Option<&str>,
    params: &P,
) -> Result<String, GeckoError>
where
    P: QueryParams + ?Sized,
{
    let query = params.to_query()?;
    unauthenticated_get(http_client, base_url, path, id, Some(&query)).await
}


/// Make a GET request against a public endpoint and return the body.
///
/// Transport failures surface as [`GeckoError::RequestError`]; non-2xx
/// statuses as [`GeckoError::HttpStatus`] with the body attached.
pub(crate) async fn unauthenticated_get(
    http_client: &Client,
    base_url: &str,
    path: &str,
    id: Option<&str>,
    query: Option<&Query>,
) -> Result<String, GeckoError> {
    let url = build_url(base_url, path, id, query)?;
    debug!(url = %url, "GET");
    let resp = http_client.get(url.as_str()).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    debug!(status = %status, bytes = body.len(), "response");
    if !status.is_success() {
        warn!(url = %url, status = %status, "request failed");
        return Err(GeckoError::HttpStatus { status, body });
    }
    Ok(body)
}


/// Deserialize a JSON body, recording the path of the first failing field.
pub(crate) fn parse_json<T>(body: &str) -> Result<T, GeckoError>
where
    T: DeserializeOwned,
{
    let de = &mut serde_json::Deserializer::from_str(body);
    let value = serde_path_to_error::deserialize(de)?;
    Ok(value)
}
