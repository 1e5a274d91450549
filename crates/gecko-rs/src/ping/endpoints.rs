//! Ping module endpoints.

use crate::client::GeckoClient;
use crate::errors::GeckoError;
use crate::helpers::parse_json;
use crate::ping::models::Ping;


const PING: &str = "/ping";


impl GeckoClient {
    /// Check API server status.
    ///
    /// **Endpoint:** `GET /ping`
    ///
    /// # Returns
    /// [`Ping`] carrying the server's health marker string
    pub async fn ping(&self) -> Result<Ping, GeckoError> {
        let resp = self.get(PING).await?;
        parse_json(&resp)
    }
}
