// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::PortalConfig;

/// Create a configured asynchronous HTTP client.
///
/// The timeout bounds every request made with this client, the portal fetch
/// and the notification POST alike.
pub fn create_async_client(config: &PortalConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
