// src/services/notifier.rs

//! LINE Notify delivery.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::Result;
use crate::models::Config;
use crate::utils::http;

/// How a delivery attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Endpoint accepted the message
    Sent,
    /// No token configured, nothing was sent
    Skipped,
    /// Endpoint answered with a non-200 status
    Rejected { status: u16, body: String },
    /// Request never got a response
    Failed { reason: String },
}

/// Delivers a formatted message to a human-facing channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<DeliveryStatus>;
}

/// Posts messages to LINE Notify.
pub struct LineNotifier {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl LineNotifier {
    pub fn new(client: Client, endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            // Blank tokens count as missing
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Build a notifier from the configuration.
    ///
    /// `token` takes precedence over `notify.token` from the config file.
    pub fn from_config(config: &Config, token: Option<String>) -> Result<Self> {
        let client = http::create_async_client(&config.portal)?;
        let token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| config.notify.token.clone());
        Ok(Self::new(client, config.notify.endpoint.clone(), token))
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    async fn send(&self, message: &str) -> Result<DeliveryStatus> {
        let Some(token) = self.token.as_deref() else {
            log::warn!("LINE_NOTIFY_TOKEN is not set; skipping notification");
            return Ok(DeliveryStatus::Skipped);
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .form(&[("message", message)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            log::info!("LINE notification sent");
            return Ok(DeliveryStatus::Sent);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Failed to read LINE response body: {}", e);
                String::new()
            }
        };
        log::warn!("LINE notification failed: {} - {}", status.as_u16(), body);
        Ok(DeliveryStatus::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_skips_delivery() {
        let notifier = LineNotifier::new(Client::new(), "http://127.0.0.1:9/notify", None);
        assert!(!notifier.has_token());
        assert_eq!(notifier.send("hello").await.unwrap(), DeliveryStatus::Skipped);
    }

    #[tokio::test]
    async fn test_blank_token_skips_delivery() {
        let notifier =
            LineNotifier::new(Client::new(), "http://127.0.0.1:9/notify", Some("  ".into()));
        assert_eq!(notifier.send("hello").await.unwrap(), DeliveryStatus::Skipped);
    }

    #[test]
    fn test_explicit_token_overrides_config() {
        let mut config = Config::default();
        config.notify.token = Some("from-config".to_string());

        let notifier = LineNotifier::from_config(&config, Some("from-flag".into())).unwrap();
        assert_eq!(notifier.token.as_deref(), Some("from-flag"));

        let notifier = LineNotifier::from_config(&config, None).unwrap();
        assert_eq!(notifier.token.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_blank_explicit_token_falls_back_to_config() {
        let mut config = Config::default();
        config.notify.token = Some("from-config".to_string());

        let notifier = LineNotifier::from_config(&config, Some("  ".into())).unwrap();
        assert_eq!(notifier.token.as_deref(), Some("from-config"));

        let notifier = LineNotifier::from_config(&config, Some(String::new())).unwrap();
        assert_eq!(notifier.token.as_deref(), Some("from-config"));
    }
}
