//! Pushbullet notification provider implementation.
//!
//! Pushes notes to every device registered on a Pushbullet account.
//! Uses the global `HTTP_CLIENT` for connection pooling and efficiency.
//!
//! Pushbullet API Reference: https://docs.pushbullet.com/#create-push

use super::error::{NotificationError, NotificationResult};
use super::formatting::{compose_campsite_body, compose_campsite_title};
use super::provider::{
    DEFAULT_MESSAGE_TYPE, MessageOptions, NotificationMessage, NotificationProvider,
};
use crate::config::PushbulletConfig;
use crate::external::client::HTTP_CLIENT;
use crate::models::AvailableCampsite;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use tracing::{debug, error, info, warn};

/// Header carrying the account access token
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

const NOT_CONFIGURED_MESSAGE: &str = "Pushbullet is not configured properly. To send Pushbullet \
     messages make sure to run `camply-notify configure` or set the proper environment \
     variable: `PUSHBULLET_API_TOKEN`.";

/// Pushbullet notification provider
///
/// Construction only validates the configuration; no request is made until a
/// message is sent.
///
/// # Example
/// ```ignore
/// let provider = PushbulletProvider::new(&settings.pushbullet)?;
/// provider.send_message("hello", MessageOptions::new()).await?;
/// ```
#[derive(Clone)]
pub struct PushbulletProvider {
    endpoint: String,
    /// Base headers with `Access-Token` merged in; names compare case-insensitively
    headers: HeaderMap,
}

impl PushbulletProvider {
    /// Creates a new provider from configuration
    ///
    /// # Errors
    /// - `NotConfigured` when the access token is missing or blank
    /// - `InvalidHeader` when a base header or the token is not a valid HTTP header
    pub fn new(config: &PushbulletConfig) -> NotificationResult<Self> {
        if !config.is_configured() {
            error!("{}", NOT_CONFIGURED_MESSAGE);
            return Err(NotificationError::not_configured(NOT_CONFIGURED_MESSAGE));
        }

        Ok(Self {
            endpoint: config.api_endpoint.clone(),
            headers: request_headers(config)?,
        })
    }

    /// Endpoint the provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Base headers merged with the access token
///
/// `insert` replaces any base entry named `Access-Token` in whatever casing.
fn request_headers(config: &PushbulletConfig) -> NotificationResult<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(config.headers.len() + 1);
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| NotificationError::invalid_header(name))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| NotificationError::invalid_header(name))?;
        headers.insert(header_name, header_value);
    }

    let mut token = HeaderValue::from_str(&config.api_token)
        .map_err(|_| NotificationError::invalid_header(ACCESS_TOKEN_HEADER))?;
    token.set_sensitive(true);
    headers.insert(HeaderName::from_static("access-token"), token);

    Ok(headers)
}

impl fmt::Debug for PushbulletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.keys().map(HeaderName::as_str).collect();
        f.debug_struct("PushbulletProvider")
            .field("api_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("headers", &header_names)
            .finish()
    }
}

impl fmt::Display for PushbulletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<PushbulletNotifications>")
    }
}

#[async_trait]
impl NotificationProvider for PushbulletProvider {
    fn name(&self) -> &'static str {
        "pushbullet"
    }

    /// Sends a push via Pushbullet
    ///
    /// # Errors
    /// - `EmptyBody` for an empty message
    /// - `Delivery` when Pushbullet answers with a non-success status
    /// - `Transport` when the request could not be completed
    async fn send_message(
        &self,
        message: &str,
        options: MessageOptions,
    ) -> NotificationResult<reqwest::Response> {
        let payload = NotificationMessage::new(message, options)?;
        debug!(
            provider = self.name(),
            payload = %serde_json::to_string(&payload).unwrap_or_default(),
            "Sending notification"
        );

        // Headers go first so `json()` does not add a second Content-Type
        let response = HTTP_CLIENT
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&payload)
            .send()
            .await
            .inspect_err(|e| {
                warn!(provider = self.name(), error = %e, "Request to Pushbullet failed");
            })?;

        if let Err(source) = response.error_for_status_ref().map(|_| ()) {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(
                provider = self.name(),
                %status,
                "Notifications weren't able to be sent to Pushbullet. \
                 Your configuration might be incorrect."
            );
            return Err(NotificationError::Delivery {
                status,
                body,
                source,
            });
        }

        Ok(response)
    }

    async fn send_campsites(&self, campsites: &[AvailableCampsite]) -> NotificationResult<()> {
        for campsite in campsites {
            let options = MessageOptions::new()
                .with_type(DEFAULT_MESSAGE_TYPE)
                .with_title(compose_campsite_title(campsite));
            self.send_message(&compose_campsite_body(campsite), options)
                .await?;
        }

        if !campsites.is_empty() {
            info!(
                provider = self.name(),
                count = campsites.len(),
                "Campsite notifications sent"
            );
        }

        Ok(())
    }
}
