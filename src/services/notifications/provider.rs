//! Core notification provider trait and types.
//!
//! This module provides the abstraction shared by notification channels,
//! together with the message payload and the per-message options.

use super::error::{NotificationError, NotificationResult};
use crate::models::AvailableCampsite;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

/// Message type used when none is given
pub const DEFAULT_MESSAGE_TYPE: &str = "note";

/// Title used when none is given
pub const DEFAULT_TITLE: &str = "Camply Notification";

/// Payload keys owned by the message itself
pub const RESERVED_KEYS: [&str; 3] = ["type", "title", "body"];

/// Options accompanying a raw message
///
/// `extra` holds additional key/value pairs merged into the outgoing payload.
/// Keys listed in [`RESERVED_KEYS`] are rejected.
///
/// # Example
/// ```ignore
/// let options = MessageOptions::new()
///     .with_title("Campsite found")
///     .with_extra("url", "https://www.recreation.gov")?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MessageOptions {
    message_type: String,
    title: String,
    extra: Map<String, Value>,
}

impl MessageOptions {
    /// Creates options with the default type and title and no extra fields
    pub fn new() -> Self {
        Self {
            message_type: DEFAULT_MESSAGE_TYPE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            extra: Map::new(),
        }
    }

    /// Sets the notification kind (`note`, `link`, ...)
    pub fn with_type(mut self, message_type: impl Into<String>) -> Self {
        self.message_type = message_type.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds an extra payload field
    ///
    /// # Errors
    /// Returns `ReservedOption` if `key` is one of `type`, `title` or `body`
    pub fn with_extra(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> NotificationResult<Self> {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            return Err(NotificationError::ReservedOption { key });
        }
        self.extra.insert(key, value.into());
        Ok(self)
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON payload delivered to a notification service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub title: String,
    pub body: String,
    /// Extra fields, flattened next to `type`, `title` and `body`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NotificationMessage {
    /// Builds a message from a body and its options
    ///
    /// # Errors
    /// Returns `EmptyBody` if `body` is empty
    pub fn new(body: impl Into<String>, options: MessageOptions) -> NotificationResult<Self> {
        let body = body.into();
        if body.is_empty() {
            return Err(NotificationError::EmptyBody);
        }

        Ok(Self {
            message_type: options.message_type,
            title: options.title,
            body,
            extra: options.extra,
        })
    }
}

/// Trait for notification channels (Pushbullet, email, SMS, ...)
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Sends a single message
    ///
    /// # Arguments
    /// * `message` - Message body
    /// * `options` - Type, title and extra payload fields
    ///
    /// # Returns
    /// The raw HTTP response when the service accepted the message
    async fn send_message(
        &self,
        message: &str,
        options: MessageOptions,
    ) -> NotificationResult<reqwest::Response>;

    /// Sends one notification per campsite, in order
    ///
    /// Stops at the first failed delivery and returns its error; campsites
    /// after the failing one are not sent.
    async fn send_campsites(&self, campsites: &[AvailableCampsite]) -> NotificationResult<()>;
}
