//! Notification error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while building or delivering a notification.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// The channel is missing required credentials and cannot be used
    #[error("{message}")]
    NotConfigured { message: String },

    /// The service answered with a non-success status
    #[error("Notification delivery failed with status {status}: {body}")]
    Delivery {
        status: StatusCode,
        body: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Option '{key}' is reserved and cannot be used as an extra payload field")]
    ReservedOption { key: String },

    #[error("Header '{name}' is not a valid HTTP header")]
    InvalidHeader { name: String },

    #[error("Notification body cannot be empty")]
    EmptyBody,

    /// Connection, DNS, timeout or other transport-level failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NotificationError {
    /// Create a new not-configured error
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    pub fn invalid_header(name: impl Into<String>) -> Self {
        Self::InvalidHeader { name: name.into() }
    }

    /// Whether the error was produced before any request was sent
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured { .. }
                | Self::InvalidHeader { .. }
                | Self::ReservedOption { .. }
                | Self::EmptyBody
        )
    }
}

pub type NotificationResult<T> = Result<T, NotificationError>;
