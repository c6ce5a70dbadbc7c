//! Notification system with pluggable providers.
//!
//! The core trait `NotificationProvider` describes a notification channel;
//! `PushbulletProvider` is the channel implemented here. Formatting helpers
//! render availability records into message titles and bodies.

mod error;
mod provider;
mod pushbullet_provider;

pub mod formatting;
pub mod notification_service;

pub use error::{NotificationError, NotificationResult};
pub use notification_service::NotificationService;
pub use provider::{
    DEFAULT_MESSAGE_TYPE, DEFAULT_TITLE, MessageOptions, NotificationMessage,
    NotificationProvider, RESERVED_KEYS,
};
pub use pushbullet_provider::{ACCESS_TOKEN_HEADER, PushbulletProvider};
