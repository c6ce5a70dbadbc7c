//! Notification service dispatching to configured channels.

use super::error::NotificationResult;
use super::provider::{MessageOptions, NotificationProvider};
use super::pushbullet_provider::PushbulletProvider;
use crate::config::settings::Settings;
use crate::models::AvailableCampsite;
use std::sync::Arc;
use tracing::info;

/// Notification service fanning messages out to every configured channel
///
/// Channels are used in the order they were added. A failure on one channel
/// is returned immediately; later channels are not attempted.
#[derive(Clone, Default)]
pub struct NotificationService {
    providers: Vec<Arc<dyn NotificationProvider>>,
}

impl NotificationService {
    /// Creates an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service holding the Pushbullet channel
    ///
    /// # Errors
    /// Returns `NotConfigured` if the Pushbullet token is missing
    pub fn from_settings(settings: &Settings) -> NotificationResult<Self> {
        let pushbullet = PushbulletProvider::new(&settings.pushbullet)?;
        Ok(Self::new().with_provider(Arc::new(pushbullet)))
    }

    /// Adds a channel
    pub fn with_provider(mut self, provider: Arc<dyn NotificationProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Names of the configured channels, in dispatch order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Sends a raw message through every channel
    pub async fn send_message(&self, message: &str, options: MessageOptions) -> NotificationResult<()> {
        for provider in &self.providers {
            let response = provider.send_message(message, options.clone()).await?;
            info!(
                provider = provider.name(),
                status = %response.status(),
                "Notification sent"
            );
        }
        Ok(())
    }

    /// Sends a campsite batch through every channel
    pub async fn send_campsites(&self, campsites: &[AvailableCampsite]) -> NotificationResult<()> {
        for provider in &self.providers {
            provider.send_campsites(campsites).await?;
        }
        Ok(())
    }
}
