//! Test-notification command handler
//!
//! Sends one raw message through the configured channels.

use tracing::debug;

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::NotificationService;
use crate::services::notifications::MessageOptions;

/// Handler for the test-notification command
pub struct TestNotificationCommandHandler {
    config: Settings,
}

impl TestNotificationCommandHandler {
    /// Create a new test-notification command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Build message options from command arguments
    ///
    /// # Errors
    /// Returns a notification error if an option uses a reserved key
    pub fn build_options(
        title: Option<&str>,
        message_type: Option<&str>,
        options: &[(String, String)],
    ) -> AppResult<MessageOptions> {
        let mut message_options = MessageOptions::new();
        if let Some(title) = title {
            message_options = message_options.with_title(title);
        }
        if let Some(message_type) = message_type {
            message_options = message_options.with_type(message_type);
        }
        for (key, value) in options {
            message_options = message_options.with_extra(key.as_str(), value.as_str())?;
        }
        Ok(message_options)
    }

    /// Send the message
    ///
    /// # Errors
    /// - `NotConfigured` if no access token is set
    /// - Delivery and transport errors from the channel
    pub async fn execute(
        &self,
        message: &str,
        title: Option<&str>,
        message_type: Option<&str>,
        options: &[(String, String)],
    ) -> AppResult<()> {
        let message_options = Self::build_options(title, message_type, options)?;
        let service = NotificationService::from_settings(&self.config)?;

        debug!(providers = ?service.provider_names(), "Sending test notification");
        service.send_message(message, message_options).await?;

        println!(
            "✓ Test notification sent via {}",
            service.provider_names().join(", ")
        );
        Ok(())
    }
}
