//! Check command handler
//!
//! Validates configuration and constructs the channels without sending.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::NotificationService;

/// Handler for the check command
pub struct CheckCommandHandler {
    config: Settings,
}

impl CheckCommandHandler {
    /// Create a new check command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate the configuration without contacting any service
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - `NotConfigured` if no access token is set
    pub async fn execute(&self) -> AppResult<()> {
        self.config.validate()?;
        println!("✓ Configuration is valid");

        let service = NotificationService::from_settings(&self.config)?;
        println!(
            "✓ Notification channels ready: {}",
            service.provider_names().join(", ")
        );
        println!("✓ Pushbullet endpoint: {}", self.config.pushbullet.api_endpoint);
        println!("✓ Logger level: {}", self.config.logger.level);

        Ok(())
    }
}
