//! Send-campsites command handler
//!
//! Reads availability records as JSON and sends one push per record.

use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::info;

use crate::cli::validation::STDIN_PATH;
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::models::AvailableCampsite;
use crate::services::NotificationService;

/// Handler for the send-campsites command
pub struct SendCampsitesCommandHandler {
    config: Settings,
}

impl SendCampsitesCommandHandler {
    /// Create a new send-campsites command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Send every record read from `source`
    ///
    /// # Errors
    /// - I/O errors reading the source
    /// - `Validation` if the input is not a JSON array of campsites
    /// - Notification errors; sending stops at the first failure
    pub async fn execute(&self, source: &Path) -> AppResult<()> {
        let campsites = read_campsites(source).await?;
        let service = NotificationService::from_settings(&self.config)?;

        info!(count = campsites.len(), "Sending campsite notifications");
        service.send_campsites(&campsites).await?;

        println!("✓ Sent {} campsite notification(s)", campsites.len());
        Ok(())
    }
}

/// Read and parse campsite records from a file, or stdin for `-`
pub async fn read_campsites(source: &Path) -> AppResult<Vec<AvailableCampsite>> {
    let contents = if source == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .map_err(|e| AppError::io(source, e))?;
        buffer
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| AppError::io(source, e))?
    };

    parse_campsites(&contents)
}

/// Parse a JSON array of campsite records
pub fn parse_campsites(contents: &str) -> AppResult<Vec<AvailableCampsite>> {
    serde_json::from_str(contents).map_err(|e| AppError::Validation {
        field: "campsites".to_string(),
        reason: e.to_string(),
    })
}
