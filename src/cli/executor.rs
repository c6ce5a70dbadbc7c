//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use tracing::warn;

use super::handlers::{
    CheckCommandHandler, ConfigureCommandHandler, SendCampsitesCommandHandler,
    TestNotificationCommandHandler,
};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};

/// Execute a CLI command with the given settings
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Commands::Configure {
            pushbullet_token,
            config_dir,
        } => {
            if cli.config.is_some() && config_dir.is_none() {
                warn!("--config loads a single file; the token written to local.toml is not read in that mode");
            }
            ConfigureCommandHandler::new(config_dir.clone())
                .execute(pushbullet_token)
                .await
        }
        Commands::TestNotification {
            message,
            title,
            message_type,
            options,
        } => {
            TestNotificationCommandHandler::new(settings)
                .execute(message, title.as_deref(), message_type.as_deref(), options)
                .await
        }
        Commands::SendCampsites { file } => {
            SendCampsitesCommandHandler::new(settings).execute(file).await
        }
        Commands::Check => CheckCommandHandler::new(settings).execute().await,
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    cli.validate().map_err(|msg| AppError::Validation {
        field: "cli_arguments".to_string(),
        reason: msg,
    })
}
