//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Environment as AppEnvironment;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Pushbullet notifications for camply campsite availability
#[derive(Parser, Debug)]
#[command(name = "camply-notify")]
#[command(about = "Pushbullet notifications for camply campsite availability")]
#[command(long_about = "
camply-notify delivers campsite availability alerts through Pushbullet.
Each available campsite becomes one push whose title names the recreation
area, facility and booking date, and whose body lists every record field.

EXAMPLES:
    # Store the Pushbullet access token in config/local.toml
    camply-notify configure --pushbullet-token o.XXXXXXXXXXXX

    # Send a test push
    camply-notify test-notification

    # Send a custom push with an extra payload field
    camply-notify test-notification --message 'hello' --option url=https://recreation.gov

    # Send one push per campsite from a JSON file
    camply-notify send-campsites --file campsites.json

    # Read campsites from stdin with verbose logging
    cat campsites.json | camply-notify --verbose send-campsites --file -

    # Validate configuration without sending anything
    camply-notify check

The access token may also be supplied through PUSHBULLET_API_TOKEN.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered configuration directory.
    /// The file must exist and be readable.
    ///
    /// Example: --config /etc/camply/camply.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    ///
    /// Available values: development (dev), staging (stage), production (prod), test
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level, including outgoing payloads.
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the Pushbullet access token
    ///
    /// Writes the token into `local.toml` of the configuration directory,
    /// keeping any other settings already in that file.
    ///
    /// Examples:
    ///   camply-notify configure --pushbullet-token o.XXXX
    ///   camply-notify configure --pushbullet-token o.XXXX --config-dir /etc/camply
    Configure {
        /// Pushbullet access token (https://www.pushbullet.com/#settings/account)
        #[arg(long, value_name = "TOKEN", value_parser = super::validation::validate_token)]
        pushbullet_token: String,

        /// Configuration directory to write into
        ///
        /// Default: $CAMPLY_CONFIG_DIR, or ./config
        #[arg(long, value_name = "DIR")]
        config_dir: Option<PathBuf>,
    },

    /// Send a single push through Pushbullet
    ///
    /// Examples:
    ///   camply-notify test-notification
    ///   camply-notify test-notification --title "Hi" --message "Hello there"
    ///   camply-notify test-notification --type link --option url=https://example.com
    TestNotification {
        /// Message body
        #[arg(short, long, default_value = "Your camply notifications are working.")]
        message: String,

        /// Message title
        ///
        /// Default: Camply Notification
        #[arg(short, long)]
        title: Option<String>,

        /// Push type
        ///
        /// Default: note
        #[arg(long = "type", value_name = "TYPE")]
        message_type: Option<String>,

        /// Extra payload field as key=value (repeatable)
        ///
        /// The keys type, title and body are reserved.
        #[arg(short, long = "option", value_name = "KEY=VALUE", value_parser = super::validation::validate_key_value)]
        options: Vec<(String, String)>,
    },

    /// Send one push per available campsite
    ///
    /// Reads a JSON array of campsite records. An empty array sends nothing.
    /// Sending stops at the first failed push.
    ///
    /// Examples:
    ///   camply-notify send-campsites --file campsites.json
    ///   camply-notify send-campsites --file -
    SendCampsites {
        /// JSON file with campsite records, or `-` for stdin
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_campsite_source)]
        file: PathBuf,
    },

    /// Validate configuration and credentials without sending
    Check,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
    #[value(name = "test")]
    Test,
}

impl From<Environment> for AppEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => AppEnvironment::Development,
            Environment::Staging => AppEnvironment::Staging,
            Environment::Production => AppEnvironment::Production,
            Environment::Test => AppEnvironment::Test,
        }
    }
}

impl Cli {
    /// Validate CLI arguments and provide detailed error messages
    ///
    /// Covers cross-argument rules clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet flags".to_string());
        }

        if let Commands::TestNotification { message, .. } = &self.command
            && message.is_empty()
        {
            return Err("Message cannot be empty".to_string());
        }

        Ok(())
    }

    /// Log level implied by the global flags, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
