//! Configure command handler
//!
//! Persists the Pushbullet access token into `local.toml`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::LocalConfigWriter;
use crate::config::loader::{CONFIG_DIR_ENV, DEFAULT_CONFIG_DIR};
use crate::error::AppResult;

/// Handler for the configure command
pub struct ConfigureCommandHandler {
    writer: LocalConfigWriter,
}

impl ConfigureCommandHandler {
    /// Create a handler writing into `config_dir`
    ///
    /// Falls back to `CAMPLY_CONFIG_DIR`, then `./config`.
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        let config_dir = config_dir
            .or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            writer: LocalConfigWriter::new(config_dir),
        }
    }

    /// Store the access token
    ///
    /// # Errors
    /// - Configuration errors if the token is blank or the file cannot be written
    pub async fn execute(&self, pushbullet_token: &str) -> AppResult<()> {
        self.writer.set_pushbullet_token(pushbullet_token)?;

        info!(path = %self.writer.path().display(), "Pushbullet access token saved");
        println!(
            "✓ Pushbullet access token saved to {}",
            self.writer.path().display()
        );
        Ok(())
    }

    /// File the token is written to
    pub fn path(&self) -> &Path {
        self.writer.path()
    }
}
