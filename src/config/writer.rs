//! Persisting settings produced by `camply-notify configure`
//!
//! Values are written into `local.toml` inside the configuration directory,
//! the highest-priority file layer. Keys already present in that file are
//! preserved.

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::config::error::ConfigError;

/// File name of the local override layer
pub const LOCAL_CONFIG_FILE: &str = "local.toml";

/// Writer for the local configuration layer
#[derive(Debug, Clone)]
pub struct LocalConfigWriter {
    path: PathBuf,
}

impl LocalConfigWriter {
    /// Create a writer for `<config_dir>/local.toml`
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join(LOCAL_CONFIG_FILE),
        }
    }

    /// Path of the file this writer updates
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store the Pushbullet access token
    ///
    /// # Errors
    /// - `ValidationError` if the token is blank
    /// - `ParseError` if the existing file is not valid TOML
    /// - `WriteError` if the file cannot be written
    pub fn set_pushbullet_token(&self, token: &str) -> Result<(), ConfigError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::validation(
                "pushbullet.api_token",
                "Access token cannot be empty.",
            ));
        }

        self.set_value("pushbullet", "api_token", Value::String(token.to_string()))
    }

    fn set_value(&self, section: &str, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut table = self.read_existing()?;

        let section_table = table
            .entry(section.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        let Value::Table(section_table) = section_table else {
            return Err(ConfigError::ParseError(format!(
                "'{}' in {} is not a table",
                section,
                self.path.display()
            )));
        };
        section_table.insert(key.to_string(), value);

        self.write(&table)
    }

    fn read_existing(&self) -> Result<Table, ConfigError> {
        if !self.path.exists() {
            return Ok(Table::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| ConfigError::write(self.path.display().to_string(), e.to_string()))?;

        toml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write(&self, table: &Table) -> Result<(), ConfigError> {
        let path = self.path.display().to_string();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ConfigError::write(path.clone(), e.to_string()))?;
        }

        let contents =
            toml::to_string_pretty(table).map_err(|e| ConfigError::write(path.clone(), e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| ConfigError::write(path.clone(), e.to_string()))?;

        // The file holds a credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| ConfigError::write(path, e.to_string()))?;
        }

        Ok(())
    }
}
