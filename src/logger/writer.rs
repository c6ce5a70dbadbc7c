//! Log file writer

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;

/// Opens the configured log file, creating parent directories as needed
///
/// The returned `Mutex<File>` is a `MakeWriter` for `tracing-subscriber`.
pub fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    if config.path.as_os_str().is_empty() {
        return Err(LoggerError::config("Log file path cannot be empty"));
    }

    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)?;

    Ok(Mutex::new(file))
}
