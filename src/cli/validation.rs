//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

use crate::services::notifications::RESERVED_KEYS;

/// Path argument meaning "read from standard input"
pub const STDIN_PATH: &str = "-";

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    validate_readable_file(path_str, "Configuration")
}

/// Validate a campsite source: `-` for stdin or a readable file
pub fn validate_campsite_source(path_str: &str) -> Result<PathBuf, String> {
    if path_str == STDIN_PATH {
        return Ok(PathBuf::from(STDIN_PATH));
    }
    validate_readable_file(path_str, "Campsite")
}

fn validate_readable_file(path_str: &str, kind: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("{} file does not exist: '{}'", kind, path_str));
    }

    if !path.is_file() {
        return Err(format!("{} path is not a file: '{}'", kind, path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read {} file '{}': {}",
            kind.to_lowercase(),
            path_str,
            e
        )),
    }
}

/// Validate an access token is not blank
pub fn validate_token(token_str: &str) -> Result<String, String> {
    let token = token_str.trim();

    if token.is_empty() {
        return Err("Access token cannot be empty".to_string());
    }

    if token.chars().any(char::is_whitespace) {
        return Err("Access token cannot contain whitespace".to_string());
    }

    Ok(token.to_string())
}

/// Parse a `key=value` payload option
///
/// The value may itself contain `=`. Keys `type`, `title` and `body` are
/// rejected because they are set from dedicated arguments.
pub fn validate_key_value(option_str: &str) -> Result<(String, String), String> {
    let Some((key, value)) = option_str.split_once('=') else {
        return Err(format!("Option must be in key=value form, got: '{}'", option_str));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Option key cannot be empty: '{}'", option_str));
    }

    if RESERVED_KEYS.contains(&key) {
        return Err(format!(
            "Option key '{}' is reserved; use --{} instead",
            key,
            if key == "body" { "message" } else { key }
        ));
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_file_path_missing() {
        let result = validate_config_file_path("/definitely/not/here.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_config_file_path(dir.path().to_str().unwrap());
        assert!(result.unwrap_err().contains("not a file"));
    }

    #[test]
    fn test_config_file_path_valid() {
        let file = NamedTempFile::new().unwrap();
        let result = validate_config_file_path(file.path().to_str().unwrap());
        assert_eq!(result.unwrap(), file.path());
    }

    #[test]
    fn test_campsite_source_stdin() {
        assert_eq!(validate_campsite_source("-").unwrap(), PathBuf::from("-"));
    }

    #[test]
    fn test_campsite_source_missing() {
        assert!(validate_campsite_source("missing-campsites.json").is_err());
    }

    #[test]
    fn test_token_validation() {
        assert_eq!(validate_token("  o.abc123 ").unwrap(), "o.abc123");

        let invalid_tokens = ["", "   ", "o.abc 123"];
        for token in invalid_tokens {
            assert!(validate_token(token).is_err(), "Token '{}' should be invalid", token);
        }
    }

    #[test]
    fn test_key_value_valid() {
        let cases = [
            ("url=https://example.com", ("url", "https://example.com")),
            ("device_iden=abc", ("device_iden", "abc")),
            ("query=a=b", ("query", "a=b")),
            ("empty=", ("empty", "")),
        ];

        for (input, (key, value)) in cases {
            let parsed = validate_key_value(input).unwrap();
            assert_eq!(parsed, (key.to_string(), value.to_string()), "input: {}", input);
        }
    }

    #[test]
    fn test_key_value_invalid() {
        let invalid = ["no-separator", "=value", "type=link", "title=x", "body=y"];

        for input in invalid {
            assert!(validate_key_value(input).is_err(), "Option '{}' should be invalid", input);
        }
    }
}
