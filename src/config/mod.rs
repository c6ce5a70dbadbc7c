//! Configuration management module for camply-notify
//!
//! This module provides layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//! - Multiple environment configurations (development, test, staging, production)
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local overrides, including the token stored by `configure`
//! 4. `CAMPLY_*` environment variables
//! 5. `PUSHBULLET_API_TOKEN`

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;
pub mod writer;

// Re-export public types
pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{PushbulletConfig, Settings};
pub use writer::LocalConfigWriter;
