//! camply-notify
//!
//! Pushbullet notification channel for camply campsite availability alerts.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
