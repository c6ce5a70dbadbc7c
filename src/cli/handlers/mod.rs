//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod check;
pub mod configure;
pub mod send_campsites;
pub mod test_notification;

pub use check::CheckCommandHandler;
pub use configure::ConfigureCommandHandler;
pub use send_campsites::SendCampsitesCommandHandler;
pub use test_notification::TestNotificationCommandHandler;
