//! Service layer.
//!
//! Services encapsulate the delivery logic used by the CLI handlers.

pub mod notifications;

pub use notifications::NotificationService;
