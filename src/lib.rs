//! discord-alerts - Discord webhook destination for alert state changes
//!
//! This library turns an alert state transition into a Discord webhook
//! message and delivers it on a best-effort basis: delivery problems are
//! logged, never returned to the caller.

pub mod cli;
pub mod config;
pub mod core;
pub mod destination;
pub mod formatting;
pub mod notification;

// Re-export core types for convenience
pub use crate::core::*;
pub use destination::ConfigurationSchema;
pub use notification::discord::DiscordDestination;
pub use notification::dispatch;
