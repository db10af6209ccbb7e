//! Core types for `sqs-util`: the option-string mini-language, run
//! configuration, error taxonomy and logging setup.

pub mod config;
pub mod error;
pub mod options;
pub mod quote;
pub mod telemetry;

pub use config::{SendConfig, Settings, SettingsLoader};
pub use error::SqsUtilError;
pub use options::{OptionMap, parse, to_option_string, tokenize};

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// MESSAGE TYPES
// =============================================================================

/// A message ready to be handed to the queue service.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub body: String,
    /// Sent as `String` message attributes.
    pub attributes: OptionMap,
    pub delay_seconds: i32,
}

/// Outcome of delivering a message to one destination.
#[derive(Debug, Clone, PartialEq)]
pub struct SendReceipt {
    pub queue_name: String,
    pub queue_url: String,
    pub message_id: Option<String>,
}
