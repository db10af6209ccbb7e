//! Run configuration.
//!
//! Values come from three layers: command-line flags, an optional defaults file
//! (YAML or JSON) and built-in defaults. [`Settings`] holds one layer;
//! [`SendConfig`] is the validated result handed to the send flow.

use crate::error::SqsUtilError;
use crate::options::{self, OptionMap};
use crate::OutgoingMessage;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_DELAY_SECONDS: i32 = 1;
/// Upper bound SQS accepts for a per-message delay.
pub const MAX_DELAY_SECONDS: i32 = 900;
pub const MIN_ACCOUNT_LEN: usize = 12;
pub const MIN_DESTINATION_LEN: usize = 3;

/// One layer of optional settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub account: Option<String>,
    pub region: Option<String>,
    /// One or more queue names separated by whitespace.
    pub destination: Option<String>,
    pub endpoint_url: Option<String>,
    /// Message attributes as an option string.
    pub attributes: Option<String>,
    pub delay_seconds: Option<i32>,
}

impl Settings {
    /// Fill every unset field of `self` from `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            account: self.account.or(fallback.account),
            region: self.region.or(fallback.region),
            destination: self.destination.or(fallback.destination),
            endpoint_url: self.endpoint_url.or(fallback.endpoint_url),
            attributes: self.attributes.or(fallback.attributes),
            delay_seconds: self.delay_seconds.or(fallback.delay_seconds),
        }
    }
}

/// Defaults file loader.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a file path.
    /// Supports both JSON (.json) and YAML (.yaml/.yml) formats based on file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Settings, SqsUtilError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SqsUtilError::from_io_error(e, "config loading"))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(&content)
                .map_err(|e| SqsUtilError::from_parse_error(e, "JSON config parsing")),
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| SqsUtilError::from_parse_error(e, "YAML config parsing")),
            _ => serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| {
                    SqsUtilError::from_parse_error(e, "config parsing (tried both JSON and YAML)")
                }),
        }
    }
}

/// Validated configuration for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct SendConfig {
    /// Owner account of the destination queues.
    pub account: String,
    pub region: String,
    pub destinations: Vec<String>,
    pub endpoint_url: Option<String>,
    pub attributes: OptionMap,
    pub delay_seconds: i32,
    pub verbose: bool,
}

impl SendConfig {
    pub fn from_settings(settings: Settings, verbose: bool) -> Result<Self, SqsUtilError> {
        let account = settings.account.unwrap_or_default();
        if account.len() < MIN_ACCOUNT_LEN {
            return Err(SqsUtilError::invalid_argument(
                "account length",
                format!("--account='123456789012', received: '{account}'"),
            ));
        }

        let destination = settings.destination.unwrap_or_default();
        let destinations = options::tokenize(&destination);
        if destination.len() < MIN_DESTINATION_LEN || destinations.is_empty() {
            return Err(SqsUtilError::invalid_argument(
                "destination(s)",
                format!("--destination='some-fancy-queue..', received: '{destination}'"),
            ));
        }

        let region = settings
            .region
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        if region.trim().is_empty() {
            return Err(SqsUtilError::invalid_argument(
                "region",
                "--region=us-east-1, received an empty value",
            ));
        }

        let delay_seconds = settings.delay_seconds.unwrap_or(DEFAULT_DELAY_SECONDS);
        if !(0..=MAX_DELAY_SECONDS).contains(&delay_seconds) {
            return Err(SqsUtilError::invalid_argument(
                "delay-seconds",
                format!("expected 0..={MAX_DELAY_SECONDS}, received: {delay_seconds}"),
            ));
        }

        Ok(Self {
            account,
            region,
            destinations,
            endpoint_url: settings.endpoint_url.filter(|url| !url.is_empty()),
            attributes: options::parse(settings.attributes.as_deref().unwrap_or("")),
            delay_seconds,
            verbose,
        })
    }

    pub fn message(&self, body: impl Into<String>) -> OutgoingMessage {
        OutgoingMessage {
            body: body.into(),
            attributes: self.attributes.clone(),
            delay_seconds: self.delay_seconds,
        }
    }
}
