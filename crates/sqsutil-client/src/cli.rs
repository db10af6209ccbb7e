//! Command-line flags for the `sqs-util` binary.

use clap::Parser;
use sqsutil::{SendConfig, Settings, SettingsLoader, SqsUtilError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sqs-util",
    version,
    about = "Send a message to an SQS queue resolved by name"
)]
pub struct Cli {
    /// AWS account owning the queue, e.g. --account=123456789012
    #[arg(long)]
    pub account: Option<String>,

    /// AWS region [default: us-east-1]
    #[arg(long)]
    pub region: Option<String>,

    /// Queue name(s), whitespace separated, e.g. "vault-register consul-register"
    #[arg(long)]
    pub destination: Option<String>,

    /// Message body
    #[arg(long, default_value = "")]
    pub message: String,

    /// Message attributes, e.g. 'foo=bar,bar=foo,hello="big world"'
    #[arg(long, value_name = "KEY=VALUE,...")]
    pub attributes: Option<String>,

    /// Delivery delay in seconds [default: 1]
    #[arg(long)]
    pub delay_seconds: Option<i32>,

    /// Override the SQS endpoint, e.g. http://localhost:4566
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Defaults file (YAML or JSON); flags take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The values given on the command line.
    pub fn settings(&self) -> Settings {
        Settings {
            account: self.account.clone(),
            region: self.region.clone(),
            destination: self.destination.clone(),
            endpoint_url: self.endpoint_url.clone(),
            attributes: self.attributes.clone(),
            delay_seconds: self.delay_seconds,
        }
    }

    /// Merge flags over the defaults file (if any) and validate.
    pub fn send_config(&self) -> Result<SendConfig, SqsUtilError> {
        let from_file = match &self.config {
            Some(path) => SettingsLoader::from_path(path)?,
            None => Settings::default(),
        };
        SendConfig::from_settings(self.settings().or(from_file), self.verbose)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
