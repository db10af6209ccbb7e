//! sqs-util: send one message to SQS queue(s) resolved by name.
//!
//! Exit codes: 0 on success, 254 when a lookup or send fails, 255 for a missing
//! or invalid flag.

use clap::Parser;
use sqsutil::{SqsUtilError, error::EXIT_INVALID_ARGUMENT, telemetry};
use sqsutil_client::cli::Cli;
use sqsutil_client::{SqsQueueService, send_to_destinations};
use std::process::ExitCode;
use tracing::debug;

async fn run(cli: Cli) -> Result<(), SqsUtilError> {
    let config = cli.send_config()?;
    debug!(account = %config.account, "using account");
    debug!(destinations = ?config.destinations, "using destination(s)");
    debug!(region = %config.region, "using region");

    debug!(raw = %cli.message, "raw input");
    for (key, value) in sqsutil::parse(&cli.message) {
        debug!("mapped: Key={key},Value={value}");
    }

    let service = SqsQueueService::from_config(&config).await;
    let message = config.message(cli.message);
    send_to_destinations(&service, &config, &message).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_INVALID_ARGUMENT)
            };
        }
    };
    telemetry::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_client_error() => {
            println!("sqs-util: {err}");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            println!("[ERROR]: failed to send: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
