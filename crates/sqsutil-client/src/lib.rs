//! sqs-util client library.
//!
//! This crate resolves queue names to queue URLs and delivers messages through
//! a [`QueueService`], with an implementation backed by the AWS SDK for SQS.

pub mod cli;
pub mod sqs;

use async_trait::async_trait;
use sqsutil::{OutgoingMessage, SendConfig, SendReceipt, SqsUtilError};
use tracing::{debug, info};

pub use sqs::SqsQueueService;

/// Remote operations the send flow depends on.
#[async_trait]
pub trait QueueService: Send + Sync {
    /// Resolve a queue name owned by `account` to its queue URL.
    async fn resolve_queue_url(
        &self,
        queue_name: &str,
        account: &str,
    ) -> Result<String, SqsUtilError>;

    /// Deliver `message` to the queue at `queue_url`, returning the message id if
    /// the service reported one.
    async fn send_message(
        &self,
        queue_url: &str,
        message: &OutgoingMessage,
    ) -> Result<Option<String>, SqsUtilError>;
}

/// Resolve and send to every configured destination in order.
///
/// The first failure aborts the run; destinations after it are not attempted.
pub async fn send_to_destinations<S: QueueService + ?Sized>(
    service: &S,
    config: &SendConfig,
    message: &OutgoingMessage,
) -> Result<Vec<SendReceipt>, SqsUtilError> {
    debug!(
        destinations = config.destinations.len(),
        attributes = message.attributes.len(),
        "sending message"
    );

    let mut receipts = Vec::with_capacity(config.destinations.len());
    for queue_name in &config.destinations {
        debug!(queue = %queue_name, account = %config.account, "resolving queue url");
        let queue_url = service
            .resolve_queue_url(queue_name, &config.account)
            .await?;
        debug!(queue = %queue_name, url = %queue_url, "resolved queue url");

        let message_id = service.send_message(&queue_url, message).await?;
        info!(
            queue = %queue_name,
            message_id = message_id.as_deref().unwrap_or("-"),
            "Successfully sent message"
        );

        receipts.push(SendReceipt {
            queue_name: queue_name.clone(),
            queue_url,
            message_id,
        });
    }
    Ok(receipts)
}
