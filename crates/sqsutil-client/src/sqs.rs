//! [`QueueService`] backed by the AWS SDK for SQS.

use crate::QueueService;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sqs::Client;
use aws_sdk_sqs::config::Region;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::MessageAttributeValue;
use sqsutil::{OutgoingMessage, SendConfig, SqsUtilError};
use tracing::{debug, warn};

const STRING_DATA_TYPE: &str = "String";

#[derive(Debug, Clone)]
pub struct SqsQueueService {
    client: Client,
}

impl SqsQueueService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client for `config.region`, using the default credential chain.
    pub async fn from_config(config: &SendConfig) -> Self {
        debug!(region = %config.region, "creating new session");
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint_url) = &config.endpoint_url {
            debug!(endpoint = %endpoint_url, "using custom endpoint");
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl QueueService for SqsQueueService {
    async fn resolve_queue_url(
        &self,
        queue_name: &str,
        account: &str,
    ) -> Result<String, SqsUtilError> {
        let output = self
            .client
            .get_queue_url()
            .queue_name(queue_name)
            .queue_owner_aws_account_id(account)
            .send()
            .await
            .map_err(|e| SqsUtilError::from_lookup_error(DisplayErrorContext(&e), queue_name))?;

        output.queue_url().map(str::to_string).ok_or_else(|| {
            SqsUtilError::from_lookup_error("response did not include a queue url", queue_name)
        })
    }

    async fn send_message(
        &self,
        queue_url: &str,
        message: &OutgoingMessage,
    ) -> Result<Option<String>, SqsUtilError> {
        let mut request = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(&message.body)
            .delay_seconds(message.delay_seconds);

        for (name, value) in &message.attributes {
            if name.is_empty() {
                warn!("skipping message attribute with an empty name");
                continue;
            }
            let attribute = MessageAttributeValue::builder()
                .data_type(STRING_DATA_TYPE)
                .string_value(value)
                .build()
                .map_err(|e| SqsUtilError::from_send_error(e, queue_url))?;
            request = request.message_attributes(name, attribute);
        }

        let output = request
            .send()
            .await
            .map_err(|e| SqsUtilError::from_send_error(DisplayErrorContext(&e), queue_url))?;
        debug!(response = ?output, "send message response");

        Ok(output.message_id().map(str::to_string))
    }
}
