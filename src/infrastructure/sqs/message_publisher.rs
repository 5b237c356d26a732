use async_trait::async_trait;
use aws_sdk_sqs::Client;
use tracing::{debug, error};
use crate::domain::{error::IngestionError, ports::MessagePublisher};

pub struct SqsMessagePublisher {
    client: Client,
    queue_url: String,
}

impl SqsMessagePublisher {
    pub fn new(client: Client, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

#[async_trait]
impl MessagePublisher for SqsMessagePublisher {
    async fn publish(&self, body: &str) -> Result<Option<String>, IngestionError> {
        debug!("Sending message to {}: {}", self.queue_url, body);
        let response = self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send message to {}: {}", self.queue_url, e);
                IngestionError::Queue(e.to_string())
            })?;

        Ok(response.message_id().map(str::to_string))
    }
}
