use async_trait::async_trait;
use aws_sdk_s3::Client;
use tracing::{debug, error};
use crate::domain::{error::IngestionError, ports::FileFetcher};

pub struct S3Adapter {
    client: Client,
}

impl S3Adapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FileFetcher for S3Adapter {
    async fn fetch_file(&self, bucket: &str, key: &str) -> Result<Vec<u8>, IngestionError> {
        debug!("GetObject s3://{}/{}", bucket, key);
        let response = self.client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to get object s3://{}/{}: {}", bucket, key, e);
                IngestionError::Storage(e.to_string())
            })?;

        let collected = response.body.collect().await
            .map_err(|e| {
                error!("Failed to read body of s3://{}/{}: {}", bucket, key, e);
                IngestionError::Storage(e.to_string())
            })?;

        Ok(collected.into_bytes().to_vec())
    }
}
