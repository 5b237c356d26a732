use async_trait::async_trait;
use crate::domain::{
    error::IngestionError,
    models::{RecordBatch, StoredItem},
};

#[async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch_file(&self, bucket: &str, key: &str) -> Result<Vec<u8>, IngestionError>;
}

#[async_trait]
pub trait DataParser: Send + Sync {
    async fn parse(&self, file_bytes: &[u8], file_type: &str) -> Result<RecordBatch, IngestionError>;
}

#[async_trait]
pub trait DataRepository: Send + Sync {
    /// Full overwrite keyed by `item.id`; no conditional check.
    async fn put_item(&self, target_table: &str, item: &StoredItem) -> Result<(), IngestionError>;
}

#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Returns the broker-assigned message id, when one is reported.
    async fn publish(&self, body: &str) -> Result<Option<String>, IngestionError>;
}
