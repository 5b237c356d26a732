use std::sync::Arc;
use aws_lambda_events::event::s3::S3Event;
use tracing::{info, debug, error, warn};
use crate::domain::{
    error::IngestionError,
    models::{FileToProcess, InvocationSummary, ObjectName, RecordBatch, RecordKind, StoredItem},
    ports::{FileFetcher, DataParser, DataRepository, MessagePublisher},
    summary,
};

/// What happened to one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Skipped,
    Stored { message_sent: bool },
}

pub struct IngestionService {
    file_fetcher: Arc<dyn FileFetcher>,
    data_parser: Arc<dyn DataParser>,
    data_repo: Arc<dyn DataRepository>,
    publisher: Arc<dyn MessagePublisher>,
    target_table: String,
}

impl IngestionService {
    pub fn new(
        file_fetcher: Arc<dyn FileFetcher>,
        data_parser: Arc<dyn DataParser>,
        data_repo: Arc<dyn DataRepository>,
        publisher: Arc<dyn MessagePublisher>,
        target_table: String,
    ) -> Self {
        Self {
            file_fetcher,
            data_parser,
            data_repo,
            publisher,
            target_table,
        }
    }

    /// Processes the records in order. The first failure aborts the rest of the batch.
    pub async fn process_event(&self, event: &S3Event) -> Result<InvocationSummary, IngestionError> {
        info!("Processing {} S3 records", event.records.len());

        let mut summary = InvocationSummary::default();
        for (i, record) in event.records.iter().enumerate() {
            debug!("Processing S3 record {} of {}", i + 1, event.records.len());

            let file = FileToProcess::try_from(record)
                .map_err(|e| {
                    error!("Malformed S3 record {}: {}", i + 1, e);
                    e
                })?;

            match self.process_file(file).await? {
                FileOutcome::Skipped => summary.files_skipped += 1,
                FileOutcome::Stored { message_sent } => {
                    summary.files_processed += 1;
                    if message_sent {
                        summary.messages_sent += 1;
                    }
                }
            }
        }

        info!(
            "Event complete: {} processed, {} skipped, {} messages sent",
            summary.files_processed, summary.files_skipped, summary.messages_sent
        );
        Ok(summary)
    }

    pub async fn process_file(&self, file: FileToProcess) -> Result<FileOutcome, IngestionError> {
        info!("Starting file processing: s3://{}/{}", file.bucket, file.key);

        // Step 1: Only CSV objects are ingested
        if !file.is_csv() {
            warn!("Skipping non-CSV object: {}", file.key);
            return Ok(FileOutcome::Skipped);
        }

        // Step 2: Derive type tag and date token from the file name
        let name = ObjectName::parse(&file.key)
            .map_err(|e| {
                error!("Failed to parse object name {}: {}", file.key, e);
                e
            })?;
        debug!("Step 2: type tag '{}', date token '{}'", name.type_tag, name.date_token);

        // Step 3: Fetch file from S3
        debug!("Step 3: Fetching file from S3: {}/{}", file.bucket, file.key);
        let file_bytes = self.file_fetcher.fetch_file(&file.bucket, &file.key).await
            .map_err(|e| {
                error!("Failed to fetch file {}/{}: {}", file.bucket, file.key, e);
                e
            })?;
        info!("Successfully fetched file, size: {} bytes", file_bytes.len());

        // Step 4: Parse file content
        let file_type = self.extract_file_type(&file.key);
        debug!("Step 4: Parsing file content with type: {}", file_type);
        let batch = self.data_parser.parse(&file_bytes, &file_type).await
            .map_err(|e| {
                error!("Failed to parse file {}: {}", file.key, e);
                e
            })?;
        info!("Successfully parsed {} records from file", batch.len());

        // Step 5: Build the stored item, reformatting the date
        let item = StoredItem::build(&name, &batch)
            .map_err(|e| {
                error!("Failed to build item for {}: {}", file.key, e);
                e
            })?;
        debug!("Step 5: Built item id='{}', type='{}', date='{}'", item.id, item.item_type, item.date);

        // Step 6: Persist, overwriting any previous item with the same id
        self.data_repo.put_item(&self.target_table, &item).await
            .map_err(|e| {
                error!("Failed to store item for {}: {}", file.key, e);
                e
            })?;

        // Step 7: Emit the summary or alert for recognized types
        let message_sent = self.notify(&name, &item).await
            .map_err(|e| {
                error!("Failed to notify for {}: {}", file.key, e);
                e
            })?;

        info!("✅ Successfully processed file {}/{} into {}", file.bucket, file.key, self.target_table);
        Ok(FileOutcome::Stored { message_sent })
    }

    async fn notify(&self, name: &ObjectName, item: &StoredItem) -> Result<bool, IngestionError> {
        let message = match name.kind() {
            RecordKind::Customers => summary::customer_summary(&RecordBatch::from_json(&item.data)?)?,
            RecordKind::Orders => summary::order_alert(&RecordBatch::from_json(&item.data)?)?,
            RecordKind::Unrecognized => {
                debug!("No message for type tag '{}'", name.type_tag);
                return Ok(false);
            }
        };

        let body = message.to_body()?;
        let message_id = self.publisher.publish(&body).await?;
        info!("Sent {} message for {} (message id: {:?})", name.type_tag, item.id, message_id);
        Ok(true)
    }

    fn extract_file_type(&self, key: &str) -> String {
        let file_type = key.split('.').last().unwrap_or("").to_lowercase();
        debug!("Extracted file type '{}' from key: {}", file_type, key);
        file_type
    }
}
