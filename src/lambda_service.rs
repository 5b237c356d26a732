use std::sync::Arc;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{info, error, debug};
use crate::{
    application::ingestion_service::IngestionService,
    config::IngestionConfig,
    domain::models::InvocationSummary,
    infrastructure::{
        s3_adapter::S3Adapter,
        parser_adapter::ParserAdapter,
        dynamodb::data_repo::DynamoDataRepository,
        sqs::message_publisher::SqsMessagePublisher,
    },
};

/// Holds the AWS-backed service for the lifetime of the process.
pub struct LambdaService {
    service: IngestionService,
}

impl LambdaService {
    pub async fn new(config: IngestionConfig) -> Self {
        debug!("Loading AWS configuration");
        let mut aws_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

        // Configure endpoint for LocalStack if AWS_ENDPOINT_URL is set
        if let Some(endpoint_url) = &config.endpoint_url {
            info!("Using custom AWS endpoint: {}", endpoint_url);
            aws_config_builder = aws_config_builder.endpoint_url(endpoint_url);
        }

        let aws_config = aws_config_builder.load().await;
        debug!("AWS region: {:?}", aws_config.region());

        let mut s3_config = aws_sdk_s3::config::Builder::from(&aws_config);
        if config.endpoint_url.is_some() {
            s3_config = s3_config.force_path_style(true);
        }

        let s3_client = aws_sdk_s3::Client::from_conf(s3_config.build());
        let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);
        let sqs_client = aws_sdk_sqs::Client::new(&aws_config);
        debug!("AWS clients initialized");

        info!(
            "Source bucket: {}, table: {}, queue: {}",
            config.bucket_name, config.table_name, config.queue_url
        );

        let service = IngestionService::new(
            Arc::new(S3Adapter::new(s3_client)),
            Arc::new(ParserAdapter::new()),
            Arc::new(DynamoDataRepository::new(dynamo_client)),
            Arc::new(SqsMessagePublisher::new(sqs_client, config.queue_url)),
            config.table_name,
        );

        Self { service }
    }

    pub async fn handle(&self, event: LambdaEvent<S3Event>) -> Result<InvocationSummary, Error> {
        let (payload, context) = event.into_parts();
        info!("Invocation {} received {} records", context.request_id, payload.records.len());

        self.service.process_event(&payload).await
            .map_err(|e| {
                error!("Invocation {} failed: {}", context.request_id, e);
                Error::from(e)
            })
    }
}
