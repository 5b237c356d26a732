use aws_lambda_events::event::s3::S3Event;
use csv_ingestion::{config::IngestionConfig, lambda_service::LambdaService};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("csv_ingestion=debug".parse()?)
            .add_directive("aws_sdk=warn".parse()?)
            .add_directive("aws_smithy_runtime=warn".parse()?))
        .with_target(false)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting CSV ingestion function");

    let config = IngestionConfig::from_env()
        .map_err(|e| {
            error!("Invalid configuration: {}", e);
            e
        })?;

    let service = LambdaService::new(config).await;
    info!("Lambda service initialized successfully");

    let service = &service;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        service.handle(event).await
    }))
    .await
}
