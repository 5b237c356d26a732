use async_trait::async_trait;
use tracing::{debug, warn};
use crate::{
    domain::{error::IngestionError, models::RecordBatch, ports::DataParser},
    infrastructure::parsers::csv_parser,
};

pub struct ParserAdapter;

impl ParserAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParserAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataParser for ParserAdapter {
    async fn parse(&self, file_bytes: &[u8], file_type: &str) -> Result<RecordBatch, IngestionError> {
        debug!("Selecting parser for file type '{}'", file_type);
        match file_type {
            "csv" => csv_parser::parse_csv(file_bytes),
            other => {
                warn!("No parser registered for file type '{}'", other);
                Err(IngestionError::UnsupportedFileType(other.to_string()))
            }
        }
    }
}
