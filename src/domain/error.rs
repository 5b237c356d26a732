use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Invalid object name '{0}': expected <type>_<YYYYMMDD>.csv")]
    InvalidFileName(String),

    #[error("Invalid date token '{0}': expected YYYYMMDD")]
    InvalidDate(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported file type: '{0}'")]
    UnsupportedFileType(String),

    #[error("Record batch is empty")]
    EmptyBatch,

    #[error("Row {row} has no value for field '{field}'")]
    MissingField { row: usize, field: String },

    #[error("Row {row} has a non-numeric amount: '{value}'")]
    InvalidAmount { row: usize, value: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Queue error: {0}")]
    Queue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
