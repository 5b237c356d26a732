use crate::domain::error::IngestionError;

pub const DEFAULT_TABLE_NAME: &str = "customerdata";

/// Settings read once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    pub bucket_name: String,
    pub queue_url: String,
    pub table_name: String,
    /// Custom AWS endpoint, e.g. LocalStack.
    pub endpoint_url: Option<String>,
}

impl IngestionConfig {
    pub fn from_env() -> Result<Self, IngestionError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, IngestionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        // Required values only fail when absent; an empty value is passed through.
        let required = |name: &str| {
            lookup(name)
                .ok_or_else(|| IngestionError::Config(format!("{} environment variable is required", name)))
        };

        Ok(Self {
            bucket_name: required("BUCKET_NAME")?,
            queue_url: required("QUEUE_URL")?,
            table_name: optional("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            endpoint_url: optional("AWS_ENDPOINT_URL"),
        })
    }
}
