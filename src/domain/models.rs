use aws_lambda_events::event::s3::S3EventRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::domain::error::IngestionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToProcess {
    pub bucket: String,
    pub key: String,
}

impl FileToProcess {
    pub fn is_csv(&self) -> bool {
        self.key.ends_with(".csv")
    }
}

impl TryFrom<&S3EventRecord> for FileToProcess {
    type Error = IngestionError;

    fn try_from(record: &S3EventRecord) -> Result<Self, Self::Error> {
        let bucket = record.s3.bucket.name.clone()
            .ok_or_else(|| IngestionError::InvalidEvent("record has no bucket name".to_string()))?;
        let key = record.s3.object.key.clone()
            .ok_or_else(|| IngestionError::InvalidEvent(format!("record for bucket {} has no object key", bucket)))?;
        Ok(Self { bucket, key })
    }
}

/// Filename convention `<type>_<YYYYMMDD>.csv`, taken from the last path segment of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName {
    pub file_name: String,
    pub type_tag: String,
    pub date_token: String,
}

impl ObjectName {
    pub fn parse(key: &str) -> Result<Self, IngestionError> {
        let file_name = key.rsplit('/').next().unwrap_or(key);
        let stem = file_name.split('.').next().unwrap_or(file_name);

        let mut tokens = stem.split('_');
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(type_tag), Some(date_token), None) => Ok(Self {
                file_name: file_name.to_string(),
                type_tag: type_tag.to_string(),
                date_token: date_token.to_string(),
            }),
            _ => Err(IngestionError::InvalidFileName(file_name.to_string())),
        }
    }

    /// Reformats the compact `YYYYMMDD` token as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> Result<String, IngestionError> {
        let token = self.date_token.as_str();
        if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IngestionError::InvalidDate(token.to_string()));
        }

        NaiveDate::parse_from_str(token, "%Y%m%d")
            .map(|date| date.format("%Y-%m-%d").to_string())
            .map_err(|_| IngestionError::InvalidDate(token.to_string()))
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::from_tag(&self.type_tag)
    }
}

/// Downstream behaviour selected by the type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Customers,
    Orders,
    Unrecognized,
}

impl RecordKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "customers" => RecordKind::Customers,
            "orders" => RecordKind::Orders,
            _ => RecordKind::Unrecognized,
        }
    }
}

/// One CSV row: header name to string value, in header order.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordBatch {
    rows: Vec<Record>,
}

impl RecordBatch {
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row stands in for the whole batch's reference fields.
    pub fn first(&self) -> Result<&Record, IngestionError> {
        self.rows.first().ok_or(IngestionError::EmptyBatch)
    }

    pub fn to_json(&self) -> Result<String, IngestionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self, IngestionError> {
        Ok(serde_json::from_str(data)?)
    }
}

/// The normalized row written to the table, one per object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub date: String,
    pub data: String,
}

impl StoredItem {
    pub fn build(name: &ObjectName, batch: &RecordBatch) -> Result<Self, IngestionError> {
        Ok(Self {
            id: name.file_name.clone(),
            item_type: name.type_tag.clone(),
            date: name.iso_date()?,
            data: batch.to_json()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    CustomerMessage {
        customer_reference: String,
        number_of_orders: usize,
        total_amount_spent: f64,
    },
    ErrorMessage {
        customer_reference: Option<String>,
        order_reference: String,
        message: String,
    },
}

impl OutboundMessage {
    pub fn to_body(&self) -> Result<String, IngestionError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result reported back to the runtime for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub messages_sent: usize,
}
