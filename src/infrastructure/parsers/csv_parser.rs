use csv::ReaderBuilder;
use serde_json::{Map, Value};
use std::io::Cursor;
use tracing::{debug, info, error};
use crate::domain::{error::IngestionError, models::RecordBatch};

/// Key that collects fields beyond the header width.
pub const OVERFLOW_KEY: &str = "null";

/// Header row supplies the field names; every value stays a string.
/// Short rows get `null` for the missing columns and extra fields are
/// gathered into a list under [`OVERFLOW_KEY`].
pub fn parse_csv(bytes: &[u8]) -> Result<RecordBatch, IngestionError> {
    debug!("Creating CSV reader with headers enabled");
    let cursor = Cursor::new(bytes);
    let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(cursor);

    let headers = reader.headers()
        .map_err(|e| {
            error!("Failed to read CSV headers: {}", e);
            IngestionError::Parse(e.to_string())
        })?.clone();

    debug!("CSV headers: {:?}", headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            error!("Failed to read CSV record at row {}: {}", rows.len() + 1, e);
            IngestionError::Parse(e.to_string())
        })?;

        let mut row: Map<String, Value> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = record.get(i).map_or(Value::Null, |field| Value::String(field.to_string()));
                (header.to_string(), value)
            })
            .collect();

        if record.len() > headers.len() {
            debug!("Row {} has {} fields for {} columns", rows.len() + 1, record.len(), headers.len());
            let overflow = record
                .iter()
                .skip(headers.len())
                .map(|field| Value::String(field.to_string()))
                .collect();
            row.insert(OVERFLOW_KEY.to_string(), Value::Array(overflow));
        }
        rows.push(row);
    }

    info!("Parsed {} rows across {} columns", rows.len(), headers.len());
    Ok(RecordBatch::new(rows))
}
