//! Builders for the single outbound message a recognized file produces.

use tracing::debug;
use crate::domain::{
    error::IngestionError,
    models::{OutboundMessage, Record, RecordBatch},
};

pub const CUSTOMER_REFERENCE_FIELD: &str = "customer_reference";
pub const ORDER_REFERENCE_FIELD: &str = "order_reference";
pub const TOTAL_AMOUNT_FIELD: &str = "total_amount";

/// Placeholder alert text; the orders branch does not inspect order contents.
pub const ORDER_ALERT_TEXT: &str = "Something went wrong!";

pub fn customer_summary(batch: &RecordBatch) -> Result<OutboundMessage, IngestionError> {
    let first = batch.first()?;
    let customer_reference = required_field(first, 0, CUSTOMER_REFERENCE_FIELD)?;

    let mut total_amount_spent = 0.0;
    for (row, record) in batch.rows().iter().enumerate() {
        let raw = required_field(record, row, TOTAL_AMOUNT_FIELD)?;
        let amount: f64 = raw.trim().parse().map_err(|_| IngestionError::InvalidAmount {
            row,
            value: raw.to_string(),
        })?;
        total_amount_spent += amount;
    }

    debug!(
        "Customer {} summary: {} orders, {} spent",
        customer_reference,
        batch.len(),
        total_amount_spent
    );

    Ok(OutboundMessage::CustomerMessage {
        customer_reference: customer_reference.to_string(),
        number_of_orders: batch.len(),
        total_amount_spent,
    })
}

pub fn order_alert(batch: &RecordBatch) -> Result<OutboundMessage, IngestionError> {
    let first = batch.first()?;
    let order_reference = required_field(first, 0, ORDER_REFERENCE_FIELD)?;

    Ok(OutboundMessage::ErrorMessage {
        customer_reference: None,
        order_reference: order_reference.to_string(),
        message: ORDER_ALERT_TEXT.to_string(),
    })
}

fn required_field<'a>(record: &'a Record, row: usize, field: &str) -> Result<&'a str, IngestionError> {
    record
        .get(field)
        .and_then(|value| value.as_str())
        .ok_or_else(|| IngestionError::MissingField {
            row,
            field: field.to_string(),
        })
}
