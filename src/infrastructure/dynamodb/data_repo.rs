use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use std::collections::HashMap;
use tracing::{debug, info, error};
use crate::domain::{error::IngestionError, models::StoredItem, ports::DataRepository};

pub struct DynamoDataRepository {
    client: Client,
}

impl DynamoDataRepository {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// All four attributes are stored as DynamoDB strings.
pub fn item_attributes(item: &StoredItem) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(item.id.clone())),
        ("type".to_string(), AttributeValue::S(item.item_type.clone())),
        ("date".to_string(), AttributeValue::S(item.date.clone())),
        ("data".to_string(), AttributeValue::S(item.data.clone())),
    ])
}

#[async_trait]
impl DataRepository for DynamoDataRepository {
    async fn put_item(&self, target_table: &str, item: &StoredItem) -> Result<(), IngestionError> {
        debug!("Putting item '{}' ({} bytes of data) into table: {}", item.id, item.data.len(), target_table);

        self.client
            .put_item()
            .table_name(target_table)
            .set_item(Some(item_attributes(item)))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to put item '{}' into {}: {}", item.id, target_table, e);
                IngestionError::Database(e.to_string())
            })?;

        info!("Stored item '{}' in table: {}", item.id, target_table);
        Ok(())
    }
}
