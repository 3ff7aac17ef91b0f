//! DynamoDB response documents for the item operations.
//!
//! All output structs use `PascalCase` JSON field naming to match the DynamoDB
//! wire protocol (`awsJson1_0`). Absent optional members deserialize to `None`.

use serde::Deserialize;

use crate::types::{Item, WireKey};

/// Output shared by `PutItem`, `UpdateItem` and `DeleteItem`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteItemOutput {
    /// Attribute values as they appeared before the operation, present only
    /// when return values were requested.
    #[serde(default)]
    pub attributes: Option<Item>,

    /// The capacity units consumed by the operation.
    #[serde(default)]
    pub consumed_capacity_units: f64,
}

/// Output for the `GetItem` operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemOutput {
    /// The retrieved item. `None` if no item has the requested key.
    #[serde(default)]
    pub item: Option<Item>,

    /// The capacity units consumed by the operation.
    #[serde(default)]
    pub consumed_capacity_units: f64,
}

/// Output for the `Query` operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOutput {
    /// Items matching the query.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Number of items in the response.
    #[serde(default)]
    pub count: u64,

    /// Primary key of the last evaluated item, present when more results remain.
    #[serde(default)]
    pub last_evaluated_key: Option<WireKey>,

    /// The capacity units consumed by the operation.
    #[serde(default)]
    pub consumed_capacity_units: f64,
}
