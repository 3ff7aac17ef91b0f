//! DynamoDB request documents for the item operations.
//!
//! All input structs use `PascalCase` JSON field naming to match the DynamoDB
//! wire protocol (`awsJson1_0`). Optional fields are omitted when `None`,
//! flags are omitted when `false` and empty lists are omitted, to produce
//! minimal JSON payloads.

use std::collections::HashMap;

use serde::Serialize;

use crate::attribute_value::AttributeValue;
use crate::types::{AttributeValueUpdate, Condition, Item, ReturnValue, WireKey};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

/// Input for the `PutItem` operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemInput {
    /// The name of the table to put the item into.
    pub table_name: String,

    /// A map of attribute name to attribute value, representing the item.
    pub item: Item,
}

/// Input for the `GetItem` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemInput {
    /// The name of the table containing the item.
    pub table_name: String,

    /// The primary key of the item to retrieve.
    pub key: WireKey,

    /// Use strongly consistent reads.
    #[serde(skip_serializing_if = "is_false")]
    pub consistent_read: bool,

    /// Attribute names to retrieve. Empty means all attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
}

/// Input for the `Query` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInput {
    /// The name of the table to query.
    pub table_name: String,

    /// Hash key value all returned items share.
    pub hash_key_value: AttributeValue,

    /// Maximum number of items to evaluate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Use strongly consistent reads.
    #[serde(skip_serializing_if = "is_false")]
    pub consistent_read: bool,

    /// `false` for descending range key order. Omitted for the ascending default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index_forward: Option<bool>,

    /// Condition on the range key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_key_condition: Option<Condition>,

    /// Key to continue from, taken from a previous `LastEvaluatedKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_key: Option<WireKey>,

    /// Attribute names to retrieve. Empty means all attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
}

/// Input for the `UpdateItem` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemInput {
    /// The name of the table containing the item.
    pub table_name: String,

    /// The primary key of the item to update.
    pub key: WireKey,

    /// Per-attribute update instructions.
    pub attribute_updates: HashMap<String, AttributeValueUpdate>,

    /// Which prior values to echo back.
    pub return_values: ReturnValue,
}

/// Input for the `DeleteItem` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemInput {
    /// The name of the table containing the item.
    pub table_name: String,

    /// The primary key of the item to delete.
    pub key: WireKey,

    /// Which prior values to echo back.
    pub return_values: ReturnValue,
}
