//! Request body builders, one per operation.
//!
//! Builders are pure: they encode native values through the codec and
//! serialize the resulting request document. Signing and sending happen in
//! [`Table`](crate::Table).

use bytes::Bytes;
use dynamite_model::codec;
use dynamite_model::input::{
    DeleteItemInput, GetItemInput, PutItemInput, QueryInput, UpdateItemInput,
};
use dynamite_model::types::ReturnValue;
use dynamite_model::{DynamoDBOperation, Key, RangeKeyCondition, Record, Updates, Value};
use serde::Serialize;

use crate::error::ClientError;

/// Options for `GetItem`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetItemOptions {
    /// Use strongly consistent reads.
    pub consistent_read: bool,
    /// Attributes to return. Empty returns all of them.
    pub attributes_to_get: Vec<String>,
}

/// Options for `Query`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Maximum number of items to evaluate. `0` leaves it to the service.
    pub limit: u32,
    /// Use strongly consistent reads.
    pub consistent_read: bool,
    /// Return items in descending range key order.
    pub descending: bool,
    /// Condition on the range key.
    pub range_key_condition: Option<RangeKeyCondition>,
    /// Continue after this key, as returned in a previous result's
    /// `last_evaluated_key`.
    pub exclusive_start_key: Option<Key>,
    /// Attributes to return. Empty returns all of them.
    pub attributes_to_get: Vec<String>,
}

/// Body of a `PutItem` request.
pub fn put_item(table: &str, record: &Record) -> Result<Bytes, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::PutItem;
    let input = PutItemInput {
        table_name: table.to_owned(),
        item: codec::encode_item(record).map_err(|e| ClientError::codec(OP, e))?,
    };
    to_body(OP, &input)
}

/// Body of a `GetItem` request.
pub fn get_item(table: &str, key: &Key, options: &GetItemOptions) -> Result<Bytes, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::GetItem;
    let input = GetItemInput {
        table_name: table.to_owned(),
        key: codec::encode_key(key).map_err(|e| ClientError::codec(OP, e))?,
        consistent_read: options.consistent_read,
        attributes_to_get: options.attributes_to_get.clone(),
    };
    to_body(OP, &input)
}

/// Body of a `Query` request for all items sharing `hash_key`.
pub fn query(table: &str, hash_key: &Value, options: &QueryOptions) -> Result<Bytes, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::Query;
    let err = |e| ClientError::codec(OP, e);

    let input = QueryInput {
        table_name: table.to_owned(),
        hash_key_value: codec::encode(hash_key).map_err(err)?,
        limit: (options.limit > 0).then_some(options.limit),
        consistent_read: options.consistent_read,
        scan_index_forward: options.descending.then_some(false),
        range_key_condition: options
            .range_key_condition
            .as_ref()
            .map(codec::encode_condition)
            .transpose()
            .map_err(err)?,
        exclusive_start_key: options
            .exclusive_start_key
            .as_ref()
            .map(codec::encode_key)
            .transpose()
            .map_err(err)?,
        attributes_to_get: options.attributes_to_get.clone(),
    };
    to_body(OP, &input)
}

/// Body of an `UpdateItem` request. `None` updates delete the attribute.
///
/// Prior values of the updated attributes are always requested back.
pub fn update_item(table: &str, key: &Key, updates: &Updates) -> Result<Bytes, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::UpdateItem;
    let err = |e| ClientError::codec(OP, e);

    let input = UpdateItemInput {
        table_name: table.to_owned(),
        key: codec::encode_key(key).map_err(err)?,
        attribute_updates: codec::encode_updates(updates).map_err(err)?,
        return_values: ReturnValue::UpdatedOld,
    };
    to_body(OP, &input)
}

/// Body of a `DeleteItem` request. The deleted item is always requested back.
pub fn delete_item(table: &str, key: &Key) -> Result<Bytes, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::DeleteItem;
    let input = DeleteItemInput {
        table_name: table.to_owned(),
        key: codec::encode_key(key).map_err(|e| ClientError::codec(OP, e))?,
        return_values: ReturnValue::AllOld,
    };
    to_body(OP, &input)
}

fn to_body<T: Serialize>(operation: DynamoDBOperation, input: &T) -> Result<Bytes, ClientError> {
    serde_json::to_vec(input)
        .map(Bytes::from)
        .map_err(|e| ClientError::protocol(operation, e))
}
