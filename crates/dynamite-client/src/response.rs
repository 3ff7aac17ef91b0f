//! Response checks and parsers, one parser per operation.

use bytes::Bytes;
use dynamite_model::codec;
use dynamite_model::output::{GetItemOutput, QueryOutput, WriteItemOutput};
use dynamite_model::{DynamoDBOperation, Item, Key, Record};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Header carrying the CRC32 of the response body.
pub const CRC32_HEADER: &str = "x-amz-crc32";

/// Result of `PutItem`, `UpdateItem` and `DeleteItem`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteItemResult {
    /// Prior attribute values, when the operation returns them.
    pub attributes: Option<Record>,
    /// Capacity units consumed.
    pub consumed_capacity_units: f64,
}

/// Result of `GetItem`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetItemResult {
    /// The item, or `None` if no item has the key.
    pub item: Option<Record>,
    /// Capacity units consumed.
    pub consumed_capacity_units: f64,
}

/// Result of `Query`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Matching items, in range key order.
    pub items: Vec<Record>,
    /// Number of items returned.
    pub count: u64,
    /// Pass as `exclusive_start_key` to fetch the next page. `None` when the
    /// query is complete.
    pub last_evaluated_key: Option<Key>,
    /// Capacity units consumed.
    pub consumed_capacity_units: f64,
}

/// Reject any response other than `200 OK`.
///
/// The body is returned verbatim in the error and never decoded.
pub fn check_status(status: StatusCode, body: &[u8]) -> Result<(), ClientError> {
    if status == StatusCode::OK {
        return Ok(());
    }
    Err(ClientError::Request {
        status,
        body: Bytes::copy_from_slice(body),
    })
}

/// Check the body against the `x-amz-crc32` header, when the service sent one.
pub fn verify_crc32(headers: &HeaderMap, body: &[u8]) -> Result<(), ClientError> {
    let Some(header) = headers.get(CRC32_HEADER) else {
        return Ok(());
    };
    let actual = crc32fast::hash(body);
    let expected = String::from_utf8_lossy(header.as_bytes()).into_owned();
    if expected.trim().parse::<u32>().ok() == Some(actual) {
        Ok(())
    } else {
        Err(ClientError::Checksum { expected, actual })
    }
}

/// Parse a `PutItem` response.
pub fn parse_put_item(body: &[u8]) -> Result<WriteItemResult, ClientError> {
    parse_write(DynamoDBOperation::PutItem, body)
}

/// Parse an `UpdateItem` response.
pub fn parse_update_item(body: &[u8]) -> Result<WriteItemResult, ClientError> {
    parse_write(DynamoDBOperation::UpdateItem, body)
}

/// Parse a `DeleteItem` response.
pub fn parse_delete_item(body: &[u8]) -> Result<WriteItemResult, ClientError> {
    parse_write(DynamoDBOperation::DeleteItem, body)
}

/// Parse a `GetItem` response. A missing `Item` means not found, not an error.
pub fn parse_get_item(body: &[u8]) -> Result<GetItemResult, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::GetItem;
    let output: GetItemOutput = from_body(OP, body)?;
    Ok(GetItemResult {
        item: decode_optional(OP, output.item.as_ref())?,
        consumed_capacity_units: output.consumed_capacity_units,
    })
}

/// Parse a `Query` response.
pub fn parse_query(body: &[u8]) -> Result<QueryResult, ClientError> {
    const OP: DynamoDBOperation = DynamoDBOperation::Query;
    let output: QueryOutput = from_body(OP, body)?;
    let err = |e| ClientError::codec(OP, e);
    Ok(QueryResult {
        items: codec::decode_items(&output.items).map_err(err)?,
        count: output.count,
        last_evaluated_key: output
            .last_evaluated_key
            .as_ref()
            .map(codec::decode_key)
            .transpose()
            .map_err(err)?,
        consumed_capacity_units: output.consumed_capacity_units,
    })
}

fn parse_write(operation: DynamoDBOperation, body: &[u8]) -> Result<WriteItemResult, ClientError> {
    let output: WriteItemOutput = from_body(operation, body)?;
    Ok(WriteItemResult {
        attributes: decode_optional(operation, output.attributes.as_ref())?,
        consumed_capacity_units: output.consumed_capacity_units,
    })
}

fn decode_optional(
    operation: DynamoDBOperation,
    item: Option<&Item>,
) -> Result<Option<Record>, ClientError> {
    item.map(codec::decode_item)
        .transpose()
        .map_err(|e| ClientError::codec(operation, e))
}

fn from_body<T: DeserializeOwned>(
    operation: DynamoDBOperation,
    body: &[u8],
) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|e| ClientError::protocol(operation, e))
}
