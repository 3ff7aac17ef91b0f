//! DynamoDB operation enum.

use std::fmt;

/// API version prefix of the `X-Amz-Target` header.
pub const SERVICE_VERSION: &str = "DynamoDB_20111205";

/// Item operations supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamoDBOperation {
    /// Put (insert or replace) an item.
    PutItem,
    /// Get an item by primary key.
    GetItem,
    /// Query items by hash key and optional range key condition.
    Query,
    /// Update attributes of an item.
    UpdateItem,
    /// Delete an item by primary key.
    DeleteItem,
}

impl DynamoDBOperation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PutItem => "PutItem",
            Self::GetItem => "GetItem",
            Self::Query => "Query",
            Self::UpdateItem => "UpdateItem",
            Self::DeleteItem => "DeleteItem",
        }
    }

    /// Returns the `X-Amz-Target` header value, e.g. `DynamoDB_20111205.PutItem`.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{SERVICE_VERSION}.{}", self.as_str())
    }
}

impl fmt::Display for DynamoDBOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
