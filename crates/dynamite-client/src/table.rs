//! Table client.
//!
//! A [`Table`] binds a table name to a region, credentials and a transport,
//! and runs each item operation end to end: build the body, sign, send,
//! check the response and parse it.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use dynamite_auth::{Credentials, SigningParams, sign_request};
use dynamite_model::{DynamoDBOperation, Key, Record, Updates, Value};
use http::Method;
use http::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::region::Region;
use crate::request::{self, GetItemOptions, QueryOptions};
use crate::response::{self, GetItemResult, QueryResult, WriteItemResult};
use crate::transport::{HttpTransport, Transport};

/// Service name in the credential scope.
pub const SERVICE_NAME: &str = "dynamodb";

/// Content type of every request body.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

const X_AMZ_TARGET: &str = "x-amz-target";

#[derive(Debug)]
struct TableInner<T> {
    name: String,
    region: Region,
    credentials: Credentials,
    transport: T,
}

/// Handle to one DynamoDB table.
///
/// Cloning is cheap and clones share the transport, so one `Table` can serve
/// many concurrent operations.
#[derive(Debug)]
pub struct Table<T = HttpTransport> {
    inner: Arc<TableInner<T>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Table<HttpTransport> {
    /// Create a table client over HTTP from `config`.
    pub fn from_config(
        name: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(config.transport_config())?;
        Ok(Self::new(
            name,
            config.region.clone(),
            config.credentials.clone(),
            transport,
        ))
    }
}

impl<T: Transport> Table<T> {
    /// Create a table client with an explicit transport.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: Region,
        credentials: Credentials,
        transport: T,
    ) -> Self {
        Self {
            inner: Arc::new(TableInner {
                name: name.into(),
                region,
                credentials,
                transport,
            }),
        }
    }

    /// Table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Region the table is addressed in.
    #[must_use]
    pub fn region(&self) -> &Region {
        &self.inner.region
    }

    /// Create or replace an item.
    pub async fn put_item(&self, record: &Record) -> Result<WriteItemResult, ClientError> {
        let body = request::put_item(self.name(), record)?;
        let response = self.execute(DynamoDBOperation::PutItem, body).await?;
        response::parse_put_item(&response)
    }

    /// Fetch an item by key. `item` is `None` if it does not exist.
    pub async fn get_item(
        &self,
        key: &Key,
        options: &GetItemOptions,
    ) -> Result<GetItemResult, ClientError> {
        let body = request::get_item(self.name(), key, options)?;
        let response = self.execute(DynamoDBOperation::GetItem, body).await?;
        response::parse_get_item(&response)
    }

    /// Fetch one page of items sharing `hash_key`.
    pub async fn query(
        &self,
        hash_key: &Value,
        options: &QueryOptions,
    ) -> Result<QueryResult, ClientError> {
        let body = request::query(self.name(), hash_key, options)?;
        let response = self.execute(DynamoDBOperation::Query, body).await?;
        response::parse_query(&response)
    }

    /// Set or delete attributes of an item, returning their prior values.
    pub async fn update_item(
        &self,
        key: &Key,
        updates: &Updates,
    ) -> Result<WriteItemResult, ClientError> {
        let body = request::update_item(self.name(), key, updates)?;
        let response = self.execute(DynamoDBOperation::UpdateItem, body).await?;
        response::parse_update_item(&response)
    }

    /// Delete an item, returning it as it was.
    pub async fn delete_item(&self, key: &Key) -> Result<WriteItemResult, ClientError> {
        let body = request::delete_item(self.name(), key)?;
        let response = self.execute(DynamoDBOperation::DeleteItem, body).await?;
        response::parse_delete_item(&response)
    }

    /// Sign and send `body` as `operation`; return the body of a verified
    /// `200 OK` response.
    async fn execute(
        &self,
        operation: DynamoDBOperation,
        body: Bytes,
    ) -> Result<Bytes, ClientError> {
        let inner = &*self.inner;

        let mut request = http::Request::builder()
            .method(Method::POST)
            .uri(format!("{}/", inner.region.url()))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(X_AMZ_TARGET, operation.target())
            .body(body)?;

        let params = SigningParams {
            credentials: &inner.credentials,
            region: inner.region.name(),
            service: SERVICE_NAME,
            time: Utc::now(),
        };
        let payload = request.body().clone();
        sign_request(&mut request, &payload, &params)?;

        debug!(
            operation = %operation,
            table = %inner.name,
            region = %inner.region,
            "Sending DynamoDB request"
        );

        let (parts, body) = inner.transport.send(request).await?.into_parts();

        debug!(
            operation = %operation,
            table = %inner.name,
            status = parts.status.as_u16(),
            "Received DynamoDB response"
        );

        response::check_status(parts.status, &body)?;
        response::verify_crc32(&parts.headers, &body)?;
        Ok(body)
    }
}
