//! DynamoDB table client for Dynamite.
//!
//! [`Table`] runs item operations against one table using the
//! `DynamoDB_20111205` JSON protocol. Each call encodes native [`Value`]s with
//! the attribute codec, builds the request document, signs it with SigV4,
//! sends it through a [`Transport`] and decodes the response.
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use dynamite_client::{ClientConfig, GetItemOptions, Key, Table, Value};
//!
//! # async fn run() -> Result<(), dynamite_client::ClientError> {
//! let config = ClientConfig::from_env()?;
//! let users = Table::from_config("users", &config)?;
//!
//! let record = HashMap::from([
//!     ("id".to_owned(), Value::from("u1")),
//!     ("age".to_owned(), Value::from(42)),
//! ]);
//! users.put_item(&record).await?;
//!
//! let found = users.get_item(&Key::hash("u1"), &GetItemOptions::default()).await?;
//! assert!(found.item.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`] - Environment-driven client configuration
//! - [`error`] - Client error type
//! - [`region`] - Region to endpoint table
//! - [`request`] - Request body builders
//! - [`response`] - Status and checksum checks, response parsers
//! - [`table`] - The table client
//! - [`transport`] - Transport trait and `reqwest` implementation

pub mod config;
pub mod error;
pub mod region;
pub mod request;
pub mod response;
pub mod table;
pub mod transport;

pub use config::ClientConfig;
pub use dynamite_auth::Credentials;
pub use dynamite_model::{Key, RangeKeyCondition, Record, Updates, Value};
pub use error::ClientError;
pub use region::Region;
pub use request::{GetItemOptions, QueryOptions};
pub use response::{GetItemResult, QueryResult, WriteItemResult};
pub use table::Table;
pub use transport::{HttpTransport, HttpTransportConfig, Transport};
