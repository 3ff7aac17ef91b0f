//! DynamoDB model types and attribute codec for Dynamite.
//!
//! This crate holds everything that is pure data transformation:
//!
//! - [`Value`]: the native values callers work with
//! - [`AttributeValue`]: the tagged `{"S": ...}` / `{"N": ...}` / `{"B": ...}` wire form
//! - [`codec`]: conversion between the two, for single values, records, keys and updates
//! - [`input`] / [`output`]: request and response documents per operation
//!
//! Nothing here performs I/O.

pub mod attribute_value;
pub mod codec;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;
pub mod value;

pub use attribute_value::AttributeValue;
pub use error::{CodecError, CodecResult};
pub use operations::DynamoDBOperation;
pub use types::{Item, Key, RangeKeyCondition, Record, Updates};
pub use value::Value;
