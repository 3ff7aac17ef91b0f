//! DynamoDB shared types: items, keys, update actions and query conditions.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]` to match the DynamoDB API.
//! Enum variants use idiomatic Rust `PascalCase` naming with `#[serde(rename)]`
//! for the `SCREAMING_SNAKE_CASE` wire values.
//!
//! Native counterparts ([`Key`], [`RangeKeyCondition`]) hold [`Value`]s and are
//! turned into their wire forms by [`crate::codec`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::value::Value;

/// Wire item: attribute name to tagged attribute.
pub type Item = HashMap<String, AttributeValue>;

/// Native record: field name to native value.
pub type Record = HashMap<String, Value>;

/// Native per-field update instructions. `None` deletes the field.
pub type Updates = HashMap<String, Option<Value>>;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Native primary key: a hash key and an optional range key.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    /// Hash key element.
    pub hash: Value,
    /// Range key element, for tables with a composite key.
    pub range: Option<Value>,
}

impl Key {
    /// Key for a table with a hash key only.
    #[must_use]
    pub fn hash(hash: impl Into<Value>) -> Self {
        Self {
            hash: hash.into(),
            range: None,
        }
    }

    /// Key for a table with a hash and range key.
    #[must_use]
    pub fn composite(hash: impl Into<Value>, range: impl Into<Value>) -> Self {
        Self {
            hash: hash.into(),
            range: Some(range.into()),
        }
    }
}

/// Wire primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireKey {
    /// Hash key element.
    pub hash_key_element: AttributeValue,
    /// Range key element, omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key_element: Option<AttributeValue>,
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// Action applied to one attribute by `UpdateItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttributeAction {
    /// Replace the attribute value.
    #[default]
    #[serde(rename = "PUT")]
    Put,
    /// Remove the attribute.
    #[serde(rename = "DELETE")]
    Delete,
}

impl AttributeAction {
    /// Returns the DynamoDB wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Wire update instruction for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValueUpdate {
    /// The new value; absent for deletions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    /// What to do with the attribute.
    pub action: AttributeAction,
}

impl AttributeValueUpdate {
    /// Replace the attribute with `value`.
    #[must_use]
    pub fn put(value: AttributeValue) -> Self {
        Self {
            value: Some(value),
            action: AttributeAction::Put,
        }
    }

    /// Remove the attribute.
    #[must_use]
    pub fn delete() -> Self {
        Self {
            value: None,
            action: AttributeAction::Delete,
        }
    }
}

// ---------------------------------------------------------------------------
// Return values
// ---------------------------------------------------------------------------

/// Selects which prior attribute values a mutation echoes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReturnValue {
    /// Returns all attributes of the item as they appeared before the operation.
    #[serde(rename = "ALL_OLD")]
    AllOld,
    /// Returns only the updated attributes as they appeared before the operation.
    #[serde(rename = "UPDATED_OLD")]
    UpdatedOld,
}

impl ReturnValue {
    /// Returns the DynamoDB wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllOld => "ALL_OLD",
            Self::UpdatedOld => "UPDATED_OLD",
        }
    }
}

impl std::fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Range key conditions
// ---------------------------------------------------------------------------

/// Comparison operators accepted in a `RangeKeyCondition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Equal.
    #[serde(rename = "EQ")]
    Eq,
    /// Less than or equal.
    #[serde(rename = "LE")]
    Le,
    /// Less than.
    #[serde(rename = "LT")]
    Lt,
    /// Greater than or equal.
    #[serde(rename = "GE")]
    Ge,
    /// Greater than.
    #[serde(rename = "GT")]
    Gt,
    /// Prefix match.
    #[serde(rename = "BEGINS_WITH")]
    BeginsWith,
    /// Inclusive range.
    #[serde(rename = "BETWEEN")]
    Between,
}

impl ComparisonOperator {
    /// Returns the DynamoDB wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Le => "LE",
            Self::Lt => "LT",
            Self::Ge => "GE",
            Self::Gt => "GT",
            Self::BeginsWith => "BEGINS_WITH",
            Self::Between => "BETWEEN",
        }
    }
}

/// Native condition on the range key of a `Query`.
///
/// The operand count is fixed by the variant, so a malformed
/// `AttributeValueList` cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeKeyCondition {
    /// Range key equals the value.
    Eq(Value),
    /// Range key is less than or equal to the value.
    Le(Value),
    /// Range key is less than the value.
    Lt(Value),
    /// Range key is greater than or equal to the value.
    Ge(Value),
    /// Range key is greater than the value.
    Gt(Value),
    /// Range key starts with the value.
    BeginsWith(Value),
    /// Range key lies between the two values, inclusive.
    Between(Value, Value),
}

impl RangeKeyCondition {
    /// The wire comparison operator for this condition.
    #[must_use]
    pub fn operator(&self) -> ComparisonOperator {
        match self {
            Self::Eq(_) => ComparisonOperator::Eq,
            Self::Le(_) => ComparisonOperator::Le,
            Self::Lt(_) => ComparisonOperator::Lt,
            Self::Ge(_) => ComparisonOperator::Ge,
            Self::Gt(_) => ComparisonOperator::Gt,
            Self::BeginsWith(_) => ComparisonOperator::BeginsWith,
            Self::Between(..) => ComparisonOperator::Between,
        }
    }

    /// The operands in wire order.
    #[must_use]
    pub fn operands(&self) -> Vec<&Value> {
        match self {
            Self::Eq(v)
            | Self::Le(v)
            | Self::Lt(v)
            | Self::Ge(v)
            | Self::Gt(v)
            | Self::BeginsWith(v) => vec![v],
            Self::Between(low, high) => vec![low, high],
        }
    }
}

/// Wire form of a range key condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    /// Operands for the comparison.
    pub attribute_value_list: Vec<AttributeValue>,
    /// The comparison to apply.
    pub comparison_operator: ComparisonOperator,
}
