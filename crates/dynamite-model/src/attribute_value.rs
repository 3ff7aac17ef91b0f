//! DynamoDB `AttributeValue` wire type with custom serialization.
//!
//! `AttributeValue` is a tagged union where exactly one tag is present.
//! The JSON wire format uses single-key objects like `{"S": "hello"}`.
//! This client speaks the scalar subset of the protocol: `S`, `N` and `B`.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tags this client knows how to carry.
const SUPPORTED_TAGS: &[&str] = &["S", "N", "B"];

/// DynamoDB attribute value.
///
/// Numbers are always string-encoded to preserve arbitrary precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// String value.
    S(String),
    /// Number value (string-encoded for arbitrary precision).
    N(String),
    /// Binary value (base64-encoded in JSON).
    B(bytes::Bytes),
    /// A tag this client does not support, as received from the service.
    ///
    /// Only produced when deserializing; it refuses to serialize.
    Unknown(String),
}

impl AttributeValue {
    /// Returns the string value if this is an `S` variant.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number string if this is an `N` variant.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the bytes if this is a `B` variant.
    #[must_use]
    pub fn as_b(&self) -> Option<&[u8]> {
        match self {
            Self::B(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the DynamoDB type descriptor string (e.g., "S", "N").
    #[must_use]
    pub fn type_descriptor(&self) -> &str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::B(_) => "B",
            Self::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S(s) => write!(f, "{{S: {s}}}"),
            Self::N(n) => write!(f, "{{N: {n}}}"),
            Self::B(b) => write!(f, "{{B: {} bytes}}", b.len()),
            Self::Unknown(tag) => write!(f, "{{{tag}: ?}}"),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::S(s) => serialize_tagged(serializer, "S", s),
            Self::N(n) => serialize_tagged(serializer, "N", n),
            Self::B(b) => {
                use base64::Engine;
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                serialize_tagged(serializer, "B", &encoded)
            }
            Self::Unknown(tag) => Err(ser::Error::custom(format!(
                "cannot serialize attribute with unsupported type {tag}"
            ))),
        }
    }
}

fn serialize_tagged<S: Serializer>(
    serializer: S,
    tag: &str,
    value: &str,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(tag, value)?;
    map.end()
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeValueVisitor)
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a DynamoDB AttributeValue object with exactly one type key")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::custom(
                "AttributeValue must have exactly one key",
            ));
        };

        let value = match key.as_str() {
            "S" => AttributeValue::S(map.next_value()?),
            "N" => AttributeValue::N(map.next_value()?),
            "B" => {
                use base64::Engine;
                let encoded: String = map.next_value()?;
                let decoded = base64::engine::general_purpose::STANDARD
                    .decode(&encoded)
                    .map_err(de::Error::custom)?;
                AttributeValue::B(bytes::Bytes::from(decoded))
            }
            _ => {
                map.next_value::<IgnoredAny>()?;
                AttributeValue::Unknown(key)
            }
        };

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format!(
                "AttributeValue must have exactly one key, expected one of {SUPPORTED_TAGS:?}"
            )));
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_string_value() {
        let val = AttributeValue::S("hello".to_owned());
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, r#"{"S":"hello"}"#);
    }

    #[test]
    fn test_should_serialize_number_as_string() {
        let val = AttributeValue::N("42".to_owned());
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, r#"{"N":"42"}"#);
    }

    #[test]
    fn test_should_base64_encode_binary_value() {
        let val = AttributeValue::B(bytes::Bytes::from_static(b"test data"));
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, r#"{"B":"dGVzdCBkYXRh"}"#);

        let back: AttributeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, val);
    }

    #[test]
    fn test_should_capture_unknown_tag() {
        let val: AttributeValue = serde_json::from_str(r#"{"X":"1"}"#).unwrap();
        assert_eq!(val, AttributeValue::Unknown("X".to_owned()));
        assert_eq!(val.type_descriptor(), "X");
    }

    #[test]
    fn test_should_capture_unknown_tag_with_structured_value() {
        let val: AttributeValue = serde_json::from_str(r#"{"SS":["a","b"]}"#).unwrap();
        assert_eq!(val, AttributeValue::Unknown("SS".to_owned()));
    }

    #[test]
    fn test_should_refuse_to_serialize_unknown_tag() {
        let val = AttributeValue::Unknown("BOOL".to_owned());
        assert!(serde_json::to_string(&val).is_err());
    }

    #[test]
    fn test_should_reject_empty_object() {
        let result: Result<AttributeValue, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_should_reject_multiple_tags() {
        let result: Result<AttributeValue, _> = serde_json::from_str(r#"{"S":"a","N":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_should_reject_invalid_base64() {
        let result: Result<AttributeValue, _> = serde_json::from_str(r#"{"B":"%%%"}"#);
        assert!(result.is_err());
    }
}
