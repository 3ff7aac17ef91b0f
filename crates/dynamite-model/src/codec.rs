//! Conversion between native [`Value`]s and wire [`AttributeValue`]s.
//!
//! # Numbers
//!
//! Numbers always travel as decimal strings. Integers are written in base 10.
//! Floats are written with the shortest representation that round-trips at the
//! source width (so an `f32` never picks up digits from an `f64` widening) and
//! never in exponent notation. Integral floats keep a trailing `.0`.
//!
//! On decode, a string containing `.` is a float; anything else is an integer,
//! read as `i64` and, above `i64::MAX`, as `u64`.
//!
//! # Records
//!
//! Item-level functions stop at the first field that fails and return that
//! field's error unchanged.

use std::collections::HashMap;

use crate::attribute_value::AttributeValue;
use crate::error::{CodecError, CodecResult};
use crate::types::{
    AttributeValueUpdate, Condition, Item, Key, RangeKeyCondition, Record, Updates, WireKey,
};
use crate::value::Value;

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Encode a native value as a wire attribute.
pub fn encode(value: &Value) -> CodecResult<AttributeValue> {
    match value {
        Value::String(s) => Ok(AttributeValue::S(s.clone())),
        Value::Int(n) => Ok(AttributeValue::N(n.to_string())),
        Value::UInt(n) => Ok(AttributeValue::N(n.to_string())),
        Value::Float(f) => encode_float(*f, f.is_finite(), value).map(AttributeValue::N),
        Value::Float32(f) => encode_float(*f, f.is_finite(), value).map(AttributeValue::N),
        Value::Binary(b) => Ok(AttributeValue::B(b.clone())),
        Value::Bool(_) | Value::Null | Value::List(_) | Value::Map(_) => {
            Err(CodecError::unsupported(value.type_name()))
        }
    }
}

/// Encode an optional value. `None` is absent and produces no attribute.
pub fn encode_optional(value: Option<&Value>) -> CodecResult<Option<AttributeValue>> {
    value.map(encode).transpose()
}

/// Decode a wire attribute into a native value.
pub fn decode(attr: &AttributeValue) -> CodecResult<Value> {
    match attr {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::B(b) => Ok(Value::Binary(b.clone())),
        AttributeValue::Unknown(tag) => Err(CodecError::unsupported(tag.as_str())),
    }
}

/// Rust's `Display` for floats is already the shortest round-trip form at the
/// value's own width and never uses an exponent.
fn encode_float(f: impl ToString, finite: bool, value: &Value) -> CodecResult<String> {
    if !finite {
        return Err(CodecError::unsupported(format!(
            "{} ({value})",
            value.type_name()
        )));
    }
    let mut repr = f.to_string();
    if !repr.contains('.') {
        repr.push_str(".0");
    }
    Ok(repr)
}

fn parse_number(s: &str) -> CodecResult<Value> {
    if s.contains('.') {
        return s
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| CodecError::malformed_number(s, e));
    }

    match s.parse::<i64>() {
        Ok(n) => Ok(Value::Int(n)),
        Err(e) => s
            .parse::<u64>()
            .map(Value::UInt)
            .map_err(|_| CodecError::malformed_number(s, e)),
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Encode every field of a record.
pub fn encode_item(record: &Record) -> CodecResult<Item> {
    record
        .iter()
        .map(|(name, value)| Ok((name.clone(), encode(value)?)))
        .collect()
}

/// Decode every attribute of an item.
pub fn decode_item(item: &Item) -> CodecResult<Record> {
    item.iter()
        .map(|(name, attr)| Ok((name.clone(), decode(attr)?)))
        .collect()
}

/// Decode a list of items, stopping at the first failure.
pub fn decode_items(items: &[Item]) -> CodecResult<Vec<Record>> {
    items.iter().map(decode_item).collect()
}

/// Encode per-field update instructions. `None` becomes a deletion.
pub fn encode_updates(updates: &Updates) -> CodecResult<HashMap<String, AttributeValueUpdate>> {
    updates
        .iter()
        .map(|(name, value)| {
            let update = match value {
                Some(v) => AttributeValueUpdate::put(encode(v)?),
                None => AttributeValueUpdate::delete(),
            };
            Ok((name.clone(), update))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Keys and conditions
// ---------------------------------------------------------------------------

/// Encode a native key.
pub fn encode_key(key: &Key) -> CodecResult<WireKey> {
    Ok(WireKey {
        hash_key_element: encode(&key.hash)?,
        range_key_element: encode_optional(key.range.as_ref())?,
    })
}

/// Decode a wire key, e.g. a `LastEvaluatedKey`.
pub fn decode_key(key: &WireKey) -> CodecResult<Key> {
    Ok(Key {
        hash: decode(&key.hash_key_element)?,
        range: key.range_key_element.as_ref().map(decode).transpose()?,
    })
}

/// Encode a range key condition.
pub fn encode_condition(condition: &RangeKeyCondition) -> CodecResult<Condition> {
    Ok(Condition {
        attribute_value_list: condition
            .operands()
            .into_iter()
            .map(encode)
            .collect::<CodecResult<_>>()?,
        comparison_operator: condition.operator(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComparisonOperator;

    fn n(s: &str) -> AttributeValue {
        AttributeValue::N(s.to_owned())
    }

    #[test]
    fn test_should_encode_text_verbatim() {
        let attr = encode(&Value::from("some text")).unwrap();
        assert_eq!(attr, AttributeValue::S("some text".to_owned()));
    }

    #[test]
    fn test_should_encode_integers_of_every_width() {
        assert_eq!(encode(&Value::from(12i8)).unwrap(), n("12"));
        assert_eq!(encode(&Value::from(-34i16)).unwrap(), n("-34"));
        assert_eq!(encode(&Value::from(56i32)).unwrap(), n("56"));
        assert_eq!(
            encode(&Value::from(i64::MIN)).unwrap(),
            n("-9223372036854775808")
        );
        assert_eq!(encode(&Value::from(21u8)).unwrap(), n("21"));
        assert_eq!(
            encode(&Value::from(u64::MAX)).unwrap(),
            n("18446744073709551615")
        );
        assert_eq!(encode(&Value::from(0usize)).unwrap(), n("0"));
    }

    #[test]
    fn test_should_encode_floats_at_source_precision() {
        assert_eq!(encode(&Value::from(123.4567f32)).unwrap(), n("123.4567"));
        assert_eq!(
            encode(&Value::from(987_654_321.123_456_789_f64)).unwrap(),
            n("987654321.1234568")
        );
        assert_eq!(encode(&Value::from(0.1f32)).unwrap(), n("0.1"));
    }

    #[test]
    fn test_should_never_use_exponent_notation() {
        assert_eq!(
            encode(&Value::from(1e21f64)).unwrap(),
            n("1000000000000000000000.0")
        );
        assert_eq!(encode(&Value::from(1.5e-7f64)).unwrap(), n("0.00000015"));
    }

    #[test]
    fn test_should_keep_decimal_point_on_integral_floats() {
        assert_eq!(encode(&Value::from(2.0f64)).unwrap(), n("2.0"));
        assert_eq!(decode(&n("2.0")).unwrap(), Value::Float(2.0));
    }

    #[test]
    fn test_should_reject_non_finite_floats() {
        let err = encode(&Value::from(f64::NAN)).unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedType(ref t) if t.starts_with("f64")));
        assert!(encode(&Value::from(f32::INFINITY)).is_err());
    }

    #[test]
    fn test_should_reject_unsupported_native_types() {
        assert_eq!(
            encode(&Value::from(true)).unwrap_err(),
            CodecError::UnsupportedType("bool".to_owned())
        );
        assert_eq!(
            encode(&Value::Null).unwrap_err(),
            CodecError::UnsupportedType("null".to_owned())
        );
        assert_eq!(
            encode(&Value::List(vec![])).unwrap_err(),
            CodecError::UnsupportedType("list".to_owned())
        );
        assert_eq!(
            encode(&Value::Map(HashMap::new())).unwrap_err(),
            CodecError::UnsupportedType("map".to_owned())
        );
    }

    #[test]
    fn test_should_treat_missing_optional_as_absent() {
        assert_eq!(encode_optional(None).unwrap(), None);
        assert_eq!(
            encode_optional(Some(&Value::from(1))).unwrap(),
            Some(n("1"))
        );
    }

    #[test]
    fn test_should_decode_numbers_by_decimal_point() {
        assert_eq!(decode(&n("123")).unwrap(), Value::Int(123));
        assert_eq!(decode(&n("-7")).unwrap(), Value::Int(-7));
        assert_eq!(decode(&n("123.4567")).unwrap(), Value::Float(123.4567));
        assert_eq!(
            decode(&n("987654321.123456789")).unwrap(),
            Value::Float(987_654_321.123_456_8)
        );
        assert_eq!(
            decode(&n("18446744073709551615")).unwrap(),
            Value::UInt(u64::MAX)
        );
    }

    #[test]
    fn test_should_fail_on_malformed_numbers() {
        for bad in ["abc", "1.2.3", "", "1e5", "99999999999999999999999"] {
            let err = decode(&n(bad)).unwrap_err();
            assert!(
                matches!(err, CodecError::MalformedNumber { ref value, .. } if value == bad),
                "expected MalformedNumber for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_should_fail_on_unknown_tag() {
        let err = decode(&AttributeValue::Unknown("X".to_owned())).unwrap_err();
        assert_eq!(err, CodecError::UnsupportedType("X".to_owned()));
    }

    #[test]
    fn test_should_roundtrip_supported_scalars() {
        let values = [
            Value::from("hello"),
            Value::from(""),
            Value::from(42i32),
            Value::from(-1i64),
            Value::from(u64::MAX),
            Value::from(0.5f64),
            Value::from(-3.25f64),
            Value::from(f64::MAX),
            Value::from(vec![0u8, 1, 255]),
        ];
        for v in values {
            assert_eq!(decode(&encode(&v).unwrap()).unwrap(), v);
        }
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn test_should_roundtrip_f32_after_recast() {
        for f in [123.4567f32, 0.1, 3.402_823_5e38, 1.0e-7, -16_777_216.0] {
            let decoded = decode(&encode(&Value::from(f)).unwrap()).unwrap();
            let Value::Float(wide) = decoded else {
                panic!("expected float, got {decoded:?}");
            };
            assert_eq!(wide as f32, f);
        }
    }

    #[test]
    fn test_should_encode_item_with_text_field() {
        let record = Record::from([("Text".to_owned(), Value::from("some text"))]);
        let item = encode_item(&record).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"Text":{"S":"some text"}}"#);
    }

    #[test]
    fn test_should_encode_item_with_mixed_integer_widths() {
        let record = Record::from([
            ("N1".to_owned(), Value::from(12i8)),
            ("N2".to_owned(), Value::from(34i16)),
        ]);
        let item = encode_item(&record).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"N1": {"N": "12"}, "N2": {"N": "34"}})
        );
    }

    #[test]
    fn test_should_encode_empty_item() {
        assert!(encode_item(&Record::new()).unwrap().is_empty());
    }

    #[test]
    fn test_should_fail_whole_item_on_one_bad_field() {
        let record = Record::from([
            ("ok".to_owned(), Value::from("fine")),
            ("flag".to_owned(), Value::from(false)),
        ]);
        assert_eq!(
            encode_item(&record).unwrap_err(),
            CodecError::UnsupportedType("bool".to_owned())
        );
    }

    #[test]
    fn test_should_decode_item() {
        let item = Item::from([
            ("name".to_owned(), AttributeValue::S("widget".to_owned())),
            ("count".to_owned(), n("3")),
        ]);
        let record = decode_item(&item).unwrap();
        assert_eq!(record["name"], Value::from("widget"));
        assert_eq!(record["count"], Value::Int(3));
    }

    #[test]
    fn test_should_encode_updates_with_deletions() {
        let updates = Updates::from([
            ("color".to_owned(), Some(Value::from("red"))),
            ("legacy".to_owned(), None),
        ]);
        let encoded = encode_updates(&updates).unwrap();
        assert_eq!(
            encoded["color"],
            AttributeValueUpdate::put(AttributeValue::S("red".to_owned()))
        );
        assert_eq!(encoded["legacy"], AttributeValueUpdate::delete());
    }

    #[test]
    fn test_should_roundtrip_composite_key() {
        let key = Key::composite("user-1", 20_240_101i64);
        let wire = encode_key(&key).unwrap();
        assert_eq!(wire.range_key_element, Some(n("20240101")));
        assert_eq!(decode_key(&wire).unwrap(), key);
    }

    #[test]
    fn test_should_encode_between_condition() {
        let cond = encode_condition(&RangeKeyCondition::Between(
            Value::from(1),
            Value::from(10),
        ))
        .unwrap();
        assert_eq!(cond.comparison_operator, ComparisonOperator::Between);
        assert_eq!(cond.attribute_value_list, vec![n("1"), n("10")]);
    }
}
