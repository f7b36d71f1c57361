//! CBOR and JSON Bridging Helpers.
//!
//! Thin adapters over the `ciborium` codec. The functions here never
//! implement CBOR themselves; they only map errors into [`CborError`] and
//! translate between `ciborium::Value` and `serde_json::Value` where the two
//! data models differ:
//!
//! - byte strings become base64url strings (no padding),
//! - tags are unwrapped to their content,
//! - text and integer map keys become JSON object keys,
//! - non-finite floats and complex map keys are rejected with
//!   [`CborError::UnsupportedType`].

use std::io::Cursor;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use ciborium::value::Value as CborValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::CborError;

/// Serializes `value` into a CBOR byte vector.
///
/// # Examples
///
/// ```
/// let bytes = toolbelt_core::cbor::encode(&vec![1u8, 2, 3]).unwrap();
/// assert_eq!(bytes, vec![0x83, 0x01, 0x02, 0x03]);
/// ```
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CborError> {
    let mut buffer = Vec::new();
    ciborium::ser::into_writer(value, &mut buffer).map_err(|e| CborError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Deserializes a single CBOR data item from `bytes`.
///
/// # Errors
///
/// - [`CborError::Decode`] if the bytes are not valid CBOR for `T`.
/// - [`CborError::TrailingBytes`] if anything follows the first data item.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CborError> {
    let mut cursor = Cursor::new(bytes);
    let value = ciborium::de::from_reader(&mut cursor).map_err(|e| CborError::Decode(e.to_string()))?;
    let consumed = cursor.position() as usize;
    if consumed < bytes.len() {
        return Err(CborError::TrailingBytes { remaining: bytes.len() - consumed });
    }
    Ok(value)
}

/// Encodes a JSON document as CBOR.
pub fn json_to_cbor(json: &JsonValue) -> Result<Vec<u8>, CborError> {
    encode(json)
}

/// Decodes CBOR bytes into a JSON document.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toolbelt_core::cbor::{cbor_to_json, json_to_cbor};
///
/// let doc = json!({"name": "toolbelt", "tags": ["a", "b"], "size": 3});
/// let bytes = json_to_cbor(&doc).unwrap();
/// assert_eq!(cbor_to_json(&bytes).unwrap(), doc);
/// ```
pub fn cbor_to_json(bytes: &[u8]) -> Result<JsonValue, CborError> {
    let value: CborValue = decode(bytes)?;
    cbor_value_to_json(value)
}

/// Converts a decoded CBOR value into its JSON counterpart.
pub fn cbor_value_to_json(value: CborValue) -> Result<JsonValue, CborError> {
    match value {
        CborValue::Null => Ok(JsonValue::Null),
        CborValue::Bool(b) => Ok(JsonValue::Bool(b)),
        CborValue::Text(s) => Ok(JsonValue::String(s)),
        CborValue::Integer(i) => integer_to_json(i128::from(i)),
        CborValue::Float(f) => Number::from_f64(f)
            .map(JsonValue::Number)
            .ok_or_else(|| CborError::UnsupportedType(format!("non-finite float {}", f))),
        CborValue::Bytes(bytes) => Ok(JsonValue::String(URL_SAFE_NO_PAD.encode(bytes))),
        CborValue::Tag(_, inner) => cbor_value_to_json(*inner),
        CborValue::Array(items) => items
            .into_iter()
            .map(cbor_value_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        CborValue::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, item) in entries {
                map.insert(map_key_to_string(key)?, cbor_value_to_json(item)?);
            }
            Ok(JsonValue::Object(map))
        }
        other => Err(CborError::UnsupportedType(format!("{:?}", other))),
    }
}

/// Converts a JSON document into a `ciborium` value tree.
pub fn json_value_to_cbor(value: &JsonValue) -> CborValue {
    match value {
        JsonValue::Null => CborValue::Null,
        JsonValue::Bool(b) => CborValue::Bool(*b),
        JsonValue::String(s) => CborValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CborValue::Integer(i.into())
            } else if let Some(u) = n.as_u64() {
                CborValue::Integer(u.into())
            } else {
                // serde_json numbers are always one of i64, u64 or finite f64.
                CborValue::Float(n.as_f64().unwrap_or_default())
            }
        }
        JsonValue::Array(items) => CborValue::Array(items.iter().map(json_value_to_cbor).collect()),
        JsonValue::Object(map) => CborValue::Map(
            map.iter()
                .map(|(k, v)| (CborValue::Text(k.clone()), json_value_to_cbor(v)))
                .collect(),
        ),
    }
}

/// Encodes `value` as CBOR and wraps the bytes in base64url (no padding),
/// for transport inside text channels such as URLs or JSON strings.
pub fn encode_base64url<T: Serialize + ?Sized>(value: &T) -> Result<String, CborError> {
    Ok(URL_SAFE_NO_PAD.encode(encode(value)?))
}

/// Reverses [`encode_base64url`].
pub fn decode_base64url<T: DeserializeOwned>(payload: &str) -> Result<T, CborError> {
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim())?;
    decode(&bytes)
}

fn integer_to_json(i: i128) -> Result<JsonValue, CborError> {
    if let Ok(signed) = i64::try_from(i) {
        Ok(JsonValue::Number(signed.into()))
    } else if let Ok(unsigned) = u64::try_from(i) {
        Ok(JsonValue::Number(unsigned.into()))
    } else {
        Err(CborError::UnsupportedType(format!("integer {} out of JSON range", i)))
    }
}

fn map_key_to_string(key: CborValue) -> Result<String, CborError> {
    match key {
        CborValue::Text(s) => Ok(s),
        CborValue::Integer(i) => Ok(i128::from(i).to_string()),
        CborValue::Tag(_, inner) => map_key_to_string(*inner),
        other => Err(CborError::UnsupportedType(format!("map key {:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: u32,
        name: String,
        scores: Vec<f64>,
        active: Option<bool>,
    }

    #[test]
    fn test_encode_decode_struct() {
        let sample = Sample { id: 7, name: "seven".to_string(), scores: vec![1.5, -2.0], active: None };
        let bytes = encode(&sample).expect("encode should succeed");
        let back: Sample = decode(&bytes).expect("decode should succeed");
        assert_eq!(back, sample);
    }

    #[test]
    fn test_encode_known_bytes() {
        assert_eq!(encode("a").unwrap(), vec![0x61, b'a']);
        assert_eq!(encode(&true).unwrap(), vec![0xf5]);
        assert_eq!(encode(&()).unwrap(), vec![0xf6]);
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = encode(&1u8).unwrap();
        bytes.extend_from_slice(&[0x01, 0x02]);
        match decode::<u8>(&bytes) {
            Err(CborError::TrailingBytes { remaining }) => assert_eq!(remaining, 2),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_truncated_input() {
        // Array header announcing three items followed by only one.
        let result = decode::<Vec<u8>>(&[0x83, 0x01]);
        assert!(matches!(result, Err(CborError::Decode(_))));
    }

    #[test]
    fn test_json_round_trip_nested_document() {
        let doc = json!({
            "user": {"name": "Ada", "roles": ["admin", "dev"]},
            "count": -12,
            "big": u64::MAX,
            "ratio": 0.25,
            "nothing": null
        });
        let bytes = json_to_cbor(&doc).unwrap();
        assert_eq!(cbor_to_json(&bytes).unwrap(), doc);
    }

    #[test]
    fn test_bytes_become_base64url() {
        let value = CborValue::Bytes(vec![0xfb, 0xff]);
        assert_eq!(cbor_value_to_json(value).unwrap(), json!("-_8"));
    }

    #[test]
    fn test_tags_are_unwrapped() {
        let value = CborValue::Tag(1, Box::new(CborValue::Integer(1_700_000_000i64.into())));
        assert_eq!(cbor_value_to_json(value).unwrap(), json!(1_700_000_000i64));
    }

    #[test]
    fn test_integer_map_keys_are_stringified() {
        let value = CborValue::Map(vec![
            (CborValue::Integer(1u8.into()), CborValue::Text("one".to_string())),
            (CborValue::Text("two".to_string()), CborValue::Integer(2u8.into())),
        ]);
        assert_eq!(cbor_value_to_json(value).unwrap(), json!({"1": "one", "two": 2}));
    }

    #[test]
    fn test_unsupported_types() {
        let nan = CborValue::Float(f64::NAN);
        assert!(matches!(cbor_value_to_json(nan), Err(CborError::UnsupportedType(_))));

        let array_key = CborValue::Map(vec![(CborValue::Array(vec![]), CborValue::Null)]);
        assert!(matches!(cbor_value_to_json(array_key), Err(CborError::UnsupportedType(_))));
    }

    #[test]
    fn test_json_value_to_cbor_matches_serde_encoding() {
        let doc = json!({"a": [1, 2.5, "x"], "b": {"c": false}});
        let via_tree = encode(&json_value_to_cbor(&doc)).unwrap();
        let via_serde = json_to_cbor(&doc).unwrap();
        assert_eq!(via_tree, via_serde);
    }

    #[test]
    fn test_base64url_transport() {
        let doc = json!({"path": "/a/b", "n": 3});
        let payload = encode_base64url(&doc).unwrap();
        assert!(!payload.contains('=') && !payload.contains('+') && !payload.contains('/'));
        let back: JsonValue = decode_base64url(&payload).unwrap();
        assert_eq!(back, doc);
        assert!(matches!(decode_base64url::<JsonValue>("%%%"), Err(CborError::Base64(_))));
    }
}
