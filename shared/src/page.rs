//! Normalization boundary for paged collection responses.
//!
//! The backend answers the same endpoint with several shapes: the items
//! under a named field, nested one level under `data`, a bare array, or
//! nothing at all. Everything downstream of [`parse_page`] only ever sees
//! a `Vec<T>`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageParseError {
    #[error("page items failed to decode: {0}")]
    Items(String),
    #[error("unrecognized response shape for `{field}`")]
    UnrecognizedShape { field: String },
}

/// Extract the item array named `field` from any of the observed response
/// shapes and decode it.
///
/// Accepted shapes:
/// 1. `{ "<field>": [...] }`
/// 2. `{ "data": { "<field>": [...] } }`
/// 3. `[...]`
/// 4. `{ "data": [...] }`
/// 5. `null`, or an object without the field, decodes as an empty page.
pub fn parse_page<T: DeserializeOwned>(body: Value, field: &str) -> Result<Vec<T>, PageParseError> {
    let items = match body {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => {
            if let Some(found) = map.remove(field) {
                found
            } else if let Some(nested) = map.remove("data") {
                match nested {
                    Value::Array(items) => Value::Array(items),
                    Value::Object(mut inner) => inner.remove(field).unwrap_or(Value::Null),
                    other => other,
                }
            } else {
                Value::Null
            }
        }
        _ => {
            return Err(PageParseError::UnrecognizedShape {
                field: field.to_string(),
            })
        }
    };

    match items {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|e| PageParseError::Items(e.to_string())))
            .collect(),
        _ => Err(PageParseError::UnrecognizedShape {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> Result<Vec<u32>, PageParseError> {
        parse_page::<u32>(body, "items")
    }

    #[test]
    fn direct_field_shape() {
        assert_eq!(parse(json!({ "items": [1, 2, 3] })).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn nested_data_object_shape() {
        let body = json!({ "data": { "items": [4, 5] }, "message": "ok" });
        assert_eq!(parse(body).unwrap(), vec![4, 5]);
    }

    #[test]
    fn bare_array_shape() {
        assert_eq!(parse(json!([7])).unwrap(), vec![7]);
    }

    #[test]
    fn data_array_shape() {
        assert_eq!(parse(json!({ "data": [8, 9] })).unwrap(), vec![8, 9]);
    }

    #[test]
    fn missing_field_and_null_decode_as_empty() {
        assert_eq!(parse(Value::Null).unwrap(), Vec::<u32>::new());
        assert_eq!(parse(json!({ "message": "ok" })).unwrap(), Vec::<u32>::new());
        assert_eq!(parse(json!({ "items": null })).unwrap(), Vec::<u32>::new());
        assert_eq!(
            parse(json!({ "data": { "other": [1] } })).unwrap(),
            Vec::<u32>::new()
        );
    }

    #[test]
    fn scalar_bodies_are_rejected() {
        let err = parse(json!("nope")).unwrap_err();
        assert_eq!(
            err,
            PageParseError::UnrecognizedShape {
                field: "items".to_string()
            }
        );
        assert!(parse(json!({ "items": 5 })).is_err());
        assert!(parse(json!({ "data": 5 })).is_err());
    }

    #[test]
    fn undecodable_items_surface_as_items_error() {
        let err = parse(json!({ "items": ["x"] })).unwrap_err();
        assert!(matches!(err, PageParseError::Items(_)));
    }
}
