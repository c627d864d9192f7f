//! Response Envelope
//!
//! Collection endpoints answer either with a bare JSON array or with a
//! paginated object carrying the array under `results`. Both shapes decode to
//! the same record sequence; anything else is a parse failure.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// The two accepted body shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Bare(Vec<T>),
    Enveloped(Page<T>),
}

/// Paginated wrapper
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T: DeserializeOwned> Payload<T> {
    /// Classify an already parsed JSON body
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        let decode_err = |e: serde_json::Error| FetchError::Decode(e.to_string());

        let enveloped = match &value {
            Value::Array(_) => false,
            Value::Object(map) if map.contains_key("results") => true,
            other => {
                return Err(FetchError::Decode(format!(
                    "expected a JSON array or an object with a \"results\" array, got {}",
                    json_type(other)
                )))
            }
        };

        if enveloped {
            serde_json::from_value(value)
                .map(Payload::Enveloped)
                .map_err(decode_err)
        } else {
            serde_json::from_value(value)
                .map(Payload::Bare)
                .map_err(decode_err)
        }
    }
}

impl<T> Payload<T> {
    /// True when the server holds more records than this body carries
    pub fn has_more(&self) -> bool {
        matches!(self, Payload::Enveloped(page) if page.next.is_some())
    }

    pub fn into_records(self) -> Vec<T> {
        match self {
            Payload::Bare(records) => records,
            Payload::Enveloped(page) => page.results,
        }
    }
}

/// Decode a response body into its record sequence
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let payload = Payload::from_value(value)?;

    if payload.has_more() {
        tracing::warn!("Response is paginated; only the first page is shown");
    }

    Ok(payload.into_records())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without \"results\"",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_bare_and_enveloped_normalize_alike() {
        let bare: Vec<Row> = decode(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        let wrapped: Vec<Row> =
            decode(r#"{"count": 2, "next": null, "previous": null, "results": [{"id": 1}, {"id": 2}]}"#)
                .unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 2);
    }

    #[test]
    fn test_envelope_without_pagination_fields() {
        let rows: Vec<Row> = decode(r#"{"results": [{"id": 9}]}"#).unwrap();
        assert_eq!(rows, vec![Row { id: 9 }]);
    }

    #[test]
    fn test_has_more() {
        let page: Payload<Row> = Payload::from_value(serde_json::json!({
            "results": [],
            "next": "http://localhost:8000/api/teams/?page=2"
        }))
        .unwrap();
        assert!(page.has_more());

        let bare: Payload<Row> = Payload::from_value(serde_json::json!([])).unwrap();
        assert!(!bare.has_more());
    }

    #[test]
    fn test_other_shapes_are_parse_errors() {
        for body in [r#"{"items": []}"#, "42", "null", r#""text""#] {
            let err = decode::<Row>(body).unwrap_err();
            assert!(matches!(err, FetchError::Decode(_)), "{}", body);
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = decode::<Row>("<html>").unwrap_err();
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn test_bad_record_inside_envelope() {
        let err = decode::<Row>(r#"{"results": [{"id": "x"}]}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
