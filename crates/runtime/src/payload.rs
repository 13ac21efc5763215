//! Request payload construction
//!
//! Builds the JSON value that is deserialized into an RPC input message from
//! the path captures, the query string and the body, as directed by the
//! binding's body selector.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::response::error_response;

/// Which part of the HTTP request becomes the RPC input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySelector {
    /// No body: query parameters merged with path captures
    None,
    /// `body: "*"`: the whole body
    All,
    /// `body: "field"`: the body is the value of one field
    Field(&'static str),
}

/// Failures turning an HTTP request into an RPC input
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("request body must be a JSON object when the path has parameters")]
    BodyNotObject,

    #[error("request does not match the input message: {0}")]
    Decode(#[source] serde_json::Error),
}

impl IntoResponse for PayloadError {
    fn into_response(self) -> Response {
        error_response(StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", self.to_string())
    }
}

/// Build the input payload for one request.
///
/// Path captures are inserted last and replace any value of the same name.
/// Repeated query keys collect into an array of strings.
pub fn build_payload(
    selector: BodySelector,
    captures: Vec<(String, String)>,
    query: &[(String, String)],
    body: &[u8],
) -> Result<Value, PayloadError> {
    let mut payload = match selector {
        BodySelector::None => query_object(query),
        BodySelector::All => {
            let value = parse_body(body)?.unwrap_or_else(|| Value::Object(Map::new()));
            match value {
                Value::Object(map) => map,
                other if captures.is_empty() => return Ok(other),
                _ => return Err(PayloadError::BodyNotObject),
            }
        }
        BodySelector::Field(field) => {
            let mut map = Map::new();
            if let Some(value) = parse_body(body)? {
                map.insert(field.to_string(), value);
            }
            map
        }
    };

    for (name, value) in captures {
        payload.insert(name, Value::String(value));
    }

    Ok(Value::Object(payload))
}

fn parse_body(body: &[u8]) -> Result<Option<Value>, PayloadError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(PayloadError::InvalidBody)
}

fn query_object(query: &[(String, String)]) -> Map<String, Value> {
    let mut map = Map::new();

    for (key, value) in query {
        let value = Value::String(value.clone());
        match map.get_mut(key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(key.clone(), value);
            }
        }
    }

    map
}
