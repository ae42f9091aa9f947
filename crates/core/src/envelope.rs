//! Uniform response envelope.
//!
//! Every response body has the shape
//! `{ "code": u16, "success": bool, "message": string, "result": object | null }`.
//! `success` is derived from `code` and is true exactly for 2xx codes.
//! `result`, when present, is always a JSON object: a single show renders
//! as the record itself, lists are wrapped under a named key.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::CoreError;
use crate::show::Show;

/// The known shapes of a successful result.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A single record, rendered as the record mapping itself.
    Show(Show),
    /// Rendered as `{"shows": [...]}`.
    Shows(Vec<Show>),
    /// Rendered as `{"content": "hello world!"}`.
    Greeting,
    /// Rendered as `{"name": <name>}`.
    Mirror(String),
    /// No result at all.
    Empty,
}

impl Payload {
    /// Render the data placed under `result`, or `None` for [`Payload::Empty`].
    ///
    /// The record shape comes from the derived `Serialize` on [`Show`].
    pub fn into_data(self) -> Result<Option<Value>, serde_json::Error> {
        let data = match self {
            Payload::Show(show) => serde_json::to_value(show)?,
            Payload::Shows(shows) => {
                let mut map = Map::new();
                map.insert("shows".into(), serde_json::to_value(shows)?);
                Value::Object(map)
            }
            Payload::Greeting => json!({ "content": "hello world!" }),
            Payload::Mirror(name) => json!({ "name": name }),
            Payload::Empty => return Ok(None),
        };
        Ok(Some(data))
    }
}

/// The wire envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub code: u16,
    pub success: bool,
    pub message: String,
    pub result: Option<Map<String, Value>>,
}

impl Envelope {
    /// Build an envelope from a typed payload.
    ///
    /// Goes through [`build`], so a payload that does not render to an
    /// object is reported as [`CoreError::InvalidArgument`].
    pub fn new(payload: Payload, code: u16, message: &str) -> Result<Self, CoreError> {
        let data = payload
            .into_data()
            .map_err(|e| CoreError::InvalidArgument(format!("payload did not serialize: {e}")))?;
        build(data, code, message)
    }

    /// `200` with the given payload and no message.
    pub fn ok(payload: Payload) -> Result<Self, CoreError> {
        Self::new(payload, 200, "")
    }

    /// A result-less envelope carrying only a status and message.
    pub fn message(code: u16, message: impl Into<String>) -> Self {
        Self::from_parts(None, code, message.into())
    }

    fn from_parts(result: Option<Map<String, Value>>, code: u16, message: String) -> Self {
        Self {
            code,
            success: is_success(code),
            message,
            result,
        }
    }
}

/// Whether `code` counts as success (2xx).
pub fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Build an envelope from untyped data.
///
/// `data` must be absent or a JSON object; anything else is rejected with
/// [`CoreError::InvalidArgument`].
pub fn build(data: Option<Value>, code: u16, message: &str) -> Result<Envelope, CoreError> {
    let result = match data {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            return Err(CoreError::InvalidArgument(format!(
                "envelope data must be an object, got {}",
                json_kind(&other)
            )))
        }
    };
    Ok(Envelope::from_parts(result, code, message.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
