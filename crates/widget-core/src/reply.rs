//! Schema validation for reply provider responses.
//!
//! Provider bodies are untrusted JSON. Each is checked against an explicit
//! shape and turned into a tagged result instead of being inspected field
//! by field at the call site.

use serde_json::{Map, Value};
use widget_types::{Result, WidgetError};

/// Validated answer to a POSTed user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Well-formed body. `text` is `None` when the provider sent no usable
    /// text and the configured fallback should be shown.
    Ok { text: Option<String> },
    /// The body is not JSON or does not match `{ "text"?: string }`
    Malformed(String),
}

impl ReplyOutcome {
    pub fn into_result(self) -> Result<Option<String>> {
        match self {
            ReplyOutcome::Ok { text } => Ok(text),
            ReplyOutcome::Malformed(reason) => Err(WidgetError::Malformed(reason)),
        }
    }
}

/// Fields of the greeting document that were present and usable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingUpdate {
    pub title: Option<String>,
    pub welcome_message: Option<String>,
}

impl GreetingUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.welcome_message.is_none()
    }
}

/// Validate a reply body of the form `{ "text"?: string }`.
///
/// A missing, `null` or empty `text` is well-formed and maps to `None`.
/// A `text` of any other JSON type is malformed.
pub fn parse_reply(body: &str) -> ReplyOutcome {
    let obj = match parse_object(body) {
        Ok(obj) => obj,
        Err(reason) => return ReplyOutcome::Malformed(reason),
    };

    match obj.get("text") {
        None | Some(Value::Null) => ReplyOutcome::Ok { text: None },
        Some(Value::String(s)) if s.is_empty() => ReplyOutcome::Ok { text: None },
        Some(Value::String(s)) => ReplyOutcome::Ok { text: Some(s.clone()) },
        Some(other) => ReplyOutcome::Malformed(format!(
            "\"text\" must be a string, got {}",
            json_type(other)
        )),
    }
}

/// Validate a greeting body of the form
/// `{ "title"?: string, "welcomeMessage"?: string }`.
///
/// Non-string or empty fields are skipped individually; only a body that
/// is not a JSON object is an error.
pub fn parse_greeting(body: &str) -> Result<GreetingUpdate> {
    let obj = parse_object(body).map_err(WidgetError::Malformed)?;
    Ok(GreetingUpdate {
        title: non_empty_string(obj.get("title")),
        welcome_message: non_empty_string(obj.get("welcomeMessage")),
    })
}

fn parse_object(body: &str) -> std::result::Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(obj)) => Ok(obj),
        Ok(other) => Err(format!("expected a JSON object, got {}", json_type(&other))),
        Err(e) => Err(format!("invalid JSON: {}", e)),
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
