use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Result, WidgetError};

pub const DEFAULT_TITLE: &str = "Messages";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hello! How can I help you today?";
pub const DEFAULT_PLACEHOLDER: &str = "Start a new message";
pub const DEFAULT_EMPTY_REPLY_TEXT: &str = "Sorry, I could not get a response.";
pub const DEFAULT_ERROR_REPLY_TEXT: &str = "Sorry, something went wrong. Please try again later.";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Widget configuration supplied by the host page.
///
/// Only `webhook_url` is required; everything else falls back to the
/// compiled-in defaults. Field names are camelCase on the wire so the host
/// can pass a plain JS object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(default)]
    pub webhook_url: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Bot text used when the provider answers without a `text` field
    #[serde(default = "default_empty_reply_text")]
    pub empty_reply_text: String,
    /// Bot text used when the provider round trip fails
    #[serde(default = "default_error_reply_text")]
    pub error_reply_text: String,
    /// `None` waits for the provider indefinitely. Accepts a number, a
    /// numeric string, `null`, `"none"` or `0`; the last three disable it.
    #[serde(
        default = "default_request_timeout_ms",
        deserialize_with = "deserialize_timeout_ms"
    )]
    pub request_timeout_ms: Option<u64>,
    #[serde(default)]
    pub load_greeting: bool,
    #[serde(default = "default_start_open")]
    pub start_open: bool,
    #[serde(default)]
    pub theme: ThemeVariant,
}

impl WidgetConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            title: default_title(),
            welcome_message: default_welcome_message(),
            placeholder: default_placeholder(),
            empty_reply_text: default_empty_reply_text(),
            error_reply_text: default_error_reply_text(),
            request_timeout_ms: default_request_timeout_ms(),
            load_greeting: false,
            start_open: default_start_open(),
            theme: ThemeVariant::default(),
        }
    }

    /// Reject a configuration the widget cannot mount with.
    pub fn validate(mut self) -> Result<Self> {
        let url = self.webhook_url.trim();
        if url.is_empty() {
            return Err(WidgetError::Config(
                "the webhook URL is missing (set data-webhook-url or webhookUrl)".to_string(),
            ));
        }
        self.webhook_url = url.to_string();
        if self.request_timeout_ms == Some(0) {
            self.request_timeout_ms = None;
        }
        Ok(self)
    }
}

/// Colour scheme of the rendered widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
    Midnight,
}

impl ThemeVariant {
    pub fn all() -> &'static [ThemeVariant] {
        &[ThemeVariant::Dark, ThemeVariant::Light, ThemeVariant::Midnight]
    }

    pub fn label(&self) -> &str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
            ThemeVariant::Midnight => "midnight",
        }
    }

    /// Case-insensitive lookup, used for `data-theme` attributes
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(label))
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_welcome_message() -> String {
    DEFAULT_WELCOME_MESSAGE.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_empty_reply_text() -> String {
    DEFAULT_EMPTY_REPLY_TEXT.to_string()
}

fn default_error_reply_text() -> String {
    DEFAULT_ERROR_REPLY_TEXT.to_string()
}

fn default_request_timeout_ms() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_MS)
}

/// Parse a textual timeout. `Some(None)` disables the timeout, `None`
/// means the value is not a timeout at all.
pub fn parse_timeout_ms(value: &str) -> Option<Option<u64>> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match value.parse::<u64>().ok()? {
        0 => Some(None),
        ms => Some(Some(ms)),
    }
}

fn deserialize_timeout_ms<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Ok(None),
            Some(ms) => Ok(Some(ms)),
            None => Err(de::Error::custom(format!("invalid requestTimeoutMs {}", n))),
        },
        Some(Value::String(s)) => parse_timeout_ms(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid requestTimeoutMs {:?}", s))),
        Some(other) => Err(de::Error::custom(format!("invalid requestTimeoutMs {}", other))),
    }
}

fn default_start_open() -> bool {
    true
}
