use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl WidgetError {
    /// True for failures of the reply provider round trip. These are
    /// recovered locally as a bot message and never retried.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            WidgetError::Http(_)
                | WidgetError::Network(_)
                | WidgetError::Malformed(_)
                | WidgetError::Timeout(_)
        )
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(e: serde_json::Error) -> Self {
        WidgetError::Serialization(e.to_string())
    }
}
