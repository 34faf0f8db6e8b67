//! Port traits — the hexagonal architecture boundary.
//!
//! The controller only depends on these traits. The browser implementation
//! lives in `widget-platform`; tests plug in scripted mocks.

use async_trait::async_trait;
use serde::Serialize;
use widget_types::{Result, session::SessionId};

// ─── Reply Provider Port ─────────────────────────────────────

/// Body of the outbound POST to the reply provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyRequest {
    pub message: String,
    #[serde(rename = "sessionId")]
    pub session_id: SessionId,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// The externally hosted endpoint that answers user messages.
///
/// Implementations return the raw body of a 2xx response; schema
/// validation belongs to the caller (see [`crate::reply`]). Any non-2xx
/// status, transport failure or timeout is an `Err`.
#[async_trait(?Send)]
pub trait ReplyProvider {
    /// POST a user message and return the response body
    async fn send_message(&self, req: &ReplyRequest) -> Result<String>;

    /// GET the optional greeting document
    async fn fetch_greeting(&self) -> Result<String>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}
