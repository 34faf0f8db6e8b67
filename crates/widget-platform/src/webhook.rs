//! Webhook reply provider.
//!
//! Talks to the host's webhook with browser `fetch()` via gloo-net:
//! POST `{ "message", "sessionId" }` for each user message and a bodiless
//! GET for the optional greeting. Every request is raced against a
//! gloo-timers timeout when one is configured.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use widget_core::ports::{ReplyProvider, ReplyRequest};
use widget_types::{config::WidgetConfig, Result, WidgetError};

pub struct WebhookProvider {
    url: String,
    timeout_ms: Option<u64>,
}

impl WebhookProvider {
    pub fn new(url: impl Into<String>, timeout_ms: Option<u64>) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.webhook_url.clone(), config.request_timeout_ms)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }
}

#[async_trait(?Send)]
impl ReplyProvider for WebhookProvider {
    async fn send_message(&self, req: &ReplyRequest) -> Result<String> {
        let request = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| WidgetError::Serialization(e.to_string()))?;

        with_timeout(self.timeout_ms, async move {
            let response = request
                .send()
                .await
                .map_err(|e| WidgetError::Network(e.to_string()))?;
            read_body(response).await
        })
        .await
    }

    async fn fetch_greeting(&self) -> Result<String> {
        with_timeout(self.timeout_ms, async {
            let response = Request::get(&self.url)
                .send()
                .await
                .map_err(|e| WidgetError::Network(e.to_string()))?;
            read_body(response).await
        })
        .await
    }

    fn provider_name(&self) -> &str {
        "webhook"
    }
}

async fn read_body(response: Response) -> Result<String> {
    check_status(response.status())?;
    response
        .text()
        .await
        .map_err(|e| WidgetError::Network(e.to_string()))
}

/// Map an HTTP status to the provider contract: only 2xx is success.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(WidgetError::Http(status))
    }
}

/// Delay handed to `setTimeout`. Browsers fire larger delays immediately,
/// so clamp to the largest signed 32-bit value.
pub fn timer_delay_ms(ms: u64) -> u32 {
    ms.min(i32::MAX as u64) as u32
}

/// Resolve `fut`, or fail with `WidgetError::Timeout` once `timeout_ms`
/// elapses. The losing fetch is dropped, not aborted.
pub async fn with_timeout<T, F>(timeout_ms: Option<u64>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(ms) = timeout_ms else {
        return fut.await;
    };

    let timer = TimeoutFuture::new(timer_delay_ms(ms));
    match select(Box::pin(fut), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("Reply provider did not answer within {}ms", ms);
            Err(WidgetError::Timeout(ms))
        }
    }
}
