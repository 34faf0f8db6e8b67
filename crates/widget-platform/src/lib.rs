//! Browser adapters for the chat widget.
//!
//! - [`webhook`]: `ReplyProvider` over `fetch` (gloo-net)
//! - [`host`]: configuration discovery and DOM mounting in the host page

pub mod webhook;
pub mod host;

pub use webhook::WebhookProvider;
pub use host::HostPage;
