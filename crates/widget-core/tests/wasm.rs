//! WASM-target tests for widget-core.
//!
//! Runs EventBus, reply validation, and ConversationController tests
//! under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use widget_core::controller::*;
use widget_core::event_bus::EventBus;
use widget_core::ports::*;
use widget_core::reply::*;
use widget_types::config::WidgetConfig;
use widget_types::event::WidgetEvent;
use widget_types::message::*;
use widget_types::session::SessionId;
use widget_types::WidgetError;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use async_trait::async_trait;

// ─── Mock provider ───────────────────────────────────────

struct FixedProvider {
    reply: widget_types::Result<String>,
    greeting: widget_types::Result<String>,
    calls: Cell<usize>,
    last_request: RefCell<Option<ReplyRequest>>,
}

impl FixedProvider {
    fn replying(reply: widget_types::Result<String>) -> Rc<Self> {
        Rc::new(Self {
            reply,
            greeting: Err(WidgetError::Http(404)),
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        })
    }
}

#[async_trait(?Send)]
impl ReplyProvider for FixedProvider {
    async fn send_message(&self, req: &ReplyRequest) -> widget_types::Result<String> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(req.clone());
        self.reply.clone()
    }

    async fn fetch_greeting(&self) -> widget_types::Result<String> {
        self.greeting.clone()
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

fn controller(provider: Rc<FixedProvider>) -> ConversationController {
    ConversationController::with_session(
        WidgetConfig::new("https://hooks.example.com/chat"),
        provider,
        EventBus::new(),
        SessionId::from("wasm-session".to_string()),
    )
}

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(WidgetEvent::TypingStarted);
    assert!(bus.has_pending());
    assert_eq!(bus.drain(), vec![WidgetEvent::TypingStarted]);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn event_bus_listener() {
    let bus = EventBus::new();
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    bus.on_emit(move |_| counter.set(counter.get() + 1));
    bus.emit(WidgetEvent::OpenChanged { open: true });
    assert_eq!(hits.get(), 1);
}

// ─── Reply Schema Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn parse_reply_variants() {
    assert_eq!(
        parse_reply(r#"{"text":"Hi"}"#),
        ReplyOutcome::Ok { text: Some("Hi".to_string()) }
    );
    assert_eq!(parse_reply("{}"), ReplyOutcome::Ok { text: None });
    assert!(matches!(parse_reply("oops"), ReplyOutcome::Malformed(_)));
}

#[wasm_bindgen_test]
fn parse_greeting_variants() {
    let update = parse_greeting(r#"{"title":"T"}"#).unwrap();
    assert_eq!(update.title.as_deref(), Some("T"));
    assert!(update.welcome_message.is_none());
    assert!(parse_greeting("null").is_err());
}

// ─── Controller Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn controller_success_scenario() {
    let provider = FixedProvider::replying(Ok(r#"{"text":"Hi there"}"#.to_string()));
    let controller = controller(provider.clone());

    assert_eq!(controller.submit("hello").await, SubmitOutcome::Replied);
    assert_eq!(controller.messages(), vec![Message::user("hello"), Message::bot("Hi there")]);
    assert!(!controller.is_pending());

    let req = provider.last_request.borrow().clone().unwrap();
    assert_eq!(req.message, "hello");
    assert_eq!(req.session_id.as_str(), "wasm-session");
}

#[wasm_bindgen_test]
async fn controller_server_error_scenario() {
    let provider = FixedProvider::replying(Err(WidgetError::Http(500)));
    let controller = controller(provider);

    let outcome = controller.submit("hello").await;
    assert_eq!(outcome, SubmitOutcome::Failed(WidgetError::Http(500)));
    assert_eq!(
        controller.messages().last().unwrap().text(),
        "Sorry, something went wrong. Please try again later."
    );
}

#[wasm_bindgen_test]
async fn controller_empty_body_scenario() {
    let provider = FixedProvider::replying(Ok("{}".to_string()));
    let controller = controller(provider);

    controller.submit("hello").await;
    assert_eq!(
        controller.messages().last().unwrap().text(),
        "Sorry, I could not get a response."
    );
}

#[wasm_bindgen_test]
async fn controller_blank_input_is_noop() {
    let provider = FixedProvider::replying(Ok("{}".to_string()));
    let controller = controller(provider.clone());

    assert_eq!(controller.submit("   ").await, SubmitOutcome::Rejected(RejectReason::Empty));
    assert!(controller.messages().is_empty());
    assert_eq!(provider.calls.get(), 0);
}

#[wasm_bindgen_test]
fn controller_toggle_open() {
    let controller = controller(FixedProvider::replying(Ok("{}".to_string())));
    let original = controller.is_open();
    controller.toggle_open();
    controller.toggle_open();
    assert_eq!(controller.is_open(), original);
    assert!(controller.messages().is_empty());
}

#[wasm_bindgen_test]
async fn controller_greeting_failure_keeps_defaults() {
    let controller = controller(FixedProvider::replying(Ok("{}".to_string())));
    assert!(!controller.load_greeting().await);
    assert_eq!(controller.greeting().title, "Messages");
    assert_eq!(controller.greeting().welcome_message, "Hello! How can I help you today?");
}
