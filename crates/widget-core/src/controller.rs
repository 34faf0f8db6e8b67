//! Conversation controller — the widget's message-exchange state machine.
//!
//! ```text
//!            submit(text)            reply / failure
//!   Idle ───────────────────▶ Sending ───────────────▶ Idle
//! ```
//!
//! One request may be in flight at a time. A submit while `Sending` is
//! rejected, not queued. Provider failures become an ordinary bot message
//! and are never returned to the caller as `Err`.
//!
//! State lives behind `Rc<RefCell<..>>` so the presentation layer can move
//! a cheap clone into `spawn_local`. No borrow is held across an await.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use widget_types::{
    WidgetError,
    config::WidgetConfig,
    event::WidgetEvent,
    message::Message,
    session::SessionId,
};
use crate::event_bus::EventBus;
use crate::ports::{ReplyProvider, ReplyRequest};
use crate::reply::{parse_greeting, parse_reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    Sending,
}

/// Title and welcome bubble shown above the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub title: String,
    pub welcome_message: String,
}

#[derive(Debug, Clone)]
pub struct ConversationState {
    pub messages: Vec<Message>,
    pub phase: ControllerPhase,
    pub open: bool,
    pub greeting: Greeting,
}

impl ConversationState {
    fn new(config: &WidgetConfig) -> Self {
        Self {
            messages: Vec::new(),
            phase: ControllerPhase::Idle,
            open: config.start_open,
            greeting: Greeting {
                title: config.title.clone(),
                welcome_message: config.welcome_message.clone(),
            },
        }
    }

    pub fn pending(&self) -> bool {
        self.phase == ControllerPhase::Sending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input was empty after trimming
    Empty,
    /// A reply is still outstanding
    Busy,
}

/// What a call to [`ConversationController::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(RejectReason),
    /// The provider answered and its reply was appended
    Replied,
    /// The provider failed and the error fallback was appended
    Failed(WidgetError),
}

#[derive(Clone)]
pub struct ConversationController {
    session_id: SessionId,
    config: Rc<WidgetConfig>,
    provider: Rc<dyn ReplyProvider>,
    event_bus: EventBus,
    state: Rc<RefCell<ConversationState>>,
    greeting_requested: Rc<Cell<bool>>,
}

impl ConversationController {
    pub fn new(config: WidgetConfig, provider: Rc<dyn ReplyProvider>, event_bus: EventBus) -> Self {
        Self::with_session(config, provider, event_bus, SessionId::generate())
    }

    pub fn with_session(
        config: WidgetConfig,
        provider: Rc<dyn ReplyProvider>,
        event_bus: EventBus,
        session_id: SessionId,
    ) -> Self {
        let state = ConversationState::new(&config);
        Self {
            session_id,
            config: Rc::new(config),
            provider,
            event_bus,
            state: Rc::new(RefCell::new(state)),
            greeting_requested: Rc::new(Cell::new(false)),
        }
    }

    /// Send one user message and wait for the bot's answer.
    ///
    /// Everything up to the provider call runs synchronously on the first
    /// poll: the guard, the `Idle → Sending` transition, the user message
    /// and `TypingStarted`. A second submit polled after that point sees
    /// `Sending` and is rejected.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let request = match self.begin(text) {
            Ok(req) => req,
            Err(reason) => return SubmitOutcome::Rejected(reason),
        };

        log::debug!(
            "Sending message to {} (session {})",
            self.provider.provider_name(),
            self.session_id
        );
        let result = self
            .provider
            .send_message(&request)
            .await
            .and_then(|body| parse_reply(&body).into_result());

        self.finish(result)
    }

    fn begin(&self, text: &str) -> Result<ReplyRequest, RejectReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RejectReason::Empty);
        }

        {
            let mut state = self.state.borrow_mut();
            if state.pending() {
                return Err(RejectReason::Busy);
            }
            state.phase = ControllerPhase::Sending;
        }

        self.append(Message::user(text));
        self.event_bus.emit(WidgetEvent::TypingStarted);
        Ok(ReplyRequest::new(text, self.session_id.clone()))
    }

    fn finish(&self, result: widget_types::Result<Option<String>>) -> SubmitOutcome {
        self.event_bus.emit(WidgetEvent::TypingStopped);

        let outcome = match result {
            Ok(text) => {
                let text = text.unwrap_or_else(|| self.config.empty_reply_text.clone());
                self.append(Message::bot(text));
                SubmitOutcome::Replied
            }
            Err(e) => {
                log::error!("Error sending message to reply provider: {}", e);
                self.append(Message::bot(self.config.error_reply_text.clone()));
                SubmitOutcome::Failed(e)
            }
        };

        self.state.borrow_mut().phase = ControllerPhase::Idle;
        outcome
    }

    fn append(&self, message: Message) {
        self.state.borrow_mut().messages.push(message.clone());
        self.event_bus.emit(WidgetEvent::MessageAppended { message });
    }

    /// Flip panel visibility. Returns the new value.
    pub fn toggle_open(&self) -> bool {
        let open = {
            let mut state = self.state.borrow_mut();
            state.open = !state.open;
            state.open
        };
        self.event_bus.emit(WidgetEvent::OpenChanged { open });
        open
    }

    /// One-shot fetch of the provider's title and welcome message.
    ///
    /// Only the first call reaches the provider. On any failure the
    /// configured defaults stay in place. Returns whether the greeting
    /// changed.
    pub async fn load_greeting(&self) -> bool {
        if self.greeting_requested.replace(true) {
            return false;
        }

        let update = match self
            .provider
            .fetch_greeting()
            .await
            .and_then(|body| parse_greeting(&body))
        {
            Ok(update) => update,
            Err(e) => {
                log::warn!("Greeting unavailable, keeping defaults: {}", e);
                return false;
            }
        };

        if update.is_empty() {
            return false;
        }

        let greeting = {
            let mut state = self.state.borrow_mut();
            if let Some(title) = update.title {
                state.greeting.title = title;
            }
            if let Some(welcome) = update.welcome_message {
                state.greeting.welcome_message = welcome;
            }
            state.greeting.clone()
        };

        log::info!("Greeting loaded: {}", greeting.title);
        self.event_bus.emit(WidgetEvent::GreetingLoaded {
            title: greeting.title,
            welcome_message: greeting.welcome_message,
        });
        true
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn state(&self) -> Ref<'_, ConversationState> {
        self.state.borrow()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages.clone()
    }

    pub fn phase(&self) -> ControllerPhase {
        self.state.borrow().phase
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn greeting(&self) -> Greeting {
        self.state.borrow().greeting.clone()
    }
}
