//! UI-level state that drives rendering.
//! A read-only projection of the conversation controller, updated each
//! frame by draining the EventBus. Only `input_text` is owned by the UI.

use widget_types::config::WidgetConfig;
use widget_types::event::WidgetEvent;
use widget_types::message::Message;

/// State visible to UI panels
pub struct UiState {
    /// Header text
    pub title: String,
    /// First bot bubble, not part of `messages`
    pub welcome_message: String,
    /// Displayed conversation in order
    pub messages: Vec<Message>,
    /// Typing indicator visible
    pub typing: bool,
    /// Expanded panel (false shows the launcher)
    pub open: bool,
    /// Input field content
    pub input_text: String,
    /// Input field hint
    pub placeholder: String,
    /// Set when a new bubble arrived; the chat panel scrolls to it
    pub scroll_to_bottom: bool,
}

impl UiState {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            title: config.title.clone(),
            welcome_message: config.welcome_message.clone(),
            messages: Vec::new(),
            typing: false,
            open: config.start_open,
            input_text: String::new(),
            placeholder: config.placeholder.clone(),
            scroll_to_bottom: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<WidgetEvent>) {
        for event in events {
            match event {
                WidgetEvent::MessageAppended { message } => {
                    self.messages.push(message);
                    self.scroll_to_bottom = true;
                }
                WidgetEvent::TypingStarted => {
                    self.typing = true;
                    self.scroll_to_bottom = true;
                }
                WidgetEvent::TypingStopped => {
                    self.typing = false;
                }
                WidgetEvent::OpenChanged { open } => {
                    self.open = open;
                }
                WidgetEvent::GreetingLoaded {
                    title,
                    welcome_message,
                } => {
                    self.title = title;
                    self.welcome_message = welcome_message;
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.typing
    }

    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_busy()
    }

    /// Take the trimmed input for sending and clear the field.
    /// Leaves the field untouched when nothing can be sent.
    pub fn take_input(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input_text.trim().to_string();
        self.input_text.clear();
        Some(text)
    }
}
