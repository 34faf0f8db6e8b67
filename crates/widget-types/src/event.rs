use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Events emitted by the conversation controller.
/// The presentation layer drains these for reactive updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// A message was appended to the conversation
    MessageAppended { message: Message },

    /// A reply request went out; show the typing indicator
    TypingStarted,

    /// The reply request settled; hide the typing indicator
    TypingStopped,

    /// The panel was expanded or collapsed
    OpenChanged { open: bool },

    /// The greeting fetch replaced the title and welcome message
    GreetingLoaded { title: String, welcome_message: String },
}
