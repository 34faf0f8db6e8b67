//! Render channel between the conversation controller and the presentation layer.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! Events are queued for the UI to drain on its next frame; listeners are
//! notified synchronously on every emit so a renderer that only wakes on
//! demand (egui's `request_repaint`) can schedule that frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use widget_types::event::WidgetEvent;

type Listener = Rc<dyn Fn(&WidgetEvent)>;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<WidgetEvent>>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback run after each emitted event is queued.
    pub fn on_emit(&self, listener: impl Fn(&WidgetEvent) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Publish an event. Called by the controller.
    pub fn emit(&self, event: WidgetEvent) {
        self.queue.borrow_mut().push_back(event.clone());
        // Snapshot so a listener may register another without a double borrow
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in &listeners {
            listener(&event);
        }
    }

    /// Drain all queued events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
