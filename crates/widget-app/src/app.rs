//! Main egui application — renders the widget and drives the conversation controller.

use std::rc::Rc;

use egui::{self, CentralPanel};

use widget_core::controller::{ConversationController, SubmitOutcome};
use widget_core::event_bus::EventBus;
use widget_core::ports::ReplyProvider;
use widget_platform::host::MountPoint;
use widget_platform::webhook::WebhookProvider;
use widget_types::config::WidgetConfig;
use widget_ui::panels::chat::{self, ChatAction};
use widget_ui::panels::launcher;
use widget_ui::state::UiState;
use widget_ui::theme::{self, Palette};

/// The main application state
pub struct WidgetApp {
    controller: ConversationController,
    ui_state: UiState,
    palette: Palette,
    mount_point: MountPoint,
    first_frame: bool,
}

impl WidgetApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: WidgetConfig, mount_point: MountPoint) -> Self {
        let provider: Rc<dyn ReplyProvider> = Rc::new(WebhookProvider::from_config(&config));

        // Replies land outside the frame loop; wake egui when they do
        let event_bus = EventBus::new();
        let ctx = cc.egui_ctx.clone();
        event_bus.on_emit(move |_| ctx.request_repaint());

        let palette = Palette::for_variant(config.theme);
        let ui_state = UiState::new(&config);
        let provider_name = provider.provider_name().to_string();
        let controller = ConversationController::new(config, provider, event_bus);
        log::info!(
            "Chat session {} started with the {} provider",
            controller.session_id(),
            provider_name
        );

        Self {
            controller,
            ui_state,
            palette,
            mount_point,
            first_frame: true,
        }
    }

    /// Hand a submitted message to the controller (async)
    fn dispatch_message(&self, text: String) {
        let controller = self.controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match controller.submit(&text).await {
                SubmitOutcome::Rejected(reason) => {
                    log::debug!("Message not sent: {:?}", reason);
                }
                SubmitOutcome::Failed(e) => {
                    log::debug!("Turn ended with fallback reply: {}", e);
                }
                SubmitOutcome::Replied => {}
            }
        });
    }

    /// Fetch the greeting once in the background; defaults stay on failure
    fn load_greeting(&self) {
        let controller = self.controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.load_greeting().await;
        });
    }

    fn toggle_open(&self) {
        let open = self.controller.toggle_open();
        log::debug!("Chat widget {}", if open { "expanded" } else { "collapsed" });
    }
}

impl eframe::App for WidgetApp {
    /// The container paints its own background, so the collapsed launcher
    /// keeps rounded corners
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx, &self.palette);
            if self.controller.config().load_greeting {
                self.load_greeting();
            }
            self.first_frame = false;
        }

        // Drain events from the controller
        let was_open = self.ui_state.open;
        if self.controller.event_bus().has_pending() {
            self.ui_state.process_events(self.controller.event_bus().drain());
            ctx.request_repaint();
        }

        if self.ui_state.open != was_open {
            if let Err(e) = self.mount_point.set_open(self.ui_state.open) {
                log::error!("Failed to resize widget container: {}", e);
            }
        }

        let frame = egui::Frame::default().fill(if self.ui_state.open {
            self.palette.background
        } else {
            egui::Color32::TRANSPARENT
        });

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            if self.ui_state.open {
                match chat::chat_panel(ui, &mut self.ui_state, &self.palette) {
                    Some(ChatAction::Send(text)) => self.dispatch_message(text),
                    Some(ChatAction::Collapse) => self.toggle_open(),
                    None => {}
                }
            } else if launcher::launcher(ui, &self.palette) {
                self.toggle_open();
            }
        });
    }
}
