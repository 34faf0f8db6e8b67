//! Chat panel — header, conversation bubbles, typing indicator and input row.

use egui::{self, Align, Color32, CornerRadius, Layout, RichText, ScrollArea, Sense, Vec2};
use crate::state::UiState;
use crate::theme::*;

const INPUT_AREA_HEIGHT: f32 = 64.0;
/// Header control that collapses the panel to the launcher
pub const COLLAPSE_LABEL: &str = "_";
const TYPING_PERIOD_SECS: f64 = 1.4;
/// Per-dot animation lead, matching a staggered CSS bounce
const TYPING_LEADS_SECS: [f64; 3] = [0.32, 0.16, 0.0];

/// What the user asked for this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Send(String),
    Collapse,
}

/// Render the expanded widget. Returns an action when the user submits
/// input or collapses the panel.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, palette: &Palette) -> Option<ChatAction> {
    let mut action = None;

    ui.vertical(|ui| {
        // Header
        egui::Frame::default()
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&state.title)
                            .color(palette.text)
                            .strong()
                            .size(18.0),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let collapse = ui
                            .add(egui::Button::new(RichText::new(COLLAPSE_LABEL).color(palette.text_secondary)).frame(false))
                            .on_hover_text("Minimize");
                        if collapse.clicked() {
                            action = Some(ChatAction::Collapse);
                        }
                    });
                });
            });

        ui.separator();

        // Messages area
        let messages_height = (ui.available_height() - INPUT_AREA_HEIGHT).max(0.0);
        ScrollArea::vertical()
            .max_height(messages_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(PANEL_PADDING.y);
                render_bubble(ui, &state.welcome_message, false, palette);
                for message in &state.messages {
                    render_bubble(ui, message.text(), message.is_user(), palette);
                }
                if state.typing {
                    typing_indicator(ui, palette);
                }
                if state.scroll_to_bottom {
                    ui.scroll_to_cursor(Some(Align::BOTTOM));
                    state.scroll_to_bottom = false;
                }
            });

        ui.separator();

        // Input area
        ui.horizontal(|ui| {
            ui.add_space(PANEL_PADDING.y);
            let input = egui::TextEdit::singleline(&mut state.input_text)
                .hint_text(state.placeholder.as_str())
                .desired_width(ui.available_width() - 80.0)
                .margin(Vec2::new(15.0, 10.0))
                .font(egui::FontId::proportional(15.0));

            let response = ui.add(input);

            let send_enabled = state.can_send();
            let send_btn = ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("Send").color(Color32::WHITE))
                    .fill(if send_enabled { palette.accent } else { palette.input_bg })
                    .corner_radius(CornerRadius::same(18))
                    .min_size(Vec2::new(56.0, 36.0)),
            );

            // Submit on Enter or button click
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter || send_btn.clicked() {
                if let Some(text) = state.take_input() {
                    action = Some(ChatAction::Send(text));
                }
                response.request_focus();
            }
        });
    });

    action
}

fn render_bubble(ui: &mut egui::Ui, text: &str, is_user: bool, palette: &Palette) {
    let (layout, fill, text_color) = if is_user {
        (Layout::right_to_left(Align::TOP), palette.user_bubble, Color32::WHITE)
    } else {
        (Layout::left_to_right(Align::TOP), palette.bot_bubble, palette.text)
    };
    let max_width = ui.available_width() * 0.8;

    ui.with_layout(layout, |ui| {
        ui.add_space(PANEL_PADDING.x);
        egui::Frame::default()
            .fill(fill)
            .corner_radius(Palette::bubble_radius(is_user))
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.add(egui::Label::new(RichText::new(text).color(text_color)).wrap());
            });
    });
}

fn typing_indicator(ui: &mut egui::Ui, palette: &Palette) {
    ui.with_layout(Layout::left_to_right(Align::TOP), |ui| {
        ui.add_space(PANEL_PADDING.x);
        egui::Frame::default()
            .inner_margin(PANEL_PADDING)
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 12.0), Sense::hover());
                let time = ui.input(|i| i.time);
                for index in 0..TYPING_LEADS_SECS.len() {
                    let center = egui::pos2(rect.left() + 6.0 + index as f32 * 14.0, rect.center().y);
                    let radius = 4.0 * dot_scale(time, index);
                    ui.painter().circle_filled(center, radius, palette.typing_dot);
                }
            });
    });
    ui.ctx().request_repaint();
}

/// Scale of a typing dot at `time` seconds: 0 at 0%/80%/100% of the
/// period, 1 at 40%, linear in between.
pub fn dot_scale(time: f64, index: usize) -> f32 {
    let lead = TYPING_LEADS_SECS.get(index).copied().unwrap_or(0.0);
    let phase = ((time + lead) / TYPING_PERIOD_SECS).rem_euclid(1.0);
    let scale = if phase <= 0.4 {
        phase / 0.4
    } else if phase <= 0.8 {
        (0.8 - phase) / 0.4
    } else {
        0.0
    };
    scale as f32
}
