//! Launcher — the round button shown while the widget is collapsed.

use egui::{self, CornerRadius, RichText, Vec2};
use crate::theme::{Palette, LAUNCHER_SIZE};

/// Render the launcher. Returns true when clicked.
pub fn launcher(ui: &mut egui::Ui, palette: &Palette) -> bool {
    let mut clicked = false;
    ui.centered_and_justified(|ui| {
        let button = egui::Button::new(RichText::new("💬").size(24.0))
            .fill(palette.accent)
            .corner_radius(CornerRadius::same((LAUNCHER_SIZE / 2.0) as u8))
            .min_size(Vec2::splat(LAUNCHER_SIZE));
        clicked = ui.add(button).on_hover_text("Open chat").clicked();
    });
    clicked
}
