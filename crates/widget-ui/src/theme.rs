//! UI theme — one palette per [`ThemeVariant`]

use egui::{Color32, CornerRadius, Stroke, Vec2};
use widget_types::config::ThemeVariant;

pub const BUBBLE_RADIUS: u8 = 18;
pub const BUBBLE_TAIL_RADIUS: u8 = 4;
pub const PANEL_PADDING: Vec2 = Vec2::new(15.0, 10.0);
pub const LAUNCHER_SIZE: f32 = 56.0;

/// Colours used by every panel. Hex equivalents feed the host stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub user_bubble: Color32,
    pub bot_bubble: Color32,
    pub input_bg: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub typing_dot: Color32,
    pub dark_mode: bool,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(0, 0, 0),
        border: Color32::from_rgb(0x38, 0x44, 0x4d),
        text: Color32::from_rgb(255, 255, 255),
        text_secondary: Color32::from_rgb(0x71, 0x76, 0x7b),
        user_bubble: Color32::from_rgb(0x1d, 0x9b, 0xf0),
        bot_bubble: Color32::from_rgb(0x2f, 0x33, 0x36),
        input_bg: Color32::from_rgb(0x2f, 0x33, 0x36),
        accent: Color32::from_rgb(0x1d, 0x9b, 0xf0),
        accent_hover: Color32::from_rgb(0x1a, 0x8c, 0xd8),
        typing_dot: Color32::from_rgb(0xa0, 0xa0, 0xa0),
        dark_mode: true,
    };

    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(255, 255, 255),
        border: Color32::from_rgb(0xe1, 0xe8, 0xed),
        text: Color32::from_rgb(0x0f, 0x14, 0x19),
        text_secondary: Color32::from_rgb(0x53, 0x64, 0x71),
        user_bubble: Color32::from_rgb(0x1d, 0x9b, 0xf0),
        bot_bubble: Color32::from_rgb(0xef, 0xf3, 0xf4),
        input_bg: Color32::from_rgb(0xef, 0xf3, 0xf4),
        accent: Color32::from_rgb(0x1d, 0x9b, 0xf0),
        accent_hover: Color32::from_rgb(0x1a, 0x8c, 0xd8),
        typing_dot: Color32::from_rgb(0x88, 0x99, 0xa6),
        dark_mode: false,
    };

    pub const MIDNIGHT: Palette = Palette {
        background: Color32::from_rgb(0x15, 0x20, 0x2b),
        border: Color32::from_rgb(0x38, 0x44, 0x4d),
        text: Color32::from_rgb(255, 255, 255),
        text_secondary: Color32::from_rgb(0x88, 0x99, 0xa6),
        user_bubble: Color32::from_rgb(0x1d, 0x9b, 0xf0),
        bot_bubble: Color32::from_rgb(0x25, 0x33, 0x41),
        input_bg: Color32::from_rgb(0x25, 0x33, 0x41),
        accent: Color32::from_rgb(0x1d, 0x9b, 0xf0),
        accent_hover: Color32::from_rgb(0x1a, 0x8c, 0xd8),
        typing_dot: Color32::from_rgb(0x88, 0x99, 0xa6),
        dark_mode: true,
    };

    pub fn for_variant(variant: ThemeVariant) -> Palette {
        match variant {
            ThemeVariant::Dark => Palette::DARK,
            ThemeVariant::Light => Palette::LIGHT,
            ThemeVariant::Midnight => Palette::MIDNIGHT,
        }
    }

    /// Bubble corners: rounded except the one pointing at the author
    pub fn bubble_radius(is_user: bool) -> CornerRadius {
        let (sw, se) = if is_user {
            (BUBBLE_RADIUS, BUBBLE_TAIL_RADIUS)
        } else {
            (BUBBLE_TAIL_RADIUS, BUBBLE_RADIUS)
        };
        CornerRadius {
            nw: BUBBLE_RADIUS,
            ne: BUBBLE_RADIUS,
            sw,
            se,
        }
    }
}

/// `#rrggbb` for CSS
pub fn css_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Apply a palette to an egui context
pub fn apply_theme(ctx: &egui::Context, palette: &Palette) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = palette.dark_mode;
    style.visuals.panel_fill = palette.background;
    style.visuals.window_fill = palette.background;
    style.visuals.extreme_bg_color = palette.input_bg;
    style.visuals.override_text_color = Some(palette.text);

    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    style.visuals.widgets.inactive.bg_fill = palette.input_bg;
    style.visuals.widgets.inactive.weak_bg_fill = palette.input_bg;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_secondary);
    style.visuals.widgets.hovered.bg_fill = palette.accent_hover;
    style.visuals.widgets.hovered.weak_bg_fill = palette.accent_hover;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    style.visuals.widgets.active.bg_fill = palette.accent;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, palette.text);

    style.visuals.selection.bg_fill = palette.accent.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, palette.accent);

    style.spacing.item_spacing = Vec2::new(8.0, 10.0);

    ctx.set_style(style);
}
