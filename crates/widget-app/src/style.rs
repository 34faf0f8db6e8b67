//! Host stylesheet injected next to the widget container.
//! Positions the container; everything inside it is painted by egui.

use widget_platform::host::{CANVAS_ID, COLLAPSED_CLASS, CONTAINER_ID};
use widget_ui::theme::{css_hex, Palette, LAUNCHER_SIZE};

pub const WIDTH_PX: u32 = 350;
pub const HEIGHT_PX: u32 = 500;
pub const Z_INDEX: u32 = 9999;

/// Build the stylesheet for a palette
pub fn stylesheet(palette: &Palette) -> String {
    let collapsed = LAUNCHER_SIZE as u32 + 8;
    format!(
        "#{container} {{\n\
         \x20 position: fixed;\n\
         \x20 bottom: 20px;\n\
         \x20 right: 20px;\n\
         \x20 width: {width}px;\n\
         \x20 max-width: 90%;\n\
         \x20 height: {height}px;\n\
         \x20 border-radius: 16px;\n\
         \x20 overflow: hidden;\n\
         \x20 background: {background};\n\
         \x20 border: 1px solid {border};\n\
         \x20 box-shadow: 0 4px 24px rgba(0, 0, 0, 0.5);\n\
         \x20 z-index: {z};\n\
         }}\n\
         #{container}.{collapsed_class} {{\n\
         \x20 width: {collapsed}px;\n\
         \x20 height: {collapsed}px;\n\
         \x20 border-radius: 50%;\n\
         \x20 border: none;\n\
         \x20 background: transparent;\n\
         \x20 box-shadow: none;\n\
         }}\n\
         #{canvas} {{\n\
         \x20 display: block;\n\
         \x20 width: 100%;\n\
         \x20 height: 100%;\n\
         \x20 outline: none;\n\
         }}\n",
        container = CONTAINER_ID,
        canvas = CANVAS_ID,
        collapsed_class = COLLAPSED_CLASS,
        width = WIDTH_PX,
        height = HEIGHT_PX,
        collapsed = collapsed,
        background = css_hex(palette.background),
        border = css_hex(palette.border),
        z = Z_INDEX,
    )
}
