//! Chat Widget App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It resolves the host configuration, mounts the container into the page,
//! and hands the webhook provider and conversation controller to egui.

mod app;
mod style;

use wasm_bindgen::prelude::*;

use widget_platform::host::HostPage;
use widget_types::Result;
use widget_ui::theme::Palette;

/// WASM entry point — runs once when the module is instantiated
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat widget WASM starting...");

    let host = match HostPage::current() {
        Ok(host) => host,
        Err(e) => {
            log::error!("Chat widget cannot start: {}", e);
            return;
        }
    };

    if host.has_page_config() {
        mount(&host, None);
    } else {
        log::debug!("No page configuration found, waiting for mountChatWidget()");
    }
}

/// Mount the widget with an explicit options object.
/// `undefined` falls back to the page configuration.
#[wasm_bindgen(js_name = mountChatWidget)]
pub fn mount_chat_widget(options: JsValue) {
    match HostPage::current() {
        Ok(host) => mount(&host, Some(&options)),
        Err(e) => log::error!("Chat widget cannot mount: {}", e),
    }
}

fn mount(host: &HostPage, options: Option<&JsValue>) {
    if host.is_mounted() {
        log::warn!("Chat widget is already mounted, ignoring mount request");
        return;
    }
    if let Err(e) = try_mount(host, options) {
        log::error!("Chat widget not mounted: {}", e);
    }
}

fn try_mount(host: &HostPage, options: Option<&JsValue>) -> Result<()> {
    let config = host.read_config(options)?;
    let palette = Palette::for_variant(config.theme);
    let mount_point = host.mount(&style::stylesheet(&palette), config.start_open)?;
    let canvas = mount_point.canvas();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::WidgetApp::new(cc, config, mount_point)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });

    Ok(())
}
