//! Host page integration — where the widget finds its configuration and
//! how it attaches itself to the page.
//!
//! Configuration sources, first match wins:
//! 1. the options object handed to `mountChatWidget(options)`
//! 2. a global `window.chatWidgetConfig` object
//! 3. `data-*` attributes on a `<script data-webhook-url="...">` tag
//!
//! Mounting injects one `<style>` element into `<head>` and one fixed
//! container holding the render canvas into `<body>`.

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use widget_types::{
    config::{parse_timeout_ms, ThemeVariant, WidgetConfig},
    Result, WidgetError,
};

pub const CONTAINER_ID: &str = "chat-widget-container";
pub const CANVAS_ID: &str = "chat-widget-canvas";
pub const STYLE_ID: &str = "chat-widget-styles";
pub const COLLAPSED_CLASS: &str = "chat-widget-collapsed";
pub const GLOBAL_CONFIG_KEY: &str = "chatWidgetConfig";
const SCRIPT_SELECTOR: &str = "script[data-webhook-url]";

pub struct HostPage {
    document: Document,
}

impl HostPage {
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| WidgetError::JsInterop("no window.document available".to_string()))?;
        Ok(Self { document })
    }

    /// Resolve the widget configuration from the host page.
    pub fn read_config(&self, options: Option<&JsValue>) -> Result<WidgetConfig> {
        if let Some(options) = options.filter(|v| is_present(v)) {
            log::debug!("Reading widget config from mount options");
            return config_from_value(options);
        }

        if let Some(global) = self.global_config() {
            log::debug!("Reading widget config from window.{}", GLOBAL_CONFIG_KEY);
            return config_from_value(&global);
        }

        let script = self
            .document
            .query_selector(SCRIPT_SELECTOR)
            .map_err(|e| WidgetError::JsInterop(format!("{:?}", e)))?;
        match script {
            Some(tag) => config_from_attributes(|name| tag.get_attribute(name)),
            None => Err(WidgetError::Config(
                "The data-webhook-url attribute is missing from the <script> tag.".to_string(),
            )),
        }
    }

    fn global_config(&self) -> Option<JsValue> {
        let window = web_sys::window()?;
        js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_CONFIG_KEY))
            .ok()
            .filter(is_present)
    }

    /// True when the page itself carries a configuration, either the
    /// global object or an embedding `<script data-webhook-url>` tag
    pub fn has_page_config(&self) -> bool {
        self.global_config().is_some()
            || matches!(self.document.query_selector(SCRIPT_SELECTOR), Ok(Some(_)))
    }

    /// True once a widget container exists in the page
    pub fn is_mounted(&self) -> bool {
        self.document.get_element_by_id(CONTAINER_ID).is_some()
    }

    /// Inject the stylesheet and the container + canvas.
    pub fn mount(&self, stylesheet: &str, open: bool) -> Result<MountPoint> {
        if self.is_mounted() {
            return Err(WidgetError::JsInterop(format!(
                "#{} is already present in the page",
                CONTAINER_ID
            )));
        }

        let head = self
            .document
            .head()
            .ok_or_else(|| WidgetError::JsInterop("document has no <head>".to_string()))?;
        let body = self
            .document
            .body()
            .ok_or_else(|| WidgetError::JsInterop("document has no <body>".to_string()))?;

        let style = self.document.create_element("style").map_err(js_err)?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(stylesheet));
        head.append_child(&style).map_err(js_err)?;

        let container: HtmlElement = self
            .document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| WidgetError::JsInterop("container is not an HtmlElement".to_string()))?;
        container.set_id(CONTAINER_ID);

        let canvas: HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| WidgetError::JsInterop("canvas is not an HtmlCanvasElement".to_string()))?;
        canvas.set_id(CANVAS_ID);
        canvas.set_attribute("aria-label", "Chat widget").map_err(js_err)?;
        canvas.set_attribute("tabindex", "0").map_err(js_err)?;

        container.append_child(&canvas).map_err(js_err)?;
        body.append_child(&container).map_err(js_err)?;

        let mount = MountPoint { container, canvas };
        mount.set_open(open)?;
        log::info!("Chat widget mounted as #{}", CONTAINER_ID);
        Ok(mount)
    }
}

/// The injected container and its canvas
#[derive(Clone)]
pub struct MountPoint {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
}

impl MountPoint {
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }

    /// Collapse the container to the launcher button or expand it again
    pub fn set_open(&self, open: bool) -> Result<()> {
        self.container
            .class_list()
            .toggle_with_force(COLLAPSED_CLASS, !open)
            .map_err(js_err)?;
        Ok(())
    }
}

/// Deserialize a JS options object (camelCase keys) and validate it.
pub fn config_from_value(value: &JsValue) -> Result<WidgetConfig> {
    let config: WidgetConfig = value.into_serde()?;
    config.validate()
}

/// Build a configuration from `data-*` attributes on the embedding tag.
///
/// `attr` returns the raw attribute value for a full attribute name.
/// Unrecognised values for optional attributes fall back to defaults.
pub fn config_from_attributes(attr: impl Fn(&str) -> Option<String>) -> Result<WidgetConfig> {
    let url = attr("data-webhook-url").unwrap_or_default();
    let mut config = WidgetConfig::new(url);

    if let Some(title) = attr("data-title") {
        config.title = title;
    }
    if let Some(welcome) = attr("data-welcome-message") {
        config.welcome_message = welcome;
    }
    if let Some(placeholder) = attr("data-placeholder") {
        config.placeholder = placeholder;
    }
    if let Some(theme) = attr("data-theme") {
        match ThemeVariant::from_label(&theme) {
            Some(t) => config.theme = t,
            None => log::warn!("Unknown data-theme {:?}, using {}", theme, config.theme.label()),
        }
    }
    if let Some(flag) = attr("data-load-greeting") {
        config.load_greeting = parse_flag(&flag);
    }
    if let Some(flag) = attr("data-start-open") {
        config.start_open = parse_flag(&flag);
    }
    if let Some(timeout) = attr("data-timeout-ms") {
        match parse_timeout_ms(&timeout) {
            Some(parsed) => config.request_timeout_ms = parsed,
            None => log::warn!("Ignoring invalid data-timeout-ms {:?}", timeout),
        }
    }

    config.validate()
}

/// Boolean attribute: bare presence or anything but "false"/"0"/"no" is on
fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off")
}

fn is_present(value: &JsValue) -> bool {
    !value.is_undefined() && !value.is_null()
}

fn js_err(e: JsValue) -> WidgetError {
    WidgetError::JsInterop(format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_attributes_minimal() {
        let config = config_from_attributes(attrs(&[("data-webhook-url", "https://h.example/x")])).unwrap();
        assert_eq!(config, WidgetConfig::new("https://h.example/x"));
    }

    #[test]
    fn test_attributes_missing_url() {
        let err = config_from_attributes(attrs(&[("data-title", "Support")])).unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_attributes_empty_url() {
        let err = config_from_attributes(attrs(&[("data-webhook-url", "")])).unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_attributes_overrides() {
        let config = config_from_attributes(attrs(&[
            ("data-webhook-url", "https://h.example/x"),
            ("data-title", "Support"),
            ("data-welcome-message", "Hi!"),
            ("data-placeholder", "Ask away"),
            ("data-theme", "Midnight"),
            ("data-load-greeting", ""),
            ("data-start-open", "false"),
            ("data-timeout-ms", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.title, "Support");
        assert_eq!(config.welcome_message, "Hi!");
        assert_eq!(config.placeholder, "Ask away");
        assert_eq!(config.theme, ThemeVariant::Midnight);
        assert!(config.load_greeting);
        assert!(!config.start_open);
        assert_eq!(config.request_timeout_ms, Some(5000));
    }

    #[test]
    fn test_attributes_bad_optional_values_fall_back() {
        let config = config_from_attributes(attrs(&[
            ("data-webhook-url", "https://h.example/x"),
            ("data-theme", "neon"),
            ("data-timeout-ms", "soon"),
        ]))
        .unwrap();

        assert_eq!(config.theme, ThemeVariant::Dark);
        assert_eq!(config.request_timeout_ms, WidgetConfig::new("u").request_timeout_ms);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(""));
        assert!(parse_flag("true"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" FALSE "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn test_attributes_timeout_can_be_disabled() {
        for raw in ["none", "0"] {
            let config = config_from_attributes(attrs(&[
                ("data-webhook-url", "https://h.example/x"),
                ("data-timeout-ms", raw),
            ]))
            .unwrap();
            assert_eq!(config.request_timeout_ms, None, "{raw}");
        }
    }
}
