//! Widget configuration
//!
//! The host page configures the widget either with an options object passed
//! to `mount_chat_widget` or with `data-*` attributes on the mount element.
//! Anything not provided falls back to [`WidgetConfig::default`].

use super::api_utils::join_url;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Empty means same origin
    pub api_base: String,
    pub upload_path: String,
    pub chat_path: String,
    pub log_level: String,
    /// Append the user's own message to the transcript on send
    pub echo_user_messages: bool,
    /// Clear the input after a message has been dispatched
    pub clear_input_on_send: bool,
    /// Show request failures in an error bar; otherwise they are only logged
    pub show_errors: bool,
    pub drop_hint: String,
    pub select_label: String,
    pub files_heading: String,
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            upload_path: "/upload".to_string(),
            chat_path: "/chat".to_string(),
            log_level: "debug".to_string(),
            echo_user_messages: false,
            clear_input_on_send: false,
            show_errors: false,
            drop_hint: "Glissez vos fichiers ici ou".to_string(),
            select_label: "Sélectionnez des fichiers".to_string(),
            files_heading: "Fichiers téléchargés:".to_string(),
            placeholder: "Écrivez votre message...".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn upload_url(&self) -> String {
        join_url(&self.api_base, &self.upload_path)
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.api_base, &self.chat_path)
    }

    /// Unknown level names fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Debug)
    }

    /// Apply one `data-*` attribute, given in dataset (camelCase) form.
    /// Unknown keys are ignored.
    pub fn apply_attribute(&mut self, key: &str, value: &str) {
        match key {
            "apiBase" => self.api_base = value.to_string(),
            "uploadPath" => self.upload_path = value.to_string(),
            "chatPath" => self.chat_path = value.to_string(),
            "logLevel" => self.log_level = value.to_string(),
            "echoUserMessages" => self.echo_user_messages = parse_flag(value),
            "clearInputOnSend" => self.clear_input_on_send = parse_flag(value),
            "showErrors" => self.show_errors = parse_flag(value),
            "dropHint" => self.drop_hint = value.to_string(),
            "selectLabel" => self.select_label = value.to_string(),
            "filesHeading" => self.files_heading = value.to_string(),
            "placeholder" => self.placeholder = value.to_string(),
            _ => {}
        }
    }

    /// Read configuration from the mount element's `data-*` attributes
    pub fn from_element(element: &web_sys::HtmlElement) -> Self {
        let dataset = element.dataset();
        let mut config = Self::default();
        for key in ATTRIBUTE_KEYS {
            if let Some(value) = dataset.get(key) {
                config.apply_attribute(key, &value);
            }
        }
        config
    }

    /// Decode an options object passed from JavaScript; `undefined`/`null`
    /// yields the defaults.
    pub fn from_js(options: wasm_bindgen::JsValue) -> Result<Self, String> {
        if options.is_undefined() || options.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(options).map_err(|e| e.to_string())
    }
}

const ATTRIBUTE_KEYS: [&str; 11] = [
    "apiBase",
    "uploadPath",
    "chatPath",
    "logLevel",
    "echoUserMessages",
    "clearInputOnSend",
    "showErrors",
    "dropHint",
    "selectLabel",
    "filesHeading",
    "placeholder",
];

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_are_relative() {
        let config = WidgetConfig::default();
        assert_eq!(config.upload_url(), "/upload");
        assert_eq!(config.chat_url(), "/chat");
        assert!(!config.echo_user_messages);
        assert!(!config.clear_input_on_send);
        assert!(!config.show_errors);
    }

    #[test]
    fn test_api_base() {
        let config = WidgetConfig {
            api_base: "http://127.0.0.1:5000".into(),
            ..Default::default()
        };
        assert_eq!(config.upload_url(), "http://127.0.0.1:5000/upload");
        assert_eq!(config.chat_url(), "http://127.0.0.1:5000/chat");
    }

    #[test]
    fn test_log_level() {
        let mut config = WidgetConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "warn".into();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "verbose".into();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_apply_attribute() {
        let mut config = WidgetConfig::default();
        config.apply_attribute("chatPath", "/api/chat");
        config.apply_attribute("echoUserMessages", "yes");
        config.apply_attribute("clearInputOnSend", "0");
        config.apply_attribute("showErrors", "true");
        config.apply_attribute("unknown", "ignored");
        assert_eq!(config.chat_url(), "/api/chat");
        assert!(config.echo_user_messages);
        assert!(!config.clear_input_on_send);
        assert!(config.show_errors);
    }

    #[test]
    fn test_partial_options_keep_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"apiBase":"https://example.com","clearInputOnSend":true}"#)
                .unwrap();
        assert_eq!(config.chat_url(), "https://example.com/chat");
        assert!(config.clear_input_on_send);
        assert_eq!(config.placeholder, "Écrivez votre message...");
    }
}
