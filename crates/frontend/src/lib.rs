pub mod domain;
pub mod shared;

use domain::a001_chat_upload::ui::widget::ChatUploadWidget;
use shared::config::WidgetConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Element the widget mounts into automatically, if the page has one
const DEFAULT_MOUNT_ID: &str = "root";

fn init_logging(config: &WidgetConfig) {
    // initializes logging using the `log` crate; a second call is a no-op
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();
}

fn mount(target: web_sys::HtmlElement, config: WidgetConfig) {
    init_logging(&config);
    log::debug!(
        "mounting chat widget (upload: {}, chat: {})",
        config.upload_url(),
        config.chat_url()
    );
    leptos::mount::mount_to(target, move || {
        leptos::view! { <ChatUploadWidget config=config /> }
    })
    .forget();
}

/// Mount the widget into a host-provided element.
///
/// `options` is a plain object with [`WidgetConfig`] fields in camelCase,
/// or `undefined` for the defaults.
#[wasm_bindgen]
pub fn mount_chat_widget(target: web_sys::HtmlElement, options: JsValue) -> Result<(), JsValue> {
    let config = WidgetConfig::from_js(options).map_err(|e| JsValue::from_str(&e))?;
    mount(target, config);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DEFAULT_MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match target {
        Some(target) => {
            let config = WidgetConfig::from_element(&target);
            mount(target, config);
        }
        // Хост смонтирует виджет сам через mount_chat_widget
        None => console_error_panic_hook::set_once(),
    }
}
