//! Chat Upload Widget - View Model

use super::model::{send_chat, upload_files};
use super::state::{WidgetOptions, WidgetState};
use crate::shared::config::WidgetConfig;
use crate::shared::file_utils::describe;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ChatUploadVm {
    pub state: RwSignal<WidgetState>,
    pub config: StoredValue<WidgetConfig>,
}

impl ChatUploadVm {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            state: RwSignal::new(WidgetState::new()),
            config: StoredValue::new(config),
        }
    }

    fn options(&self) -> WidgetOptions {
        self.config.with_value(|c| WidgetOptions {
            echo_user_message: c.echo_user_messages,
            clear_input: c.clear_input_on_send,
            show_errors: c.show_errors,
        })
    }

    /// Выбор через диалог или drop: дописать файлы и отправить их одним запросом
    pub fn handle_file_selection(&self, files: Vec<web_sys::File>) {
        let described: Vec<_> = files.iter().map(describe).collect();
        let dispatch = self
            .state
            .try_update(|s| s.accept_files(&described))
            .unwrap_or(false);
        if !dispatch {
            return;
        }

        let vm = *self;
        let options = self.options();
        let config = self.config.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = upload_files(&config, files).await;
            match &outcome {
                Ok(resp) if resp.success => log::info!("File uploaded: {:?}", resp),
                Ok(resp) => log::error!("Upload failed: {:?}", resp.error),
                Err(e) => log::error!("Error uploading file: {}", e),
            }
            vm.state.update(|s| s.finish_upload(outcome, &options));
        });
    }

    pub fn handle_send_message(&self) {
        let options = self.options();
        let Some(request) = self
            .state
            .try_update(|s| s.begin_send(&options))
            .flatten()
        else {
            return;
        };

        let vm = *self;
        let config = self.config.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = send_chat(&config, &request).await;
            match &outcome {
                Ok(resp) if resp.success => log::debug!("Chat response received"),
                Ok(resp) => log::error!("Chat failed: {:?}", resp.error),
                Err(e) => log::error!("Error sending message: {}", e),
            }
            vm.state.update(|s| s.finish_send(outcome, &options));
        });
    }

    pub fn set_input(&self, text: String) {
        self.state.update(|s| s.input_text = text);
    }

    pub fn dismiss_errors(&self) {
        self.state.update(|s| s.dismiss_errors());
    }
}
