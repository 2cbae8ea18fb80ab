//! Chat Upload Widget - State
//!
//! Чистые переходы состояния виджета. Сеть и DOM сюда не попадают:
//! view model вызывает эти методы до отправки запроса и после получения ответа.

use crate::shared::api_error::ApiError;
use contracts::domain::a001_chat_upload::aggregate::{ChatMessage, UploadedFile};
use contracts::domain::a001_chat_upload::api::{ChatRequest, ChatResponse, UploadResponse};

/// Поведение виджета, задаётся конфигурацией
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetOptions {
    pub echo_user_message: bool,
    pub clear_input: bool,
    /// Без флага ошибки только логируются и состояние не меняют
    pub show_errors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Только дописывается
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub is_loading: bool,
    /// Только растёт: файлы не удаляются и не дедуплицируются
    pub uploaded_files: Vec<UploadedFile>,
    pub chat_error: Option<String>,
    pub upload_error: Option<String>,
    /// Запросы к `/chat`, ответ на которые ещё не применён
    pub pending_chats: usize,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить выбранные файлы в порядке выбора.
    ///
    /// `true` - нужен ровно один запрос `/upload` со всеми файлами;
    /// пустой выбор запроса не даёт.
    pub fn accept_files(&mut self, selected: &[UploadedFile]) -> bool {
        if selected.is_empty() {
            return false;
        }
        self.uploaded_files.extend_from_slice(selected);
        true
    }

    /// Подготовить запрос к `/chat`.
    ///
    /// Пустой (после trim) ввод - `None`, состояние не меняется.
    /// В запрос попадает только первый загруженный файл.
    pub fn begin_send(&mut self, options: &WidgetOptions) -> Option<ChatRequest> {
        if self.input_text.trim().is_empty() {
            return None;
        }

        let request = ChatRequest {
            message: self.input_text.clone(),
            filename: self.uploaded_files.first().map(|f| f.name.clone()),
        };

        if options.echo_user_message {
            self.messages.push(ChatMessage::user(self.input_text.clone()));
        }
        if options.clear_input {
            self.input_text.clear();
        }
        self.pending_chats += 1;
        self.is_loading = true;
        self.chat_error = None;

        Some(request)
    }

    /// Применить результат `/chat`: при успехе ровно одно сообщение ассистента
    pub fn finish_send(
        &mut self,
        outcome: Result<ChatResponse, ApiError>,
        options: &WidgetOptions,
    ) {
        self.pending_chats = self.pending_chats.saturating_sub(1);
        self.is_loading = self.pending_chats > 0;

        let failure = match outcome {
            Ok(response) if response.success => match response.result {
                Some(text) => {
                    self.messages.push(ChatMessage::assistant(text));
                    return;
                }
                None => ApiError::Decode("missing `result` in chat response".into()),
            },
            Ok(response) => ApiError::rejected(response.error),
            Err(e) => e,
        };
        if options.show_errors {
            self.chat_error = Some(failure.to_string());
        }
    }

    /// Применить результат `/upload`. Список файлов не откатывается.
    pub fn finish_upload(
        &mut self,
        outcome: Result<UploadResponse, ApiError>,
        options: &WidgetOptions,
    ) {
        let failure = match outcome {
            Ok(response) if response.success => return,
            Ok(response) => ApiError::rejected(response.error),
            Err(e) => e,
        };
        if options.show_errors {
            self.upload_error = Some(failure.to_string());
        }
    }

    /// Ошибки для показа, сначала загрузка
    pub fn errors(&self) -> Vec<String> {
        self.upload_error
            .iter()
            .chain(self.chat_error.iter())
            .cloned()
            .collect()
    }

    pub fn dismiss_errors(&mut self) {
        self.chat_error = None;
        self.upload_error = None;
    }
}
