//! Chat Upload Widget - Model (API functions)

use crate::shared::api_error::ApiError;
use crate::shared::config::WidgetConfig;
use contracts::domain::a001_chat_upload::api::{
    ChatRequest, ChatResponse, UploadResponse, UPLOAD_FIELD_NAME,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Загрузить файлы одним multipart-запросом, все под полем `file`
pub async fn upload_files(
    config: &WidgetConfig,
    files: Vec<web_sys::File>,
) -> Result<UploadResponse, ApiError> {
    let form_data = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for file in &files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    let url = config.upload_url();
    log::debug!("POST {} ({} file(s))", url, files.len());

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(status, response.ok(), &body)
}

/// Отправить сообщение
pub async fn send_chat(
    config: &WidgetConfig,
    request: &ChatRequest,
) -> Result<ChatResponse, ApiError> {
    let url = config.chat_url();
    log::debug!("POST {} (filename: {:?})", url, request.filename);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(status, response.ok(), &body)
}

/// Сервер сообщает об ошибках JSON-телом и кодом 400/500, поэтому тело
/// разбирается при любом статусе. Неразборчивое тело при не-2xx - `Http`.
fn decode_body<T: DeserializeOwned>(status: u16, ok: bool, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(data) => Ok(data),
        Err(_) if !ok => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_on_bad_request_is_decoded() {
        let resp: ChatResponse =
            decode_body(400, false, r#"{"error":"Message cannot be empty"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Message cannot be empty"));
    }

    #[test]
    fn test_html_error_page_is_http_error() {
        let err = decode_body::<UploadResponse>(413, false, "<html>Too Large</html>").unwrap_err();
        assert_eq!(err, ApiError::Http(413));
    }

    #[test]
    fn test_garbage_on_ok_is_decode_error() {
        let err = decode_body::<ChatResponse>(200, true, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
