//! DTO для эндпоинтов `/upload` и `/chat`
//!
//! Сервер отвечает на ошибки телом `{ "error": "..." }` без поля `success`,
//! поэтому все поля ответов имеют значения по умолчанию.

use serde::{Deserialize, Serialize};

/// Имя поля multipart-формы, под которым уходит каждый файл
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Тело запроса `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Имя первого загруженного файла; поле не отправляется, если файлов нет
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Ответ `POST /chat`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub subtask_history: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Ответ `POST /upload`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_without_file_omits_filename() {
        let req = ChatRequest {
            message: "hello".into(),
            filename: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "message": "hello" })
        );
    }

    #[test]
    fn test_chat_request_with_file() {
        let req = ChatRequest {
            message: "summarize".into(),
            filename: Some("a.txt".into()),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "message": "summarize", "filename": "a.txt" })
        );
    }

    #[test]
    fn test_chat_response_success() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"success":true,"result":"hi there","subtask_history":["hi there"]}"#,
        )
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.result.as_deref(), Some("hi there"));
        assert_eq!(resp.subtask_history.len(), 1);
    }

    #[test]
    fn test_error_bodies_decode_as_failures() {
        let chat: ChatResponse =
            serde_json::from_str(r#"{"error":"Message cannot be empty"}"#).unwrap();
        assert!(!chat.success);
        assert_eq!(chat.error.as_deref(), Some("Message cannot be empty"));

        let upload: UploadResponse = serde_json::from_str(r#"{"error":"No file part"}"#).unwrap();
        assert!(!upload.success);
        assert_eq!(upload.error.as_deref(), Some("No file part"));
    }

    #[test]
    fn test_upload_response_success() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"success":true,"filename":"a.txt","size":10240}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.filename.as_deref(), Some("a.txt"));
        assert_eq!(resp.size, Some(10240));
    }
}
