use serde::{Deserialize, Serialize};

/// Сообщение в ленте чата
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    /// Создать сообщение ассистента (ответ `/chat`)
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
            timestamp: None,
        }
    }

    /// Создать сообщение пользователя
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
            timestamp: None,
        }
    }
}

/// Описание выбранного или перетащенного файла
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// Размер в байтах
    pub size: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Размер в килобайтах с двумя знаками: 10240 -> "10.00 KB"
    pub fn display_size(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }

    /// Строка для списка загруженных файлов
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.display_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size() {
        assert_eq!(UploadedFile::new("a.txt", 10240).display_size(), "10.00 KB");
        assert_eq!(UploadedFile::new("b.png", 2048).display_size(), "2.00 KB");
        assert_eq!(UploadedFile::new("empty", 0).display_size(), "0.00 KB");
        assert_eq!(UploadedFile::new("c.bin", 1536).display_size(), "1.50 KB");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(
            UploadedFile::new("a.txt", 10240).display_label(),
            "a.txt (10.00 KB)"
        );
    }

    #[test]
    fn test_message_wire_shape() {
        let json = serde_json::to_value(ChatMessage::assistant("hi there")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hi there", "isUser": false }));

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"text":"hello","isUser":true,"timestamp":"12:00"}"#).unwrap();
        assert!(parsed.is_user);
        assert_eq!(parsed.timestamp.as_deref(), Some("12:00"));
    }
}
