use thiserror::Error;

/// Ошибка сетевой операции виджета
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// fetch не выполнился (сеть, CORS, сериализация запроса)
    #[error("network error: {0}")]
    Network(String),
    /// Ответ не 2xx и тело не удалось разобрать
    #[error("HTTP {0}")]
    Http(u16),
    /// Тело ответа не соответствует ожидаемому формату
    #[error("malformed response: {0}")]
    Decode(String),
    /// Сервер ответил `success: false`
    #[error("rejected by server: {0}")]
    Rejected(String),
}

impl ApiError {
    pub(crate) fn rejected(error: Option<String>) -> Self {
        ApiError::Rejected(error.unwrap_or_else(|| "unknown error".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Http(500).to_string(), "HTTP 500");
        assert_eq!(
            ApiError::rejected(Some("No file part".into())).to_string(),
            "rejected by server: No file part"
        );
        assert_eq!(
            ApiError::rejected(None).to_string(),
            "rejected by server: unknown error"
        );
    }
}
