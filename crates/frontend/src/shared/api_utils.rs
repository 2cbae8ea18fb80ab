//! API utilities for widget-backend communication
//!
//! Provides helper functions for constructing endpoint URLs.

/// Build a full endpoint URL from a base and a path
///
/// An empty base keeps the path relative, so requests go to the page's own
/// origin. Slashes between the two parts are normalised.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
///
/// assert_eq!(join_url("", "/upload"), "/upload");
/// assert_eq!(join_url("http://127.0.0.1:5000/", "chat"), "http://127.0.0.1:5000/chat");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    let base = base.trim_end_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_relative() {
        assert_eq!(join_url("", "/upload"), "/upload");
        assert_eq!(join_url("", "chat"), "/chat");
    }

    #[test]
    fn test_join_absolute() {
        assert_eq!(
            join_url("https://example.com:5000", "/chat"),
            "https://example.com:5000/chat"
        );
        assert_eq!(
            join_url("https://example.com/api/", "/upload"),
            "https://example.com/api/upload"
        );
    }
}
