use serde::Serialize;

/// JSON error response format returned by every route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JamlinkError {
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
    /// HTTP status code.
    pub status: u16,
    /// HTTP status reason phrase (e.g. "Bad Request").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
    /// The request path that caused the error.
    pub path: String,
}

impl JamlinkError {
    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_status(400, "Bad Request", message, path)
    }

    pub fn not_found(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_status(404, "Not Found", message, path)
    }

    pub fn internal(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_status(500, "Internal Server Error", message, path)
    }

    fn with_status(
        status: u16,
        error: &str,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
            status,
            error: error.into(),
            message: message.into(),
            path: path.into(),
        }
    }
}
