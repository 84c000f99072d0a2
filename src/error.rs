//! Error types for the homework bot

/// Errors that can occur while polling and notifying
#[derive(Debug, thiserror::Error)]
pub enum HomeworkBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Homework API unavailable: {0}")]
    ApiUnavailable(String),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("No homework in the API response")]
    NoHomeworkFound,

    #[error("Homework entry is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("Unknown review status '{0}'")]
    UnknownVerdict(String),

    #[error("Notifier error: {0}")]
    Notifier(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for homework bot operations
pub type Result<T> = std::result::Result<T, HomeworkBotError>;
