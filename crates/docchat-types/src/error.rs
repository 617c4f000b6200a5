use thiserror::Error;

/// Shown when indexing is requested with nothing selected
pub const NO_DOCUMENT_MESSAGE: &str = "Please select a PDF file to index.";
/// Shown when a blank question is submitted
pub const EMPTY_QUESTION_MESSAGE: &str = "Please enter a question.";
/// Generic message for index failures the backend did not explain
pub const INDEX_FAILED_MESSAGE: &str = "Failed to index document.";
/// Generic message for query failures the backend did not explain
pub const QUERY_FAILED_MESSAGE: &str = "Failed to get an answer.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Detected locally, never sent to the backend
    #[error("{0}")]
    Validation(String),

    /// The backend refused the request; the message is user-facing
    #[error("{0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl ClientError {
    /// True for errors that are safe to show the user as-is
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ClientError::Validation(_) | ClientError::Backend(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}
