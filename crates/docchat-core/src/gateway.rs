//! Request gateway: the only path from the controllers to the backend.
//!
//! Validates input locally, performs exactly one exchange per call and
//! narrows every failure to either `Validation` or `Backend`.

use docchat_types::{
    ClientError, Result,
    document::Document,
    error::{EMPTY_QUESTION_MESSAGE, INDEX_FAILED_MESSAGE, NO_DOCUMENT_MESSAGE, QUERY_FAILED_MESSAGE},
};
use crate::ports::{BackendPort, IndexAck};

#[derive(Clone, Copy)]
pub struct RequestGateway<'a> {
    backend: &'a dyn BackendPort,
}

impl<'a> RequestGateway<'a> {
    pub fn new(backend: &'a dyn BackendPort) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    pub async fn index_document(&self, document: Option<&Document>) -> Result<IndexAck> {
        let document =
            document.ok_or_else(|| ClientError::Validation(NO_DOCUMENT_MESSAGE.to_string()))?;

        log::debug!(
            "Uploading {} ({} bytes, {}) via {}",
            document.name(),
            document.len(),
            document.media_type(),
            self.backend.backend_name()
        );

        self.backend
            .index_document(document)
            .await
            .map_err(|e| narrow(e, INDEX_FAILED_MESSAGE))
    }

    pub async fn ask_question(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(ClientError::Validation(EMPTY_QUESTION_MESSAGE.to_string()));
        }

        self.backend
            .ask_question(text)
            .await
            .map_err(|e| narrow(e, QUERY_FAILED_MESSAGE))
    }
}

/// Keep backend messages, replace transport detail with a generic message.
fn narrow(err: ClientError, generic: &str) -> ClientError {
    match err {
        ClientError::Backend(message) => ClientError::Backend(message),
        other => {
            log::warn!("Backend exchange failed: {}", other);
            ClientError::Backend(generic.to_string())
        }
    }
}
