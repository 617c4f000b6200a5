//! Port traits: the hexagonal architecture boundary.
//!
//! `BackendPort` is defined here in `docchat-core` (pure Rust).
//! The browser implementation lives in `docchat-platform`.
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use docchat_types::{Result, document::Document};

/// Acknowledgment returned by a successful index request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexAck {
    /// Human-readable summary from the backend, if it sent one
    pub message: Option<String>,
}

// ─── Backend Port ────────────────────────────────────────────

/// One request/response exchange per call, no retries.
///
/// Implementations report a refusal by the backend as
/// `ClientError::Backend(message)` and anything else (unreachable server,
/// unreadable body) as a transport-level variant such as `Network`.
#[async_trait(?Send)]
pub trait BackendPort {
    /// Upload a document to the indexing endpoint
    async fn index_document(&self, document: &Document) -> Result<IndexAck>;

    /// Ask a question about the most recently indexed document
    async fn ask_question(&self, question: &str) -> Result<String>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
