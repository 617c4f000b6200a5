//! Session state shared by the indexing and chat controllers.
//!
//! The state is single-threaded and shared through `SessionHandle`
//! (`Rc<RefCell<_>>`). Controllers borrow it only between awaits, so the
//! document can be re-selected while a request is suspended.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use docchat_types::{
    document::{Document, DocumentId},
    message::ConversationEntry,
    session::{AnsweringPhase, IndexingPhase},
};

/// Everything the presentation layer renders from.
///
/// Fields are private: the transcript can only grow through the
/// controllers, and is only emptied by selecting a document.
#[derive(Debug, Default)]
pub struct SessionState {
    selected_document: Option<Document>,
    indexing_phase: IndexingPhase,
    answering_phase: AnsweringPhase,
    conversation_log: Vec<ConversationEntry>,
    last_error: Option<String>,
    /// Document an outstanding index request was issued for
    pending_index: Option<DocumentId>,
    /// Document an outstanding question was asked against
    pending_question: Option<DocumentId>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.selected_document.as_ref()
    }

    pub fn selected_id(&self) -> Option<DocumentId> {
        self.selected_document.as_ref().map(Document::id)
    }

    pub fn indexing_phase(&self) -> IndexingPhase {
        self.indexing_phase
    }

    pub fn answering_phase(&self) -> AnsweringPhase {
        self.answering_phase
    }

    pub fn conversation_log(&self) -> &[ConversationEntry] {
        &self.conversation_log
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// An index request is on the wire, possibly for an abandoned document
    pub fn is_index_outstanding(&self) -> bool {
        self.pending_index.is_some()
    }

    pub fn is_question_outstanding(&self) -> bool {
        self.pending_question.is_some()
    }

    /// Whether the "index" action should be offered.
    /// Re-indexing waits for an answer in flight, since `Awaiting` needs `Indexed`.
    pub fn can_submit_indexing(&self) -> bool {
        self.indexing_phase != IndexingPhase::Indexing
            && self.pending_index.is_none()
            && self.answering_phase != AnsweringPhase::Awaiting
    }

    /// Whether the "send" action should be offered
    pub fn can_submit_question(&self) -> bool {
        self.indexing_phase == IndexingPhase::Indexed
            && self.answering_phase != AnsweringPhase::Awaiting
            && self.pending_question.is_none()
    }

    // ─── Mutators (controllers only) ─────────────────────────

    /// Replace the document and restart the session.
    /// Outstanding tickets survive so their results can be recognised as stale.
    pub(crate) fn reset_for(&mut self, document: Option<Document>) {
        self.selected_document = document;
        self.indexing_phase = IndexingPhase::Idle;
        self.answering_phase = AnsweringPhase::Idle;
        self.conversation_log.clear();
        self.last_error = None;
    }

    pub(crate) fn set_indexing_phase(&mut self, phase: IndexingPhase) {
        self.indexing_phase = phase;
    }

    pub(crate) fn set_answering_phase(&mut self, phase: AnsweringPhase) {
        self.answering_phase = phase;
    }

    pub(crate) fn push_entry(&mut self, entry: ConversationEntry) {
        self.conversation_log.push(entry);
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub(crate) fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn begin_index(&mut self, id: DocumentId) {
        self.pending_index = Some(id);
    }

    pub(crate) fn finish_index(&mut self) -> Option<DocumentId> {
        self.pending_index.take()
    }

    pub(crate) fn begin_question(&mut self, id: DocumentId) {
        self.pending_question = Some(id);
    }

    pub(crate) fn finish_question(&mut self) -> Option<DocumentId> {
        self.pending_question.take()
    }
}

/// Shared handle to one session: clone-cheap via Rc.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Rc<RefCell<SessionState>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for rendering and tests. Do not hold across an await.
    pub fn borrow(&self) -> Ref<'_, SessionState> {
        self.inner.borrow()
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, SessionState> {
        self.inner.borrow_mut()
    }
}
