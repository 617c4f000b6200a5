//! Indexing controller: owns the "selected file → indexed document" step.
//!
//! Phases: `Idle | IndexFailed → Indexing → Indexed | IndexFailed`.
//! Selecting a document restarts at `Idle` from any phase. A result that
//! arrives for a document that is no longer selected is dropped.

use docchat_types::{
    error::NO_DOCUMENT_MESSAGE,
    document::Document,
    event::SessionEvent,
    session::{AnsweringPhase, IndexingPhase, Rejection},
};
use crate::event_bus::EventBus;
use crate::gateway::RequestGateway;
use crate::session::SessionHandle;

/// How a `submit_indexing` call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// The backend accepted the document
    Indexed,
    /// The backend refused or could not be reached; message is in `last_error`
    Failed(String),
    /// Nothing was sent
    Rejected(Rejection),
    /// The result belonged to a document that was replaced mid-flight
    Discarded,
}

#[derive(Clone)]
pub struct IndexingController {
    session: SessionHandle,
    events: EventBus,
}

impl IndexingController {
    pub fn new(session: SessionHandle, events: EventBus) -> Self {
        Self { session, events }
    }

    /// Choose a new document (or clear the choice) and start a fresh session.
    pub fn select_document(&self, document: Option<Document>) {
        let (document_id, name) = match &document {
            Some(doc) => (Some(doc.id()), Some(doc.name().to_string())),
            None => (None, None),
        };

        {
            let mut state = self.session.borrow_mut();
            if state.is_index_outstanding() {
                log::debug!("Document replaced while an index request is in flight");
            }
            state.reset_for(document);
        }

        log::debug!("Selected document {:?}", name);
        self.events.emit(SessionEvent::DocumentSelected { document_id, name });
    }

    /// Upload the selected document. Suspends only while the gateway call
    /// is outstanding.
    pub async fn submit_indexing(&self, gateway: &RequestGateway<'_>) -> IndexOutcome {
        let document = {
            let mut state = self.session.borrow_mut();

            if !state.can_submit_indexing() {
                if state.answering_phase() == AnsweringPhase::Awaiting {
                    log::debug!("Index request ignored: a question is awaiting its answer");
                    return IndexOutcome::Rejected(Rejection::AnswerInFlight);
                }
                log::debug!("Index request ignored: one is already in flight");
                return IndexOutcome::Rejected(Rejection::IndexingInFlight);
            }

            let Some(document) = state.selected_document().cloned() else {
                state.set_error(NO_DOCUMENT_MESSAGE);
                drop(state);
                self.events.emit(SessionEvent::ValidationFailed {
                    message: NO_DOCUMENT_MESSAGE.to_string(),
                });
                return IndexOutcome::Rejected(Rejection::NoDocument);
            };

            state.set_indexing_phase(IndexingPhase::Indexing);
            state.clear_error();
            state.begin_index(document.id());
            document
        };

        let document_id = document.id();
        self.events.emit(SessionEvent::IndexingStarted { document_id });

        let result = gateway.index_document(Some(&document)).await;

        let mut state = self.session.borrow_mut();
        state.finish_index();

        if state.selected_id() != Some(document_id) {
            drop(state);
            log::info!("Discarding index result for replaced document {}", document_id);
            self.events.emit(SessionEvent::IndexingDiscarded { document_id });
            return IndexOutcome::Discarded;
        }

        match result {
            Ok(ack) => {
                state.set_indexing_phase(IndexingPhase::Indexed);
                drop(state);
                log::info!("Indexed {} via {}", document.name(), gateway.backend_name());
                self.events.emit(SessionEvent::IndexingSucceeded {
                    document_id,
                    message: ack.message,
                });
                IndexOutcome::Indexed
            }
            Err(e) => {
                let message = e.to_string();
                state.set_indexing_phase(IndexingPhase::IndexFailed);
                state.set_error(message.clone());
                drop(state);
                log::debug!("Indexing {} failed: {}", document.name(), message);
                self.events.emit(SessionEvent::IndexingFailed {
                    document_id,
                    message: message.clone(),
                });
                IndexOutcome::Failed(message)
            }
        }
    }
}
