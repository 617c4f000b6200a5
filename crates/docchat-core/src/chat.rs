//! Chat controller: one request/response turn per user question.
//!
//! The user entry is appended before the request goes out; exactly one
//! assistant entry (answer or error) follows when it settles. The answering
//! phase returns to `Idle` only after the transcript has been updated.

use docchat_types::{
    error::EMPTY_QUESTION_MESSAGE,
    event::SessionEvent,
    message::ConversationEntry,
    session::{AnsweringPhase, IndexingPhase, Rejection},
};
use crate::event_bus::EventBus;
use crate::gateway::RequestGateway;
use crate::session::SessionHandle;

/// How a `submit_question` call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Answered(String),
    /// The error text was appended to the transcript and set as `last_error`
    Failed(String),
    /// Nothing was appended and nothing was sent
    Rejected(Rejection),
    /// The session was restarted while the question was in flight
    Discarded,
}

#[derive(Clone)]
pub struct ChatController {
    session: SessionHandle,
    events: EventBus,
}

impl ChatController {
    pub fn new(session: SessionHandle, events: EventBus) -> Self {
        Self { session, events }
    }

    /// Ask a question about the indexed document.
    pub async fn submit_question(&self, gateway: &RequestGateway<'_>, text: &str) -> TurnOutcome {
        let question = text.trim().to_string();

        let document_id = {
            let mut state = self.session.borrow_mut();

            if state.indexing_phase() != IndexingPhase::Indexed {
                return TurnOutcome::Rejected(Rejection::NotIndexed);
            }
            if !state.can_submit_question() {
                return TurnOutcome::Rejected(Rejection::AnswerInFlight);
            }
            let Some(document_id) = state.selected_id() else {
                return TurnOutcome::Rejected(Rejection::NoDocument);
            };

            if question.is_empty() {
                state.set_error(EMPTY_QUESTION_MESSAGE);
                drop(state);
                self.events.emit(SessionEvent::ValidationFailed {
                    message: EMPTY_QUESTION_MESSAGE.to_string(),
                });
                return TurnOutcome::Rejected(Rejection::EmptyQuestion);
            }

            state.push_entry(ConversationEntry::user(question.clone()));
            state.set_answering_phase(AnsweringPhase::Awaiting);
            state.clear_error();
            state.begin_question(document_id);
            document_id
        };

        self.events.emit(SessionEvent::QuestionSubmitted { text: question.clone() });

        let result = gateway.ask_question(&question).await;

        let mut state = self.session.borrow_mut();
        state.finish_question();

        if state.selected_id() != Some(document_id) {
            drop(state);
            log::info!("Discarding answer for replaced document {}", document_id);
            self.events.emit(SessionEvent::AnswerDiscarded { document_id });
            return TurnOutcome::Discarded;
        }

        let outcome = match result {
            Ok(answer) => {
                state.push_entry(ConversationEntry::assistant(answer.clone()));
                TurnOutcome::Answered(answer)
            }
            Err(e) => {
                let message = e.to_string();
                state.push_entry(ConversationEntry::assistant_error(&message));
                state.set_error(message.clone());
                TurnOutcome::Failed(message)
            }
        };
        state.set_answering_phase(AnsweringPhase::Idle);
        drop(state);

        match &outcome {
            TurnOutcome::Answered(text) => {
                self.events.emit(SessionEvent::AnswerReceived { text: text.clone() })
            }
            TurnOutcome::Failed(message) => {
                log::debug!("Question failed: {}", message);
                self.events.emit(SessionEvent::AnswerFailed { message: message.clone() })
            }
            _ => {}
        }

        outcome
    }
}
