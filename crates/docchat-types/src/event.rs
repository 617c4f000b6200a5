use serde::{Deserialize, Serialize};
use crate::document::DocumentId;

/// Events emitted by the session controllers.
/// UI subscribes to these for status text and notices; the session state
/// itself is read directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A document was chosen (or cleared) and the session restarted
    DocumentSelected {
        document_id: Option<DocumentId>,
        name: Option<String>,
    },

    /// An indexing request was sent
    IndexingStarted { document_id: DocumentId },

    /// The backend acknowledged the upload
    IndexingSucceeded {
        document_id: DocumentId,
        message: Option<String>,
    },

    /// The backend rejected the upload or could not be reached
    IndexingFailed { document_id: DocumentId, message: String },

    /// An indexing result arrived for a document that is no longer selected
    IndexingDiscarded { document_id: DocumentId },

    /// A question was appended to the transcript and sent
    QuestionSubmitted { text: String },

    /// The answer was appended to the transcript
    AnswerReceived { text: String },

    /// The query failed; the error was appended to the transcript
    AnswerFailed { message: String },

    /// An answer arrived after the session was restarted
    AnswerDiscarded { document_id: DocumentId },

    /// Local validation refused an intent
    ValidationFailed { message: String },
}
