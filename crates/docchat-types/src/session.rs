use serde::{Deserialize, Serialize};

/// Where the selected document is in the indexing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexingPhase {
    #[default]
    Idle,
    Indexing,
    Indexed,
    IndexFailed,
}

impl IndexingPhase {
    pub fn label(&self) -> &'static str {
        match self {
            IndexingPhase::Idle => "Not indexed",
            IndexingPhase::Indexing => "Indexing...",
            IndexingPhase::Indexed => "Indexed",
            IndexingPhase::IndexFailed => "Indexing failed",
        }
    }
}

/// Whether a question is waiting for its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnsweringPhase {
    #[default]
    Idle,
    Awaiting,
}

/// Why an intent was refused before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// An indexing request is already outstanding
    IndexingInFlight,
    /// No document is selected
    NoDocument,
    /// The selected document has not been indexed yet
    NotIndexed,
    /// A question is already waiting for its answer
    AnswerInFlight,
    /// The question text is empty or whitespace
    EmptyQuestion,
}
