use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single turn in the conversation transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub text: String,
    /// Set for entries recording a failed query
    #[serde(default)]
    pub is_error: bool,
    /// RFC 3339 creation time, informational only
    pub created_at: String,
}

impl ConversationEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text.into())
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text.into())
    }

    /// Assistant entry recording a failed query, so the failure stays visible
    /// in the transcript.
    pub fn assistant_error(message: &str) -> Self {
        Self {
            is_error: true,
            ..Self::new(Role::Assistant, format!("Error: {}", message))
        }
    }

    fn new(role: Role, text: String) -> Self {
        Self {
            role,
            text,
            is_error: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Compare role and text, ignoring the timestamp
    pub fn same_turn(&self, role: Role, text: &str) -> bool {
        self.role == role && self.text == text
    }
}
