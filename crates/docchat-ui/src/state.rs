//! UI-level state that is not part of the session: input buffers,
//! status line and transient notices. Updated each frame by draining
//! the EventBus; the transcript and phases are read from `SessionState`.

use docchat_types::event::SessionEvent;

pub const INDEXED_NOTICE: &str = "Document indexed successfully! You can now ask questions.";

pub struct UiState {
    /// Chat input field content
    pub question_input: String,
    /// Whether settings panel is open
    pub show_settings: bool,
    /// Status line text
    pub status_text: String,
    /// Dismissable banner
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            question_input: String::new(),
            show_settings: false,
            status_text: "Drop a PDF to begin".to_string(),
            notice: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::DocumentSelected { name, .. } => {
                    self.notice = None;
                    self.question_input.clear();
                    self.status_text = match name {
                        Some(name) => format!("Selected: {}", name),
                        None => "No document selected".to_string(),
                    };
                }
                SessionEvent::IndexingStarted { .. } => {
                    self.notice = None;
                    self.status_text = "Indexing...".to_string();
                }
                SessionEvent::IndexingSucceeded { message, .. } => {
                    self.status_text = message.unwrap_or_else(|| "Indexed".to_string());
                    self.notice = Some(Notice {
                        text: INDEXED_NOTICE.to_string(),
                        kind: NoticeKind::Success,
                    });
                }
                SessionEvent::IndexingFailed { .. } => {
                    self.status_text = "Indexing failed".to_string();
                }
                SessionEvent::QuestionSubmitted { .. } => {
                    self.status_text = "Thinking...".to_string();
                }
                SessionEvent::AnswerReceived { .. } => {
                    self.status_text = "Ready".to_string();
                }
                SessionEvent::AnswerFailed { message } => {
                    self.status_text = format!("Error: {}", message);
                }
                SessionEvent::ValidationFailed { message } => {
                    self.notice = Some(Notice {
                        text: message,
                        kind: NoticeKind::Warning,
                    });
                }
                SessionEvent::IndexingDiscarded { .. } | SessionEvent::AnswerDiscarded { .. } => {}
            }
        }
    }

    /// A dropped file was not offered to the session
    pub fn reject_file(&mut self, name: &str, accepted: &[String]) {
        log::debug!("Ignoring dropped file {}", name);
        self.notice = Some(Notice {
            text: format!("{} is not a supported file ({})", name, accepted.join(", ")),
            kind: NoticeKind::Warning,
        });
    }

    /// Take the chat input if it holds something worth sending
    pub fn take_question(&mut self) -> Option<String> {
        let text = self.question_input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.question_input.clear();
        Some(text)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
