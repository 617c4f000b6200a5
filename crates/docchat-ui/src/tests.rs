#[cfg(test)]
mod tests {
    use crate::panels::chat::{chat_placeholder, entry_style};
    use crate::panels::index::{format_size, index_button_label};
    use crate::state::*;
    use crate::theme::{ACCENT, ERROR, SUCCESS};
    use docchat_types::message::ConversationEntry;
    use docchat_types::document::DocumentId;
    use docchat_types::event::SessionEvent;
    use docchat_types::session::IndexingPhase;

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.question_input.is_empty());
        assert!(!state.show_settings);
        assert_eq!(state.status_text, "Drop a PDF to begin");
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_document_selected_updates_status_and_clears_input() {
        let mut state = UiState::new();
        state.question_input = "half typed".to_string();
        state.notice = Some(Notice {
            text: "old".to_string(),
            kind: NoticeKind::Warning,
        });

        state.process_events(vec![SessionEvent::DocumentSelected {
            document_id: Some(DocumentId::new()),
            name: Some("report.pdf".to_string()),
        }]);

        assert_eq!(state.status_text, "Selected: report.pdf");
        assert!(state.question_input.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_document_cleared_status() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::DocumentSelected {
            document_id: None,
            name: None,
        }]);
        assert_eq!(state.status_text, "No document selected");
    }

    #[test]
    fn test_indexing_success_shows_notice() {
        let mut state = UiState::new();
        let id = DocumentId::new();
        state.process_events(vec![
            SessionEvent::IndexingStarted { document_id: id },
            SessionEvent::IndexingSucceeded {
                document_id: id,
                message: Some("Indexed 12 chunks".to_string()),
            },
        ]);

        assert_eq!(state.status_text, "Indexed 12 chunks");
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, INDEXED_NOTICE);
    }

    #[test]
    fn test_indexing_success_without_message() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::IndexingSucceeded {
            document_id: DocumentId::new(),
            message: None,
        }]);
        assert_eq!(state.status_text, "Indexed");
    }

    #[test]
    fn test_indexing_started_clears_notice() {
        let mut state = UiState::new();
        state.notice = Some(Notice {
            text: "Please select a PDF file to index.".to_string(),
            kind: NoticeKind::Warning,
        });
        state.process_events(vec![SessionEvent::IndexingStarted {
            document_id: DocumentId::new(),
        }]);
        assert_eq!(state.status_text, "Indexing...");
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_indexing_failed_status() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::IndexingFailed {
            document_id: DocumentId::new(),
            message: "Failed to index document.".to_string(),
        }]);
        assert_eq!(state.status_text, "Indexing failed");
    }

    #[test]
    fn test_question_cycle_status() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::QuestionSubmitted {
            text: "What is this?".to_string(),
        }]);
        assert_eq!(state.status_text, "Thinking...");

        state.process_events(vec![SessionEvent::AnswerReceived {
            text: "A report.".to_string(),
        }]);
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_answer_failed_status() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::AnswerFailed {
            message: "quota exceeded".to_string(),
        }]);
        assert_eq!(state.status_text, "Error: quota exceeded");
    }

    #[test]
    fn test_validation_failed_warns() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::ValidationFailed {
            message: "Please enter a question.".to_string(),
        }]);
        assert_eq!(
            state.notice,
            Some(Notice {
                text: "Please enter a question.".to_string(),
                kind: NoticeKind::Warning,
            })
        );
    }

    #[test]
    fn test_discarded_events_leave_state_alone() {
        let mut state = UiState::new();
        state.status_text = "Selected: b.pdf".to_string();
        state.process_events(vec![
            SessionEvent::IndexingDiscarded { document_id: DocumentId::new() },
            SessionEvent::AnswerDiscarded { document_id: DocumentId::new() },
        ]);
        assert_eq!(state.status_text, "Selected: b.pdf");
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_reject_file() {
        let mut state = UiState::new();
        state.reject_file("notes.txt", &[".pdf".to_string()]);
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(notice.text.contains("notes.txt"));
        assert!(notice.text.contains(".pdf"));

        state.dismiss_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_take_question_trims_and_clears() {
        let mut state = UiState::new();
        state.question_input = "  What is the title?  ".to_string();
        assert_eq!(state.take_question().as_deref(), Some("What is the title?"));
        assert!(state.question_input.is_empty());
    }

    #[test]
    fn test_take_question_blank_keeps_input() {
        let mut state = UiState::new();
        state.question_input = "   ".to_string();
        assert!(state.take_question().is_none());
        assert_eq!(state.question_input, "   ");
    }

    // ─── Panel Helper Tests ──────────────────────────────────

    #[test]
    fn test_index_button_label() {
        assert_eq!(index_button_label(IndexingPhase::Indexing), "Indexing...");
        assert_eq!(index_button_label(IndexingPhase::Idle), "Index Document");
        assert_eq!(index_button_label(IndexingPhase::Indexed), "Index Document");
        assert_eq!(index_button_label(IndexingPhase::IndexFailed), "Index Document");
    }

    #[test]
    fn test_chat_placeholder() {
        assert_eq!(chat_placeholder(IndexingPhase::Indexed), "Ask a question...");
        assert_eq!(chat_placeholder(IndexingPhase::Idle), "Please index a document first");
        assert_eq!(chat_placeholder(IndexingPhase::Indexing), "Please index a document first");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 / 2), "1.5 MB");
    }

    #[test]
    fn test_entry_style_uses_error_flag() {
        assert_eq!(entry_style(&ConversationEntry::assistant_error("timeout")).0, ERROR);
        // a genuine answer that happens to start with "Error: "
        let answer = ConversationEntry::assistant("Error: codes are listed in table 2.");
        assert_eq!(entry_style(&answer).0, SUCCESS);
        assert_eq!(entry_style(&ConversationEntry::user("hi")).0, ACCENT);
    }
}
