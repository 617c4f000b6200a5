//! Chat panel: displays the transcript and the question input.

use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Vec2};
use docchat_core::session::SessionState;
use docchat_types::{
    message::{ConversationEntry, Role},
    session::{AnsweringPhase, IndexingPhase},
};
use crate::state::UiState;
use crate::theme::*;

pub fn chat_placeholder(phase: IndexingPhase) -> &'static str {
    if phase == IndexingPhase::Indexed {
        "Ask a question..."
    } else {
        "Please index a document first"
    }
}

/// Render the chat panel. Returns Some(question) when the user sends one.
pub fn chat_panel(ui: &mut egui::Ui, session: &SessionState, state: &mut UiState) -> Option<String> {
    let mut submitted = None;
    let indexed = session.indexing_phase() == IndexingPhase::Indexed;

    egui::Frame::default()
        .fill(if indexed { BG_PRIMARY } else { BG_DISABLED })
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.add_enabled_ui(indexed, |ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.heading(
                            RichText::new("Step 2: Chat With Your Document")
                                .color(TEXT_PRIMARY)
                                .strong(),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let busy = session.answering_phase() == AnsweringPhase::Awaiting;
                            ui.label(
                                RichText::new(&state.status_text)
                                    .color(if busy { WARNING } else { TEXT_SECONDARY })
                                    .small(),
                            );
                        });
                    });

                    ui.separator();

                    let available_height = ui.available_height() - 60.0;
                    ScrollArea::vertical()
                        .max_height(available_height)
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in session.conversation_log() {
                                render_entry(ui, entry);
                                ui.add_space(4.0);
                            }

                            if session.answering_phase() == AnsweringPhase::Awaiting {
                                egui::Frame::default()
                                    .fill(ASSISTANT_BUBBLE)
                                    .corner_radius(PANEL_ROUNDING)
                                    .inner_margin(8.0)
                                    .show(ui, |ui| {
                                        ui.horizontal(|ui| {
                                            ui.spinner();
                                            ui.label(
                                                RichText::new("Thinking...")
                                                    .color(TEXT_SECONDARY)
                                                    .italics(),
                                            );
                                        });
                                    });
                            }
                        });

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        let can_send = session.can_submit_question();
                        let input = egui::TextEdit::singleline(&mut state.question_input)
                            .hint_text(chat_placeholder(session.indexing_phase()))
                            .desired_width(ui.available_width() - 70.0)
                            .font(egui::FontId::proportional(14.0));
                        let response = ui.add_enabled(can_send, input);

                        let send_btn = ui.add_enabled(
                            can_send,
                            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                                .fill(if can_send { ACCENT } else { BG_SURFACE })
                                .corner_radius(PANEL_ROUNDING)
                                .min_size(Vec2::new(60.0, 0.0)),
                        );

                        let enter = response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if can_send && (enter || send_btn.clicked()) {
                            // Blank input still goes through so the session reports it
                            submitted = Some(state.take_question().unwrap_or_default());
                            response.request_focus();
                        }
                    });
                });
            });
        });

    submitted
}

/// Label and bubble colours for a transcript entry
pub fn entry_style(entry: &ConversationEntry) -> (Color32, Color32) {
    match entry.role {
        Role::User => (ACCENT, USER_BUBBLE),
        Role::Assistant if entry.is_error => (ERROR, ASSISTANT_BUBBLE),
        Role::Assistant => (SUCCESS, ASSISTANT_BUBBLE),
    }
}

fn render_entry(ui: &mut egui::Ui, entry: &ConversationEntry) {
    let (label_color, bg) = entry_style(entry);

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(entry.role.label()).color(label_color).strong().small());
            ui.label(RichText::new(&entry.text).color(TEXT_PRIMARY));
        });
}
