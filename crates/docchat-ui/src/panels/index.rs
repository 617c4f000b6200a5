//! Index panel: the selected document, its indexing phase and the
//! "Index Document" action.

use egui::{self, RichText, Vec2};
use docchat_core::session::SessionState;
use docchat_types::session::IndexingPhase;
use crate::theme::*;

/// What the user asked for in this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAction {
    /// Open the file chooser
    ChooseFile,
    Submit,
    ClearDocument,
}

pub fn index_button_label(phase: IndexingPhase) -> &'static str {
    match phase {
        IndexingPhase::Indexing => "Indexing...",
        _ => "Index Document",
    }
}

/// Human-readable size, e.g. `1.4 MB`
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

pub fn index_panel(ui: &mut egui::Ui, session: &SessionState) -> Option<IndexAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Step 1: Index Your Document").color(TEXT_PRIMARY));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Choose PDF...").color(TEXT_PRIMARY))
                    .on_hover_text("Pick a file, or drop one onto this window")
                    .clicked()
                {
                    action = Some(IndexAction::ChooseFile);
                }
            });
            ui.add_space(4.0);

            match session.selected_document() {
                Some(doc) => {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(doc.name()).color(TEXT_PRIMARY).strong());
                        ui.label(
                            RichText::new(format_size(doc.len()))
                                .color(TEXT_SECONDARY)
                                .small(),
                        );
                        if ui.small_button("✕").on_hover_text("Clear selection").clicked() {
                            action = Some(IndexAction::ClearDocument);
                        }
                    });
                }
                None => {
                    ui.label(
                        RichText::new("No file chosen. You can also drop a PDF onto this window.")
                            .color(TEXT_SECONDARY)
                            .italics(),
                    );
                }
            }

            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let phase = session.indexing_phase();
                let enabled = session.can_submit_indexing();
                let button = ui.add_enabled(
                    enabled,
                    egui::Button::new(RichText::new(index_button_label(phase)).color(TEXT_PRIMARY))
                        .fill(if enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(130.0, 0.0)),
                );
                if button.clicked() {
                    action = Some(IndexAction::Submit);
                }

                if phase == IndexingPhase::Indexing {
                    ui.spinner();
                }

                let phase_color = match phase {
                    IndexingPhase::Indexed => SUCCESS,
                    IndexingPhase::IndexFailed => ERROR,
                    IndexingPhase::Indexing => WARNING,
                    IndexingPhase::Idle => TEXT_SECONDARY,
                };
                ui.label(RichText::new(phase.label()).color(phase_color).small());
            });

            if let Some(error) = session.last_error() {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(ERROR));
            }
        });

    action
}
