//! Settings panel: where the indexing/query backend lives.

use egui::{self, RichText, Vec2};
use docchat_types::config::{BackendConfig, ClientConfig};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
pub enum SettingsAction {
    None,
    /// The user clicked Save; validate and apply the edited config
    SaveClicked,
    /// Put the backend fields back to their defaults
    ResetClicked,
}

/// Feedback from the last save, passed in from the app layer
#[derive(Clone)]
pub struct SaveFeedback {
    pub message: String,
    pub success: bool,
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut ClientConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut action = SettingsAction::None;
    let defaults = BackendConfig::default();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            text_field(ui, "Base URL", &mut config.backend.base_url, &defaults.base_url);
            text_field(ui, "Index path", &mut config.backend.index_path, &defaults.index_path);
            text_field(ui, "Chat path", &mut config.backend.chat_path, &defaults.chat_path);
            text_field(ui, "Upload field", &mut config.backend.upload_field, &defaults.upload_field);

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Uploads go to {}", config.backend.index_url()))
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );
            ui.label(
                RichText::new("Changing the backend starts a new session.")
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let save = ui.add(
                    egui::Button::new(RichText::new("Save Settings").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                if save.clicked() {
                    action = SettingsAction::SaveClicked;
                }
                if ui.button("Defaults").clicked() {
                    action = SettingsAction::ResetClicked;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    action
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(RichText::new(label).color(TEXT_SECONDARY).small());
    ui.add(egui::TextEdit::singleline(value).hint_text(hint));
    ui.add_space(4.0);
}
