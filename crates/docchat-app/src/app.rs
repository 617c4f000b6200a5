//! Main egui application: composes the panels and dispatches user intents
//! to the controllers.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use docchat_core::gateway::RequestGateway;
use docchat_core::ports::BackendPort;
use docchat_core::{ChatController, EventBus, IndexingController, SessionHandle};
use docchat_platform::HttpBackend;
use docchat_types::config::{BackendConfig, ClientConfig};
use docchat_types::document::Document;
use docchat_ui::panels::index::IndexAction;
use docchat_ui::panels::settings::{SaveFeedback, SettingsAction};
use docchat_ui::panels::{chat, index, settings};
use docchat_ui::state::{NoticeKind, UiState};
use docchat_ui::theme;

pub struct DocChatApp {
    ui_state: UiState,
    /// Config currently in effect
    config: ClientConfig,
    /// Working copy edited by the settings panel
    draft_config: ClientConfig,
    save_feedback: Option<SaveFeedback>,
    session: SessionHandle,
    event_bus: EventBus,
    indexing: IndexingController,
    chat: ChatController,
    backend: Rc<dyn BackendPort>,
    /// Filled by the file chooser task, drained on the next frame
    picked: Rc<RefCell<Option<Document>>>,
    first_frame: bool,
}

impl DocChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();
        let session = SessionHandle::new();
        let event_bus = EventBus::new();
        let backend: Rc<dyn BackendPort> = Rc::new(HttpBackend::new(config.backend.clone()));
        log::info!("Backend: {}", backend.backend_name());

        Self {
            ui_state: UiState::new(),
            draft_config: config.clone(),
            config,
            save_feedback: None,
            indexing: IndexingController::new(session.clone(), event_bus.clone()),
            chat: ChatController::new(session.clone(), event_bus.clone()),
            session,
            event_bus,
            backend,
            picked: Rc::new(RefCell::new(None)),
            first_frame: true,
        }
    }

    /// Turn files dropped on the window into a selection
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Single-document client: the last accepted file wins
        for file in dropped {
            let Some(bytes) = file.bytes else {
                log::warn!("Dropped file {} has no contents", file.name);
                self.ui_state.reject_file(&file.name, &self.config.accepted_extensions);
                continue;
            };
            self.offer_document(Document::new(file.name, file.mime, bytes));
        }
    }

    /// Open the browser file chooser; the pick lands in `self.picked`
    fn choose_file(&self, ctx: &egui::Context) {
        let slot = self.picked.clone();
        let extensions = self.config.dialog_extensions();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("PDF", &extensions[..])
                .pick_file()
                .await
            else {
                log::debug!("File chooser closed without a selection");
                return;
            };
            let name = handle.file_name();
            let bytes = handle.read().await;
            *slot.borrow_mut() = Some(Document::new(name, "application/pdf", bytes));
            ctx.request_repaint();
        });
    }

    fn offer_document(&mut self, document: Document) {
        if !document.has_extension(&self.config.accepted_extensions) {
            self.ui_state.reject_file(document.name(), &self.config.accepted_extensions);
            return;
        }
        log::info!("Selected {} ({} bytes)", document.name(), document.len());
        self.indexing.select_document(Some(document));
    }

    fn apply_settings(&mut self) {
        if let Err(e) = self.draft_config.validate() {
            self.save_feedback = Some(SaveFeedback {
                message: e.to_string(),
                success: false,
            });
            return;
        }

        let changed = self.draft_config.backend != self.config.backend;
        self.config = self.draft_config.clone();
        if changed {
            self.rebuild_backend();
            self.indexing.select_document(None);
        }
        self.save_feedback = Some(SaveFeedback {
            message: "Saved".to_string(),
            success: true,
        });
    }

    fn rebuild_backend(&mut self) {
        self.backend = Rc::new(HttpBackend::new(self.config.backend.clone()));
        log::info!("Backend switched to {}", self.backend.backend_name());
    }

    /// Upload the selected document (async)
    fn dispatch_indexing(&self, ctx: &egui::Context) {
        let indexing = self.indexing.clone();
        let backend = self.backend.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let gateway = RequestGateway::new(backend.as_ref());
            let outcome = indexing.submit_indexing(&gateway).await;
            log::debug!("Indexing outcome: {:?}", outcome);
            ctx.request_repaint();
        });
    }

    /// Ask a question about the indexed document (async)
    fn dispatch_question(&self, text: String, ctx: &egui::Context) {
        let chat = self.chat.clone();
        let backend = self.backend.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let gateway = RequestGateway::new(backend.as_ref());
            let outcome = chat.submit_question(&gateway, &text).await;
            log::debug!("Question outcome: {:?}", outcome);
            ctx.request_repaint();
        });
    }

    fn notice_bar(&mut self, ui: &mut egui::Ui) {
        let Some(notice) = self.ui_state.notice.clone() else {
            return;
        };
        let color = match notice.kind {
            NoticeKind::Success => theme::SUCCESS,
            NoticeKind::Warning => theme::WARNING,
        };
        egui::Frame::default()
            .fill(theme::BG_SURFACE)
            .corner_radius(theme::PANEL_ROUNDING)
            .inner_margin(theme::PANEL_PADDING)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&notice.text).color(color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.ui_state.dismiss_notice();
                        }
                    });
                });
            });
        ui.add_space(6.0);
    }
}

impl eframe::App for DocChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        self.handle_dropped_files(ctx);
        let picked = self.picked.borrow_mut().take();
        if let Some(document) = picked {
            self.offer_document(document);
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // Keep spinners moving while a request is out
        {
            let session = self.session.borrow();
            if session.is_index_outstanding() || session.is_question_outstanding() {
                ctx.request_repaint();
            }
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Chat With Your PDF")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("Backend: {}", self.backend.backend_name()))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                        if self.ui_state.show_settings {
                            self.draft_config = self.config.clone();
                            self.save_feedback = None;
                        }
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let mut action = SettingsAction::None;
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    action = settings::settings_panel(
                        ui,
                        &mut self.draft_config,
                        self.save_feedback.as_ref(),
                    );
                });
            match action {
                SettingsAction::SaveClicked => self.apply_settings(),
                SettingsAction::ResetClicked => {
                    self.draft_config.backend = BackendConfig::default();
                    self.save_feedback = None;
                }
                SettingsAction::None => {}
            }
        }

        // ── Main content ─────────────────────────────────────
        let mut index_action = None;
        let mut question = None;
        CentralPanel::default().show(ctx, |ui| {
            self.notice_bar(ui);

            let session = self.session.borrow();
            index_action = index::index_panel(ui, &session);
            ui.add_space(8.0);
            question = chat::chat_panel(ui, &session, &mut self.ui_state);
        });

        // Session borrow is released before the controllers run
        match index_action {
            Some(IndexAction::ChooseFile) => self.choose_file(ctx),
            Some(IndexAction::Submit) => self.dispatch_indexing(ctx),
            Some(IndexAction::ClearDocument) => self.indexing.select_document(None),
            None => {}
        }
        if let Some(text) = question {
            self.dispatch_question(text, ctx);
        }
    }
}
