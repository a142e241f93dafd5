//! Main egui application — composes all panels and drives the chat session.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use namer_core::dispatch;
use namer_core::event_bus::EventBus;
use namer_core::ports::{ClipboardPort, NamingPort, StoragePort, TimerPort};
use namer_core::session::ChatSession;
use namer_platform::clipboard::BrowserClipboard;
use namer_platform::naming::HttpNamingService;
use namer_platform::storage::auto_detect_storage;
use namer_platform::timer::BrowserTimer;
use namer_types::config::{NamerConfig, StorageConfig, CONFIG_STORAGE_KEY};
use namer_ui::panels::reset::{reset_modal, ResetChoice};
use namer_ui::panels::settings::{settings_panel, SettingsAction};
use namer_ui::panels::{chat, shortlist, ChatAction};
use namer_ui::state::{SaveFeedback, UiState};
use namer_ui::theme;

/// The main application state
pub struct NamerApp {
    ui_state: UiState,
    /// Config as edited in the settings panel; applied on Save
    config: NamerConfig,
    event_bus: EventBus,
    session: Rc<RefCell<ChatSession>>,
    naming: Rc<dyn NamingPort>,
    clipboard: Rc<dyn ClipboardPort>,
    timer: Rc<dyn TimerPort>,
    /// Where the config itself is kept, independent of the session backend
    config_storage: Rc<dyn StoragePort>,
    first_frame: bool,
}

impl NamerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config_storage = auto_detect_storage(&StorageConfig::default());
        let config = Self::restore_config(config_storage.as_ref());

        let storage = auto_detect_storage(&config.storage);
        let event_bus = EventBus::new();
        let session = ChatSession::new(config.clone(), storage, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            naming: Rc::new(HttpNamingService::new(&config.naming)),
            clipboard: Rc::new(BrowserClipboard::new()),
            timer: Rc::new(BrowserTimer),
            config,
            event_bus,
            session: Rc::new(RefCell::new(session)),
            config_storage,
            first_frame: true,
        }
    }

    /// Load the saved config, or the default if there is none or it is unreadable
    fn restore_config(storage: &dyn StoragePort) -> NamerConfig {
        match storage.load(CONFIG_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<NamerConfig>(&raw) {
                Ok(config) => {
                    log::info!("Config restored from {}", storage.backend_name());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable saved config: {}", e);
                    NamerConfig::default()
                }
            },
            Ok(None) => NamerConfig::default(),
            Err(e) => {
                log::warn!("Could not read saved config: {}", e);
                NamerConfig::default()
            }
        }
    }

    /// Validate, persist, and apply the edited config
    fn save_config(&mut self) -> SaveFeedback {
        let result = self.config.naming.validate().and_then(|()| {
            let json = serde_json::to_string(&self.config)?;
            self.config_storage.save(CONFIG_STORAGE_KEY, &json)
        });

        match result {
            Ok(()) => {
                self.naming = Rc::new(HttpNamingService::new(&self.config.naming));
                self.session.borrow_mut().set_config(self.config.clone());
                log::info!("Config saved to {}", self.config_storage.backend_name());
                SaveFeedback {
                    message: "Saved".to_string(),
                    success: true,
                }
            }
            Err(e) => {
                log::warn!("Config not saved: {}", e);
                SaveFeedback {
                    message: e.to_string(),
                    success: false,
                }
            }
        }
    }
}

impl eframe::App for NamerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the session
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let mut actions = Vec::new();

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("BrandsDigger")
                        .strong()
                        .color(theme::ACCENT)
                        .size(18.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                    let shortlist_label = format!("Shortlist ({})", self.session.borrow().shortlist().len());
                    if ui
                        .selectable_label(self.ui_state.show_shortlist, shortlist_label)
                        .clicked()
                    {
                        self.ui_state.show_shortlist = !self.ui_state.show_shortlist;
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let action = SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    settings_panel(ui, &mut self.config, self.ui_state.save_feedback.as_ref())
                })
                .inner;
            match action {
                SettingsAction::SaveClicked => {
                    self.ui_state.save_feedback = Some(self.save_config());
                }
                SettingsAction::Changed => {
                    self.ui_state.save_feedback = None;
                }
                SettingsAction::None => {}
            }
        }

        // ── Shortlist side panel ─────────────────────────────
        if self.ui_state.show_shortlist {
            SidePanel::right("shortlist_panel")
                .min_width(220.0)
                .max_width(320.0)
                .show(ctx, |ui| {
                    actions.extend(shortlist::shortlist_panel(ui, &self.session.borrow()));
                });
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let mut session = self.session.borrow_mut();
            actions.extend(chat::chat_panel(ui, &mut session, &self.ui_state));
        });

        // ── Reset confirmation ───────────────────────────────
        if self.session.borrow().is_reset_modal_open() {
            match reset_modal(ctx) {
                Some(ResetChoice::Confirm) => self.session.borrow_mut().confirm_reset(),
                Some(ResetChoice::Cancel) => self.session.borrow_mut().cancel_reset(),
                None => {}
            }
        }

        for action in actions {
            self.apply(action, ctx);
        }
    }
}

impl NamerApp {
    fn apply(&self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Submit => self.dispatch_submit(ctx),
            ChatAction::AddToShortlist(name) => {
                self.session.borrow_mut().add_to_shortlist(name);
            }
            ChatAction::RemoveFromShortlist(name) => {
                self.session.borrow_mut().remove_from_shortlist(&name);
            }
            ChatAction::Copy(text) => self.dispatch_copy(text, ctx),
            ChatAction::OpenResetModal => self.session.borrow_mut().open_reset_modal(),
        }
    }

    /// Submit the draft to the naming service (async)
    fn dispatch_submit(&self, ctx: &egui::Context) {
        let session = self.session.clone();
        let naming = self.naming.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            dispatch::submit(&session, naming.as_ref()).await;
            ctx.request_repaint();
        });
    }

    /// Copy a name and run the copied indicator (async)
    fn dispatch_copy(&self, text: String, ctx: &egui::Context) {
        let session = self.session.clone();
        let clipboard = self.clipboard.clone();
        let timer = self.timer.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            dispatch::copy(&session, clipboard.as_ref(), timer.as_ref(), &text).await;
            ctx.request_repaint();
        });
    }
}
