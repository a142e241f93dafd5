//! Settings panel — naming service endpoint and storage backend.
//! Changes apply when Save is clicked.

use egui::{self, RichText, Vec2};
use namer_types::config::{NamerConfig, StorageBackendType};
use crate::state::SaveFeedback;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was edited but not saved yet
    Changed,
    /// The user clicked the explicit Save button
    SaveClicked,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut NamerConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Naming Service Section ───────────────────────
            ui.label(RichText::new("Naming service").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Endpoint URL").color(TEXT_SECONDARY).small());
            if ui
                .add(
                    egui::TextEdit::singleline(&mut config.naming.endpoint)
                        .hint_text("https://.../generate/names"),
                )
                .changed()
            {
                changed = true;
            }

            ui.add_space(4.0);

            ui.label(RichText::new("Copied indicator (ms)").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.copied_indicator_ms, 500..=5000))
                .changed()
            {
                changed = true;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Storage Section ──────────────────────────────
            ui.label(RichText::new("Storage").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Backend").color(TEXT_SECONDARY).small());
            egui::ComboBox::from_id_salt("storage_backend")
                .selected_text(config.storage.backend.label())
                .show_ui(ui, |ui| {
                    for backend in StorageBackendType::all() {
                        if ui
                            .selectable_value(&mut config.storage.backend, *backend, backend.label())
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });

            ui.add_space(4.0);
            ui.label(
                RichText::new(storage_description(&config.storage.backend))
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );

            // ── Save Button ──────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(
                        RichText::new("Save Settings")
                            .color(egui::Color32::WHITE)
                            .strong(),
                    )
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(
                        RichText::new(&fb.message)
                            .color(color)
                            .small(),
                    );
                }
            });
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}

fn storage_description(backend: &StorageBackendType) -> &'static str {
    match backend {
        StorageBackendType::Auto => "Uses local storage when the browser allows it, otherwise memory. Takes effect on reload.",
        StorageBackendType::LocalStorage => "History and shortlist survive page reloads. Takes effect on reload.",
        StorageBackendType::Memory => "Nothing is kept after the page is closed. Takes effect on reload.",
    }
}
