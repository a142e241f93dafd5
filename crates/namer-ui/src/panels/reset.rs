//! Confirmation dialog shown before clearing the chat history.

use egui::{self, RichText};
use crate::theme::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetChoice {
    Confirm,
    Cancel,
}

/// Choice made this frame. An explicit button wins over dismissal
/// (Escape or a click on the backdrop), which cancels.
pub fn resolve_choice(confirm: bool, cancel: bool, dismissed: bool) -> Option<ResetChoice> {
    if confirm {
        Some(ResetChoice::Confirm)
    } else if cancel || dismissed {
        Some(ResetChoice::Cancel)
    } else {
        None
    }
}

/// Render the dialog. Input to everything behind it is blocked while it is
/// shown. Returns the user's choice on the frame it is made.
pub fn reset_modal(ctx: &egui::Context) -> Option<ResetChoice> {
    let mut confirm = false;
    let mut cancel = false;

    let modal = egui::Modal::new(egui::Id::new("reset_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.heading(RichText::new("Clear chat history?").color(TEXT_PRIMARY));
        ui.add_space(4.0);
        ui.label(
            RichText::new("All messages and shortlisted names will be removed. This cannot be undone.")
                .color(TEXT_PRIMARY),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            confirm = ui
                .add(
                    egui::Button::new(RichText::new("Clear").color(egui::Color32::WHITE).strong())
                        .fill(ERROR)
                        .corner_radius(PANEL_ROUNDING),
                )
                .clicked();
            cancel = ui.button("Cancel").clicked();
        });
    });

    resolve_choice(confirm, cancel, modal.should_close())
}
