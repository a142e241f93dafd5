//! Shortlist panel — the names the user decided to keep.

use egui::{self, Align, Layout, RichText, ScrollArea};
use namer_core::session::ChatSession;
use super::ChatAction;
use crate::theme::*;

pub fn shortlist_panel(ui: &mut egui::Ui, session: &ChatSession) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new(format!("Shortlist ({})", session.shortlist().len()))
                    .color(TEXT_PRIMARY),
            );
            ui.separator();

            if session.shortlist().is_empty() {
                ui.label(
                    RichText::new("Names you shortlist appear here.")
                        .color(TEXT_SECONDARY)
                        .small()
                        .italics(),
                );
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    // Duplicates are allowed, so rows are keyed by position
                    for (index, name) in session.shortlist().iter().enumerate() {
                        ui.push_id(index, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(name).color(TEXT_PRIMARY));
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui.small_button("Remove").clicked() {
                                        actions.push(ChatAction::RemoveFromShortlist(name.clone()));
                                    }
                                    if session.copied_text() == Some(name.as_str()) {
                                        ui.label(RichText::new("Copied!").color(SUCCESS).small());
                                    } else if ui.small_button("Copy").clicked() {
                                        actions.push(ChatAction::Copy(name.clone()));
                                    }
                                });
                            });
                        });
                    }
                });
        });

    actions
}
