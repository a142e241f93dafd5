//! Chat panel — displays the conversation and the message input.

use egui::{self, Align, Key, Layout, Modifiers, RichText, ScrollArea, Vec2};
use namer_core::session::{offers_name_actions, ChatSession};
use namer_types::turn::ChatTurn;
use super::ChatAction;
use crate::state::UiState;
use crate::theme::*;

/// Rows the input grows to for `draft`: one per line, never fewer than one.
pub fn input_rows(draft: &str) -> usize {
    draft.split('\n').count().max(1)
}

/// Whether a plain Enter in the input is kept from inserting a newline.
/// Shift+Enter always reaches the text edit.
pub fn intercepts_enter(modifiers: Modifiers, has_focus: bool) -> bool {
    has_focus && !modifiers.shift
}

/// Whether an Enter press with `modifiers` submits the draft
pub fn enter_submits(modifiers: Modifiers, has_focus: bool, can_submit: bool) -> bool {
    intercepts_enter(modifiers, has_focus) && can_submit
}

/// Render the chat panel. Returns what the user asked for this frame.
pub fn chat_panel(ui: &mut egui::Ui, session: &mut ChatSession, state: &UiState) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Business Name Finder")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let has_history = !session.turns().is_empty() || !session.shortlist().is_empty();
                        if ui
                            .add_enabled(has_history, egui::Button::new("Clear history"))
                            .clicked()
                        {
                            actions.push(ChatAction::OpenResetModal);
                        }

                        let status_color = if state.status_is_error {
                            ERROR
                        } else if session.is_submitting() {
                            WARNING
                        } else {
                            SUCCESS
                        };
                        ui.label(
                            RichText::new(&state.status_text)
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.separator();

                let rows = input_rows(&session.draft);
                let row_height = ui.text_style_height(&egui::TextStyle::Body);
                let input_height = rows as f32 * row_height + 24.0;

                // Messages area
                let available_height = (ui.available_height() - input_height - 16.0).max(80.0);
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if session.turns().is_empty() {
                            ui.label(
                                RichText::new("Describe your business and get name ideas.")
                                    .color(TEXT_SECONDARY)
                                    .italics(),
                            );
                        }

                        for turn in session.turns() {
                            render_turn(ui, turn, session, &mut actions);
                            ui.add_space(4.0);
                        }

                        if session.is_submitting() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    RichText::new("Generating names...")
                                        .color(TEXT_SECONDARY),
                                );
                            });
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let input_id = egui::Id::new("chat_input");

                    // consume_key also matches Shift+Enter, so the modifier check comes first
                    let has_focus = ui.memory(|m| m.has_focus(input_id));
                    let modifiers = ui.input(|i| i.modifiers);
                    let enter_pressed = intercepts_enter(modifiers, has_focus)
                        && ui.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Enter));

                    let input = egui::TextEdit::multiline(&mut session.draft)
                        .id(input_id)
                        .hint_text("Enter your business details")
                        .desired_rows(rows)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = session.can_submit();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(
                            RichText::new("Send").color(egui::Color32::WHITE),
                        )
                        .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter_sends = enter_pressed && enter_submits(modifiers, has_focus, send_enabled);
                    if enter_sends || send_btn.clicked() {
                        actions.push(ChatAction::Submit);
                        response.request_focus();
                    }
                });
            });
        });

    actions
}

fn render_turn(
    ui: &mut egui::Ui,
    turn: &ChatTurn,
    session: &ChatSession,
    actions: &mut Vec<ChatAction>,
) {
    let (label, label_color, bg) = if turn.is_user() {
        ("You", ACCENT, BG_USER)
    } else {
        ("BrandsDigger", SUCCESS, BG_SECONDARY)
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(label).color(label_color).strong().small());

            if !offers_name_actions(turn) {
                ui.label(RichText::new(&turn.text).color(TEXT_PRIMARY));
                return;
            }

            for name in turn.lines().filter(|line| !line.trim().is_empty()) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).color(TEXT_PRIMARY));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        name_buttons(ui, name, session, actions);
                    });
                });
            }
        });
}

/// Shortlist and Copy buttons for one generated name
fn name_buttons(ui: &mut egui::Ui, name: &str, session: &ChatSession, actions: &mut Vec<ChatAction>) {
    if session.copied_text() == Some(name) {
        ui.label(RichText::new("Copied!").color(SUCCESS).small());
    } else if ui.small_button("Copy").clicked() {
        actions.push(ChatAction::Copy(name.to_string()));
    }

    if session.is_shortlisted(name) {
        if ui.small_button("Remove").clicked() {
            actions.push(ChatAction::RemoveFromShortlist(name.to_string()));
        }
    } else if ui.small_button("Shortlist").clicked() {
        actions.push(ChatAction::AddToShortlist(name.to_string()));
    }
}
