//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 250, 249);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(241, 240, 238);
pub const BG_SURFACE: Color32 = Color32::from_rgb(228, 226, 222);
pub const BG_USER: Color32 = Color32::from_rgb(224, 236, 255);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(28, 25, 23);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(120, 113, 108);
pub const ACCENT: Color32 = Color32::from_rgb(13, 110, 253);
pub const SUCCESS: Color32 = Color32::from_rgb(25, 135, 84);
pub const ERROR: Color32 = Color32::from_rgb(220, 53, 69);
pub const WARNING: Color32 = Color32::from_rgb(214, 145, 0);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = egui::Color32::WHITE;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
