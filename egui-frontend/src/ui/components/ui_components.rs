//! # UI Components Module
//!
//! Reusable widgets shared by the booking screens and the admin dashboard.
//!
//! ## Key Functions:
//! - `section_title()` - Card heading
//! - `primary_button()` / `secondary_button()` - Filled and outlined actions
//! - `tab_button()` - Toggle button used for filters and dashboard tabs
//! - `form_text_field()` - Labelled text input with an inline validation error
//! - `badge()` - Small colored pill (FREE, Paid, status)
//! - `detail_row()` - "Label: value" line in summaries
//!
//! ## Purpose:
//! These functions keep sizes, colors and spacing consistent across screens.

use eframe::egui;
use crate::backend::domain::ValidationError;
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Heading at the top of a card
pub fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                .strong()
                .color(colors::TEXT_HEADING),
        )
        .selectable(false),
    );
}

/// Filled call-to-action button; clicks are ignored while disabled
pub fn primary_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let fill = CURRENT_THEME.primary_fill(enabled);
    let button = egui::Button::new(
        egui::RichText::new(text)
            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_WHITE),
    )
    .fill(fill)
    .stroke(egui::Stroke::new(1.5, fill))
    .rounding(egui::Rounding::same(8.0))
    .min_size(egui::vec2(160.0, 40.0));

    ui.add_enabled(enabled, button)
}

/// Outlined button for secondary actions such as "Back"
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let button = egui::Button::new(
        egui::RichText::new(text)
            .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_PRIMARY),
    )
    .fill(colors::CARD_BACKGROUND)
    .stroke(egui::Stroke::new(1.0, CURRENT_THEME.interactive.button_border_normal))
    .rounding(egui::Rounding::same(8.0))
    .min_size(egui::vec2(120.0, 36.0));

    ui.add(button)
}

/// Toggle button, filled when active
pub fn tab_button(ui: &mut egui::Ui, text: &str, active: bool) -> egui::Response {
    let (fill, text_color) = CURRENT_THEME.tab_colors(active);
    let button = egui::Button::new(
        egui::RichText::new(text)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
            .color(text_color),
    )
    .min_size(egui::vec2(80.0, 30.0))
    .rounding(egui::Rounding::same(6.0))
    .fill(fill)
    .stroke(egui::Stroke::new(1.5, colors::HOVER_BORDER));

    ui.add(button)
}

/// Labelled single-line input with the field's validation error underneath
pub fn form_text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    error: Option<&ValidationError>,
    width: f32,
) -> egui::Response {
    ui.label(
        egui::RichText::new(label)
            .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
            .color(colors::TEXT_PRIMARY),
    );

    let stroke_color = if error.is_some() { colors::ERROR } else { colors::CARD_BORDER };
    let response = egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, stroke_color))
        .rounding(egui::Rounding::same(6.0))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(width)
                    .margin(egui::vec2(8.0, 6.0))
                    .font(egui::FontId::new(15.0, egui::FontFamily::Proportional)),
            )
        })
        .inner;

    if let Some(error) = error {
        error_label(ui, &error.to_string());
    }
    response
}

/// Red validation message
pub fn error_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
            .color(colors::ERROR),
    );
}

/// Small rounded pill with colored text
pub fn badge(ui: &mut egui::Ui, text: &str, text_color: egui::Color32, background: egui::Color32) {
    egui::Frame::none()
        .fill(background)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(text)
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(text_color),
            );
        });
}

/// "Label: value" row used in booking summaries
pub fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).strong().color(colors::TEXT_PRIMARY));
        });
    });
}

/// Bulleted line for "What's next" style lists
pub fn bullet_item(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(icon).color(colors::TEXT_SECONDARY));
        ui.label(egui::RichText::new(text).color(colors::TEXT_PRIMARY));
    });
}
