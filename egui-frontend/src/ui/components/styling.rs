//! # Styling Module
//!
//! Global egui style setup and drawing helpers shared by every screen.
//!
//! ## Key Functions:
//! - `setup_booking_style()` - Configure global egui styling
//! - `draw_app_background()` - Paint the flat page background
//! - `card_frame()` - Frame used for white content cards
//!
//! ## Purpose:
//! Keeps fonts, spacing and the card look in one place so the booking
//! screens and the admin dashboard match.

use eframe::egui;
use super::theme::{colors, CURRENT_THEME};

/// Setup UI styling for the entire application
pub fn setup_booking_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.window_fill = colors::CARD_BACKGROUND;
        style.visuals.button_frame = true;

        // In egui 0.28 text edits use extreme_bg_color
        style.visuals.extreme_bg_color = egui::Color32::WHITE;
        style.visuals.selection.bg_fill = CURRENT_THEME.interactive.hover_border;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Paint the page background behind all content
pub fn draw_app_background(ui: &mut egui::Ui, rect: egui::Rect) {
    ui.painter().rect_filled(rect, egui::Rounding::ZERO, colors::APP_BACKGROUND);
}

/// Frame for the white content cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(24.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(2.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}
