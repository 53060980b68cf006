//! # Shared Modal Utilities
//!
//! Common backdrop and frame for every dialog, plus the coordinator that
//! renders whichever modal is open.

use eframe::egui;
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::colors;

impl BookingApp {
    /// Render all modals - main modal coordinator
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.modal.any_open() {
            self.modal.close_all();
            return;
        }

        self.render_country_picker_modal(ctx);
        self.render_support_contact_modal(ctx);
    }
}

/// Dim the screen and show a centered white dialog of the given size
pub fn show_modal_overlay<R>(
    ctx: &egui::Context,
    id: &str,
    size: egui::Vec2,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
            );

            ui.allocate_ui_at_rect(screen_rect, |ui| {
                ui.centered_and_justified(|ui| {
                    egui::Frame::window(ui.style())
                        .fill(colors::CARD_BACKGROUND)
                        .stroke(egui::Stroke::new(2.0, colors::HOVER_BORDER))
                        .rounding(egui::Rounding::same(15.0))
                        .inner_margin(egui::Margin::same(20.0))
                        .show(ui, |ui| {
                            ui.set_min_size(size);
                            ui.set_max_size(size);
                            add_contents(ui)
                        })
                        .inner
                })
                .inner
            })
            .inner
        })
        .inner
}

/// Dialog title in the shared modal style
pub fn modal_title(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
            .strong()
            .color(colors::TEXT_HEADING),
    );
}
