//! # Support Contact Modal
//!
//! Static contact details offered from the failure screen.

use eframe::egui;
use crate::backend::domain::Message;
use crate::ui::app_state::BookingApp;
use crate::ui::components::modals::shared::{modal_title, show_modal_overlay};
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::primary_button;

impl BookingApp {
    pub fn render_support_contact_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_support_dialog {
            return;
        }

        let close = show_modal_overlay(ctx, "support_contact_modal", egui::vec2(420.0, 180.0), |ui| {
            ui.vertical_centered(|ui| {
                modal_title(ui, &format!("📞 {}", self.core.t(Message::ContactSupport)));
                ui.add_space(12.0);
                ui.label(egui::RichText::new(self.core.t(Message::SupportContactDetails)).color(colors::TEXT_PRIMARY));
                ui.add_space(20.0);
                primary_button(ui, self.core.t(Message::Close), true).clicked()
            })
            .inner
        });

        if close {
            self.modal.show_support_dialog = false;
        }
    }
}
