//! # Failure Step
//!
//! Shown when the simulated submission fails. "Try Again" returns to the
//! personal info step with everything still filled in; "Start Over" drops
//! the booking.

use eframe::egui;
use crate::backend::domain::Message;
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{bullet_item, detail_row, primary_button, secondary_button};

impl BookingApp {
    pub fn render_failure_step(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("❌").font(egui::FontId::new(48.0, egui::FontFamily::Proportional)));
            ui.label(
                egui::RichText::new(self.core.t(Message::BookingFailed))
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::ERROR),
            );
            ui.add_space(6.0);
            ui.label(egui::RichText::new(self.core.t(Message::FailureExplanation)).color(colors::TEXT_SECONDARY));
        });
        ui.add_space(16.0);

        if let Some(receipt) = self.booking.form.receipt() {
            egui::Frame::none()
                .fill(CURRENT_THEME.status.error_background)
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(14.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(self.core.t(Message::AttemptedBooking)).strong().color(colors::TEXT_HEADING));
                    ui.add_space(6.0);
                    detail_row(ui, self.core.t(Message::ServiceLabel), &receipt.service_name);
                    detail_row(ui, self.core.t(Message::DateLabel), &receipt.date);
                    detail_row(ui, self.core.t(Message::TimeLabel), &receipt.time);
                });
            ui.add_space(16.0);
        }

        egui::Frame::none()
            .fill(CURRENT_THEME.status.warning_background)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(self.core.t(Message::WhatYouCanDo)).strong().color(CURRENT_THEME.status.warning));
                bullet_item(ui, "•", self.core.t(Message::AdviceCheckPayment));
                bullet_item(ui, "•", self.core.t(Message::AdviceDifferentSlot));
                bullet_item(ui, "•", self.core.t(Message::AdviceContactSupport));
                bullet_item(ui, "•", self.core.t(Message::AdviceSlotHeld));
            });
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if primary_button(ui, self.core.t(Message::TryAgain), true).clicked() {
                self.retry_booking();
            }
            if secondary_button(ui, self.core.t(Message::StartOver)).clicked() {
                self.start_new_booking();
            }
            if secondary_button(ui, self.core.t(Message::ContactSupport)).clicked() {
                self.modal.open_support_dialog();
            }
        });
    }
}
