//! # Confirmation Step
//!
//! Shown after a successful submission, built from the booking receipt.

use eframe::egui;
use shared::BookingReceipt;
use crate::backend::domain::Message;
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{bullet_item, detail_row, primary_button, secondary_button};

impl BookingApp {
    pub fn render_confirmation_step(&mut self, ui: &mut egui::Ui) {
        let Some(receipt) = self.booking.form.receipt().cloned() else {
            return;
        };

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("✅").font(egui::FontId::new(48.0, egui::FontFamily::Proportional)));
            ui.label(
                egui::RichText::new(self.core.t(Message::BookingConfirmed))
                    .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::SUCCESS),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("{} {}", self.core.t(Message::ConfirmationSentTo), receipt.email))
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(16.0);

        self.render_receipt_details(ui, &receipt);
        ui.add_space(16.0);

        ui.label(egui::RichText::new(self.core.t(Message::WhatsNext)).strong().color(colors::TEXT_HEADING));
        bullet_item(ui, "📧", self.core.t(Message::NextCalendarInvite));
        bullet_item(ui, "⏰", self.core.t(Message::NextReminder));
        bullet_item(ui, "📞", self.core.t(Message::NextReschedule));
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if secondary_button(ui, self.core.t(Message::ReturnHome)).clicked() {
                self.start_new_booking();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, self.core.t(Message::BookAnother), true).clicked() {
                    self.start_new_booking();
                }
            });
        });
    }

    fn render_receipt_details(&self, ui: &mut egui::Ui, receipt: &BookingReceipt) {
        egui::Frame::none()
            .fill(CURRENT_THEME.status.success_background)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(self.core.t(Message::AppointmentDetails)).strong().color(colors::TEXT_HEADING));
                ui.add_space(6.0);
                detail_row(ui, self.core.t(Message::ServiceLabel), &receipt.service_name);
                detail_row(ui, self.core.t(Message::DateLabel), &receipt.date);
                detail_row(ui, self.core.t(Message::TimeLabel), &receipt.time);
                detail_row(ui, self.core.t(Message::DurationLabel), &receipt.duration);
                match receipt.amount {
                    Some(amount) => detail_row(ui, self.core.t(Message::TotalPaid), &format!("${:.2}", amount)),
                    None => detail_row(ui, self.core.t(Message::PriceLabel), self.core.t(Message::Free)),
                }
            });
    }
}
