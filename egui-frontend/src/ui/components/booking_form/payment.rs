//! # Payment Step
//!
//! Second form step, only reached for paid services. Shows what is being
//! booked and collects card details.

use eframe::egui;
use crate::backend::domain::models::FormField;
use crate::backend::domain::time_slot_service::format_long_date;
use crate::backend::domain::{BookingSelection, CatalogService, Message};
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{detail_row, primary_button, secondary_button, section_title};

impl BookingApp {
    pub fn render_payment_step(&mut self, ui: &mut egui::Ui, selection: &BookingSelection) {
        let loading = self.booking.form.is_loading();

        section_title(ui, self.core.t(Message::PaymentInformation));
        ui.add_space(12.0);

        self.render_booking_summary(ui, selection);
        ui.add_space(16.0);

        ui.add_enabled_ui(!loading, |ui| {
            self.render_form_field(ui, FormField::CardNumber, self.core.t(Message::CardNumber), "1234 5678 9012 3456", 520.0);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                self.render_form_field(ui, FormField::CardExpiry, self.core.t(Message::ExpiryDate), "MM/YY", 250.0);
                ui.add_space(12.0);
                self.render_form_field(ui, FormField::CardCvc, self.core.t(Message::Cvc), "123", 250.0);
            });
        });

        ui.add_space(16.0);
        self.render_processing_indicator(ui);

        let pay_label = format!(
            "{} {} {}",
            self.core.t(Message::Pay),
            CatalogService::format_price(&selection.service),
            self.core.t(Message::AndConfirm)
        );
        let back_label = format!("← {}", self.core.t(Message::BackToPersonalInfo));

        ui.horizontal(|ui| {
            let back = ui.add_enabled_ui(!loading, |ui| secondary_button(ui, &back_label)).inner;
            if back.clicked() {
                self.back_to_personal_info();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, &pay_label, !loading).clicked() {
                    self.submit_payment();
                }
            });
        });
    }

    fn render_booking_summary(&self, ui: &mut egui::Ui, selection: &BookingSelection) {
        egui::Frame::none()
            .fill(colors::SUMMARY_BACKGROUND)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(self.core.t(Message::BookingSummary)).strong().color(colors::TEXT_HEADING));
                ui.add_space(6.0);
                detail_row(ui, self.core.t(Message::ServiceLabel), &selection.service.name);
                detail_row(ui, self.core.t(Message::DateLabel), &format_long_date(selection.date));
                detail_row(ui, self.core.t(Message::TimeLabel), &selection.slot.time);
                detail_row(ui, self.core.t(Message::DurationLabel), &selection.service.duration);
                ui.separator();
                detail_row(ui, self.core.t(Message::PriceLabel), &CatalogService::format_price(&selection.service));
            });
    }
}
