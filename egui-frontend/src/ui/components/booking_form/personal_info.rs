//! # Personal Info Step
//!
//! First form step. Free services submit straight from here; paid services
//! continue to payment.

use eframe::egui;
use crate::backend::domain::models::FormField;
use crate::backend::domain::{BookingSelection, Message};
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{error_label, primary_button, secondary_button, section_title};

const HALF_WIDTH: f32 = 250.0;
const FULL_WIDTH: f32 = 520.0;

impl BookingApp {
    pub fn render_personal_info_step(&mut self, ui: &mut egui::Ui, selection: &BookingSelection) {
        let loading = self.booking.form.is_loading();

        section_title(ui, self.core.t(Message::PersonalInformation));
        ui.add_space(12.0);

        ui.add_enabled_ui(!loading, |ui| {
            ui.horizontal(|ui| {
                self.render_form_field(ui, FormField::FirstName, self.core.t(Message::FirstName), "John", HALF_WIDTH);
                ui.add_space(12.0);
                self.render_form_field(ui, FormField::LastName, self.core.t(Message::LastName), "Doe", HALF_WIDTH);
            });
            ui.add_space(8.0);

            self.render_form_field(ui, FormField::Email, self.core.t(Message::Email), "john.doe@example.com", FULL_WIDTH);
            ui.add_space(8.0);

            self.render_phone_field(ui);
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new(self.core.t(Message::AdditionalNotes))
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_PRIMARY),
            );
            let notes = ui.add(
                egui::TextEdit::multiline(self.booking.form.field_mut(FormField::Notes))
                    .desired_rows(3)
                    .desired_width(FULL_WIDTH),
            );
            if notes.changed() {
                self.booking.form.field_changed(FormField::Notes);
            }
        });

        ui.add_space(16.0);
        self.render_processing_indicator(ui);

        let continue_label = if selection.service.requires_payment() {
            self.core.t(Message::ProceedToPayment)
        } else {
            self.core.t(Message::ConfirmBooking)
        };

        let back_label = format!("← {}", self.core.t(Message::BackToTimeSelection));
        ui.horizontal(|ui| {
            let back = ui.add_enabled_ui(!loading, |ui| secondary_button(ui, &back_label)).inner;
            if back.clicked() {
                self.wizard_back();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if primary_button(ui, continue_label, !loading).clicked() {
                    self.continue_from_personal_info();
                }
            });
        });
    }

    /// Country code button (opens the picker) next to the phone number input
    fn render_phone_field(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(self.core.t(Message::Phone))
                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                .color(colors::TEXT_PRIMARY),
        );

        let error = self.booking.form.error_for(FormField::Phone).cloned();
        ui.horizontal(|ui| {
            let code_button = egui::Button::new(
                egui::RichText::new(format!("{} ▾", self.booking.form.personal.country_code)).color(colors::TEXT_PRIMARY),
            )
            .min_size(egui::vec2(70.0, 30.0));
            if ui.add(code_button).clicked() {
                self.modal.open_country_picker();
            }

            let response = ui.add(
                egui::TextEdit::singleline(self.booking.form.field_mut(FormField::Phone))
                    .hint_text("(555) 123-4567")
                    .desired_width(FULL_WIDTH - 78.0)
                    .margin(egui::vec2(8.0, 6.0)),
            );
            if response.changed() {
                self.booking.form.field_changed(FormField::Phone);
            }
        });
        if let Some(error) = error {
            error_label(ui, &error.to_string());
        }
    }
}
