//! # Booking Form Components
//!
//! Third wizard screen. Which panel is shown depends on the form's step.
//!
//! ## Module Organization:
//! - `personal_info` - Name, email, phone (with country code) and notes
//! - `payment` - Booking summary and card details for paid services
//! - `confirmation` - Appointment details after a successful submission
//! - `failure` - Attempted booking, advice and recovery actions
//!
//! ## Shared Helpers:
//! - `render_booking_details()` - Step router with the progress bar
//! - `render_form_field()` - Input bound to a `FormField` that clears its error on edit

pub mod confirmation;
pub mod failure;
pub mod payment;
pub mod personal_info;

use eframe::egui;
use shared::BookingStep;
use crate::backend::domain::models::FormField;
use crate::ui::app_state::BookingApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::ui_components::form_text_field;

impl BookingApp {
    /// Render the panel for the current form step
    pub fn render_booking_details(&mut self, ui: &mut egui::Ui) {
        let Some(selection) = self.booking.wizard.selection() else {
            return;
        };

        card_frame().show(ui, |ui| {
            self.render_form_progress(ui, selection.service.requires_payment());
            ui.add_space(16.0);

            match self.booking.form.step() {
                BookingStep::PersonalInfo => self.render_personal_info_step(ui, &selection),
                BookingStep::Payment => self.render_payment_step(ui, &selection),
                BookingStep::Confirmed => self.render_confirmation_step(ui),
                BookingStep::Failed => self.render_failure_step(ui),
            }
        });
    }

    /// Text input for one form field; editing it clears that field's error
    pub fn render_form_field(&mut self, ui: &mut egui::Ui, field: FormField, label: &str, hint: &str, width: f32) {
        ui.vertical(|ui| {
            let error = self.booking.form.error_for(field).cloned();
            let response = form_text_field(ui, label, self.booking.form.field_mut(field), hint, error.as_ref(), width);
            if response.changed() {
                self.booking.form.field_changed(field);
            }
        });
    }

    /// Spinner and "Processing..." while a submission is pending
    pub fn render_processing_indicator(&self, ui: &mut egui::Ui) {
        if self.booking.form.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(self.core.t(crate::backend::domain::Message::Processing));
            });
        }
    }
}
