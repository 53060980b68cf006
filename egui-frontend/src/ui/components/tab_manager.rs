//! # Tab Manager Module
//!
//! Central content router below the header.
//!
//! ## Key Functions:
//! - `render_main_content()` - Routes to the booking wizard or the admin dashboard
//!
//! ## Flow:
//! - AppScreen::Booking -> progress indicator, then the screen for the wizard step
//! - AppScreen::Admin -> admin dashboard

use eframe::egui;
use crate::backend::domain::WizardStep;
use crate::ui::app_state::BookingApp;
use crate::ui::state::AppScreen;

const CONTENT_MAX_WIDTH: f32 = 760.0;

impl BookingApp {
    /// Render the main content area
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.add_space(20.0);

                    match self.core.current_screen {
                        AppScreen::Booking => self.render_booking_screen(ui),
                        AppScreen::Admin => self.render_admin_dashboard(ui),
                    }

                    ui.add_space(30.0);
                });
            });
    }

    fn render_booking_screen(&mut self, ui: &mut egui::Ui) {
        self.render_wizard_progress(ui);
        ui.add_space(16.0);

        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| match self.booking.wizard.step() {
            WizardStep::SelectService => self.render_service_selection(ui),
            WizardStep::ChooseTime => self.render_time_selection(ui),
            WizardStep::EnterDetails => self.render_booking_details(ui),
        });
    }
}
