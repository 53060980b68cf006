//! # Header Module
//!
//! This module renders the application header and the feedback line below it.
//!
//! ## Key Functions:
//! - `render_header()` - Title, Booking/Admin toggle and language switcher
//! - `render_messages()` - Error message display
//!
//! ## Purpose:
//! The header is shown on every screen and owns the two global switches:
//! which screen is visible and which language the labels use.

use eframe::egui;
use shared::Locale;
use crate::backend::domain::Message;
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::tab_button;
use crate::ui::state::AppScreen;

impl BookingApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        let frame = egui::Frame::none()
            .fill(CURRENT_THEME.layout.header_background)
            .inner_margin(egui::Margin::symmetric(20.0, 12.0));

        frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("📅 {}", self.core.t(Message::AppTitle)))
                            .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_HEADING),
                    )
                    .selectable(false),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_language_switcher(ui);
                    ui.add_space(15.0);
                    self.render_screen_toggle(ui);
                });
            });
        });
    }

    /// Booking/Admin toggle (rendered right-to-left)
    fn render_screen_toggle(&mut self, ui: &mut egui::Ui) {
        let current = self.core.current_screen;

        if tab_button(ui, self.core.t(Message::AdminScreen), current == AppScreen::Admin).clicked() {
            self.switch_screen(AppScreen::Admin);
        }
        ui.add_space(4.0);
        if tab_button(ui, self.core.t(Message::BookingScreen), current == AppScreen::Booking).clicked() {
            self.switch_screen(AppScreen::Booking);
        }
    }

    fn render_language_switcher(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.core.locale;
        egui::ComboBox::from_id_source("language_switcher")
            .selected_text(format!("🌐 {}", selected.display_name()))
            .width(120.0)
            .show_ui(ui, |ui| {
                for locale in Locale::ALL {
                    ui.selectable_value(&mut selected, locale, locale.display_name());
                }
            });
        self.set_locale(selected);
    }

    /// Render the error line under the header
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;
        if let Some(error) = &self.ui.error_message {
            ui.horizontal(|ui| {
                ui.add_space(20.0);
                ui.colored_label(colors::ERROR, format!("❌ {}", error));
                if ui.small_button("✖").clicked() {
                    dismissed = true;
                }
            });
        }
        if dismissed {
            self.ui.clear_messages();
        }
    }
}
