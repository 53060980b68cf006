//! # Country Picker Modal
//!
//! Opened from the phone field. Typing filters by country name or dialing
//! code; clicking a row sets the code and closes the dialog.

use eframe::egui;
use crate::backend::domain::Message;
use crate::ui::app_state::BookingApp;
use crate::ui::components::modals::shared::{modal_title, show_modal_overlay};
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::primary_button;

impl BookingApp {
    pub fn render_country_picker_modal(&mut self, ctx: &egui::Context) {
        if !self.modal.show_country_picker {
            return;
        }

        let mut picked: Option<String> = None;
        let mut done = false;
        let current_code = self.booking.form.personal.country_code.clone();

        show_modal_overlay(ctx, "country_picker_modal", egui::vec2(420.0, 460.0), |ui| {
            ui.vertical(|ui| {
                modal_title(ui, self.core.t(Message::SelectCountry));
                ui.add_space(10.0);

                ui.add(
                    egui::TextEdit::singleline(&mut self.modal.country_search)
                        .hint_text(self.core.t(Message::SearchCountries))
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                let matches = self.core.backend.country_service.search(&self.modal.country_search);
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for country in &matches {
                        let selected = country.code == current_code;
                        let row = ui.add_sized(
                            [ui.available_width(), 28.0],
                            egui::SelectableLabel::new(
                                selected,
                                egui::RichText::new(format!("{}  {} ({})", country.code, country.name, country.country))
                                    .color(colors::TEXT_PRIMARY),
                            ),
                        );
                        if row.clicked() {
                            picked = Some(country.code.clone());
                        }
                    }
                });

                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button(ui, self.core.t(Message::Done), true).clicked() {
                        done = true;
                    }
                });
            });
        });

        if let Some(code) = picked {
            self.select_country(&code);
        } else if done {
            self.modal.close_country_picker();
        }
    }
}
