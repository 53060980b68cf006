//! # Calendar Renderer Module
//!
//! Second wizard screen: pick a date inside the booking window, then an
//! available half-hour slot.
//!
//! ## Key Functions:
//! - `render_time_selection()` - Date controls, slot grid, legend and back button
//! - `render_date_controls()` - Date picker with previous/next day arrows
//! - `render_slot_grid()` - Clickable slots colored by availability
//!
//! ## Behavior:
//! - Dates outside the window are clamped back into it
//! - Changing the date regenerates slots and clears the highlighted slot
//! - Unavailable slots are drawn disabled and ignore clicks

use eframe::egui;
use shared::TimeSlot;
use crate::backend::domain::Message;
use crate::backend::domain::time_slot_service::format_long_date;
use crate::ui::app_state::BookingApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{badge, secondary_button, section_title};

const SLOT_COLUMNS: usize = 4;
const SLOT_SIZE: egui::Vec2 = egui::vec2(120.0, 40.0);

impl BookingApp {
    pub fn render_time_selection(&mut self, ui: &mut egui::Ui) {
        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                section_title(ui, self.core.t(Message::SelectDateTime));
                if let Some(service) = self.booking.wizard.service() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(
                            ui,
                            &format!("{} · {}", service.name, service.duration),
                            colors::ACTIVE_BACKGROUND,
                            CURRENT_THEME.interactive.hover_background,
                        );
                    });
                }
            });
            ui.add_space(12.0);

            self.render_date_controls(ui);
            ui.add_space(16.0);

            ui.label(
                egui::RichText::new(self.core.t(Message::AvailableTimeSlots))
                    .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::TEXT_HEADING),
            );
            ui.add_space(8.0);
            self.render_slot_grid(ui);
            ui.add_space(12.0);
            self.render_slot_legend(ui);
            ui.add_space(16.0);

            if secondary_button(ui, &format!("← {}", self.core.t(Message::BackToServices))).clicked() {
                self.wizard_back();
            }
        });
    }

    /// Date picker flanked by previous/next day arrows, plus the long-form date
    fn render_date_controls(&mut self, ui: &mut egui::Ui) {
        let window = self.calendar.window;
        let mut picked = self.calendar.selected_date;

        ui.horizontal(|ui| {
            let can_go_back = picked > window.min_date;
            if ui.add_enabled(can_go_back, egui::Button::new("◀")).clicked() {
                self.previous_day();
            }

            ui.add(
                egui_extras::DatePickerButton::new(&mut picked)
                    .id_source("booking_date_picker")
                    .calendar_week(false)
                    .show_icon(true),
            );

            let can_go_forward = self.calendar.selected_date < window.max_date;
            if ui.add_enabled(can_go_forward, egui::Button::new("▶")).clicked() {
                self.next_day();
            }

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(format_long_date(self.calendar.selected_date))
                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_PRIMARY),
            );
        });

        if picked != self.calendar.selected_date {
            self.change_date(picked);
        }
    }

    fn render_slot_grid(&mut self, ui: &mut egui::Ui) {
        if !self.calendar.slots.iter().any(|slot| slot.available) {
            ui.label(egui::RichText::new(self.core.t(Message::NoSlotsAvailable)).color(colors::TEXT_SECONDARY));
        }

        let mut clicked: Option<String> = None;
        egui::Grid::new("time_slot_grid")
            .num_columns(SLOT_COLUMNS)
            .spacing(egui::vec2(10.0, 10.0))
            .show(ui, |ui| {
                for (index, slot) in self.calendar.slots.iter().enumerate() {
                    let selected = self.calendar.is_selected(slot);
                    if slot_button(ui, slot, selected).clicked() {
                        clicked = Some(slot.id.clone());
                    }
                    if index % SLOT_COLUMNS == SLOT_COLUMNS - 1 {
                        ui.end_row();
                    }
                }
            });

        if let Some(slot_id) = clicked {
            self.select_time_slot(&slot_id);
        }
    }

    fn render_slot_legend(&self, ui: &mut egui::Ui) {
        let slots = &CURRENT_THEME.slots;
        let entries = [
            (slots.available_background, slots.available_border, Message::Available),
            (slots.unavailable_background, slots.unavailable_background, Message::Unavailable),
            (slots.selected_background, slots.selected_background, Message::Selected),
        ];

        ui.horizontal(|ui| {
            for (fill, border, message) in entries {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, egui::Rounding::same(3.0), fill);
                ui.painter().rect_stroke(rect, egui::Rounding::same(3.0), egui::Stroke::new(1.0, border));
                ui.label(egui::RichText::new(self.core.t(message)).color(colors::TEXT_SECONDARY));
                ui.add_space(12.0);
            }
        });
    }
}

/// One slot in the grid; disabled when the slot is taken
fn slot_button(ui: &mut egui::Ui, slot: &TimeSlot, selected: bool) -> egui::Response {
    let palette = &CURRENT_THEME.slots;
    let (fill, border, text_color) = if selected {
        (palette.selected_background, palette.selected_background, CURRENT_THEME.typography.white)
    } else if slot.available {
        (palette.available_background, palette.available_border, CURRENT_THEME.typography.primary)
    } else {
        (palette.unavailable_background, palette.unavailable_background, palette.unavailable_text)
    };

    let mut text = egui::RichText::new(&slot.time)
        .font(egui::FontId::new(15.0, egui::FontFamily::Proportional))
        .color(text_color);
    if !slot.available {
        text = text.strikethrough();
    }

    let button = egui::Button::new(text)
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, border))
        .rounding(egui::Rounding::same(8.0))
        .min_size(SLOT_SIZE);

    ui.add_enabled(slot.available, button)
}
