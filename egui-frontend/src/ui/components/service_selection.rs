//! # Service Selection Module
//!
//! First screen of the booking wizard: filter tabs, one card per service and
//! a hint. Clicking a card selects the service and opens the calendar.

use eframe::egui;
use shared::{Service, ServiceFilter};
use crate::backend::domain::{CatalogService, Message};
use crate::ui::app_state::BookingApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{badge, section_title, tab_button};

const CARD_WIDTH: f32 = 300.0;

impl BookingApp {
    pub fn render_service_selection(&mut self, ui: &mut egui::Ui) {
        let mut chosen: Option<Service> = None;

        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                section_title(ui, self.core.t(Message::SelectAService));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Right-to-left, so the tabs are added in reverse
                    for filter in ServiceFilter::ALL.iter().rev() {
                        let active = self.booking.service_filter == *filter;
                        if tab_button(ui, self.filter_label(*filter), active).clicked() {
                            self.booking.service_filter = *filter;
                        }
                    }
                });
            });
            ui.add_space(16.0);

            let services = self.core.backend.catalog_service.list_services(self.booking.service_filter);
            egui::Grid::new("service_cards")
                .num_columns(2)
                .spacing(egui::vec2(16.0, 16.0))
                .show(ui, |ui| {
                    for (index, service) in services.iter().enumerate() {
                        if self.render_service_card(ui, service) {
                            chosen = Some(service.clone());
                        }
                        if index % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(16.0);
            egui::Frame::none()
                .fill(CURRENT_THEME.status.info_background)
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(format!("ℹ {}", self.core.t(Message::SelectServiceHint))).color(colors::TEXT_PRIMARY));
                });
        });

        if let Some(service) = chosen {
            self.select_service(service);
        }
    }

    /// Draw one service card; returns true when it was clicked
    fn render_service_card(&self, ui: &mut egui::Ui, service: &Service) -> bool {
        let response = egui::Frame::none()
            .fill(colors::CARD_BACKGROUND)
            .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&service.name)
                            .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(colors::TEXT_HEADING),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if service.requires_payment() {
                            ui.label(
                                egui::RichText::new(CatalogService::format_price(service))
                                    .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            );
                        } else {
                            badge(
                                ui,
                                self.core.t(Message::FreeBadge),
                                colors::SUCCESS,
                                CURRENT_THEME.status.success_background,
                            );
                        }
                    });
                });
                ui.add_space(6.0);
                ui.label(egui::RichText::new(&service.description).color(colors::TEXT_SECONDARY));
                ui.add_space(6.0);
                ui.label(egui::RichText::new(format!("⏱ {}", service.duration)).color(colors::TEXT_SECONDARY));
            })
            .response
            .interact(egui::Sense::click());

        if response.hovered() {
            ui.painter().rect_stroke(
                response.rect,
                egui::Rounding::same(10.0),
                egui::Stroke::new(2.0, colors::HOVER_BORDER),
            );
        }
        response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
    }

    fn filter_label(&self, filter: ServiceFilter) -> &'static str {
        let message = match filter {
            ServiceFilter::All => Message::FilterAll,
            ServiceFilter::Free => Message::FilterFree,
            ServiceFilter::Paid => Message::FilterPaid,
        };
        self.core.t(message)
    }
}
