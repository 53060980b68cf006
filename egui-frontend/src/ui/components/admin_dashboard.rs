//! # Admin Dashboard Module
//!
//! Read-only admin screen over mock data.
//!
//! ## Key Functions:
//! - `render_admin_dashboard()` - Title band, tab row and the active tab
//! - `render_admin_overview()` - Stat cards and upcoming appointments
//! - `render_appointments_table()` - Filterable appointment table
//!
//! Customers, Services and Settings only show a description of what the
//! section is for.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{Appointment, AppointmentStatus};
use crate::backend::domain::{DashboardTab, Message};
use crate::ui::app_state::BookingApp;
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{badge, secondary_button, section_title, tab_button};

impl BookingApp {
    pub fn render_admin_dashboard(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(CURRENT_THEME.layout.admin_header_background)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(self.core.t(Message::AdminTitle))
                        .font(egui::FontId::new(24.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::TEXT_WHITE),
                );
                ui.label(egui::RichText::new(self.core.t(Message::AdminSubtitle)).color(colors::TEXT_WHITE));
            });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            for tab in DashboardTab::ALL {
                let active = self.admin.current_tab == tab;
                if tab_button(ui, self.core.t(tab_message(tab)), active).clicked() {
                    self.admin.current_tab = tab;
                }
            }
        });
        ui.add_space(12.0);

        match self.admin.current_tab {
            DashboardTab::Overview => self.render_admin_overview(ui),
            DashboardTab::Appointments => {
                card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        section_title(ui, self.core.t(Message::AllAppointments));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            self.render_filter_button(ui);
                        });
                    });
                    ui.add_space(8.0);
                    let appointments = self.core.backend.dashboard_service.filter_appointments(self.admin.status_filter);
                    let headers = [
                        self.core.t(Message::ColumnCustomer),
                        self.core.t(Message::ColumnService),
                        self.core.t(Message::ColumnDate),
                        self.core.t(Message::ColumnTime),
                        self.core.t(Message::ColumnStatus),
                        "",
                    ];
                    render_appointments_table(ui, headers, &appointments);
                });
            }
            DashboardTab::Customers => self.render_placeholder_tab(ui, Message::CustomerManagement, Message::CustomerManagementHint),
            DashboardTab::Services => self.render_placeholder_tab(ui, Message::ServiceManagement, Message::ServiceManagementHint),
            DashboardTab::Settings => self.render_placeholder_tab(ui, Message::SystemSettings, Message::SystemSettingsHint),
        }
    }

    fn render_admin_overview(&mut self, ui: &mut egui::Ui) {
        let stats = self.core.backend.dashboard_service.stats().clone();
        let revenue = self.core.backend.dashboard_service.format_revenue();

        ui.columns(4, |columns| {
            stat_card(&mut columns[0], self.core.t(Message::TotalAppointments), &stats.total_appointments.to_string(), colors::ACTIVE_BACKGROUND);
            stat_card(&mut columns[1], self.core.t(Message::Confirmed), &stats.confirmed_appointments.to_string(), colors::SUCCESS);
            stat_card(&mut columns[2], self.core.t(Message::Pending), &stats.pending_appointments.to_string(), CURRENT_THEME.status.warning);
            stat_card(&mut columns[3], self.core.t(Message::Revenue), &revenue, colors::TEXT_HEADING);
        });
        ui.add_space(16.0);

        card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                section_title(ui, self.core.t(Message::UpcomingAppointments));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_filter_button(ui);
                });
            });
            ui.add_space(8.0);

            let appointments = self.core.backend.dashboard_service.filter_appointments(self.admin.status_filter);
            for appointment in &appointments {
                self.render_appointment_row(ui, appointment);
                ui.separator();
            }

            if secondary_button(ui, self.core.t(Message::ViewAllAppointments)).clicked() {
                self.admin.current_tab = DashboardTab::Appointments;
            }
        });
    }

    /// Cycles all → confirmed → pending
    fn render_filter_button(&mut self, ui: &mut egui::Ui) {
        let current = match self.admin.status_filter {
            Some(status) => status.label(),
            None => self.core.t(Message::FilterAll),
        };
        if ui.button(format!("⏷ {}: {}", self.core.t(Message::Filter), current)).clicked() {
            self.admin.cycle_filter();
        }
    }

    fn render_appointment_row(&self, ui: &mut egui::Ui, appointment: &Appointment) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&appointment.customer).strong().color(colors::TEXT_HEADING));
                ui.label(
                    egui::RichText::new(format!("{} · {} {}", appointment.service, appointment.date, appointment.time))
                        .color(colors::TEXT_SECONDARY),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if appointment.is_paid {
                    badge(ui, self.core.t(Message::Paid), colors::ACTIVE_BACKGROUND, CURRENT_THEME.status.info_background);
                }
                status_badge(ui, appointment.status);
            });
        });
    }

    fn render_placeholder_tab(&self, ui: &mut egui::Ui, title: Message, hint: Message) {
        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            section_title(ui, self.core.t(title));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(self.core.t(hint)).color(colors::TEXT_SECONDARY));
        });
    }
}

fn tab_message(tab: DashboardTab) -> Message {
    match tab {
        DashboardTab::Overview => Message::Overview,
        DashboardTab::Appointments => Message::Appointments,
        DashboardTab::Customers => Message::Customers,
        DashboardTab::Services => Message::Services,
        DashboardTab::Settings => Message::Settings,
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: &str, accent: egui::Color32) {
    card_frame().inner_margin(egui::Margin::same(16.0)).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
        ui.label(
            egui::RichText::new(value)
                .font(egui::FontId::new(28.0, egui::FontFamily::Proportional))
                .strong()
                .color(accent),
        );
    });
}

fn status_badge(ui: &mut egui::Ui, status: AppointmentStatus) {
    let (text_color, background) = match status {
        AppointmentStatus::Confirmed => (colors::SUCCESS, CURRENT_THEME.status.success_background),
        AppointmentStatus::Pending => (CURRENT_THEME.status.warning, CURRENT_THEME.status.warning_background),
    };
    badge(ui, status.label(), text_color, background);
}

/// Render the appointment table
fn render_appointments_table(ui: &mut egui::Ui, headers: [&str; 6], appointments: &[Appointment]) {

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::exact(140.0))
        .column(Column::exact(110.0))
        .column(Column::exact(90.0))
        .column(Column::exact(100.0))
        .column(Column::exact(60.0))
        .header(32.0, |mut header| {
            for title in headers {
                header.col(|ui| {
                    ui.label(egui::RichText::new(title).strong().color(colors::TEXT_SECONDARY));
                });
            }
        })
        .body(|mut body| {
            for appointment in appointments {
                body.row(36.0, |mut row| {
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&appointment.customer).strong());
                    });
                    row.col(|ui| {
                        ui.label(&appointment.service);
                    });
                    row.col(|ui| {
                        ui.label(&appointment.date);
                    });
                    row.col(|ui| {
                        ui.label(&appointment.time);
                    });
                    row.col(|ui| {
                        status_badge(ui, appointment.status);
                    });
                    row.col(|ui| {
                        if appointment.is_paid {
                            ui.label(egui::RichText::new("💳").color(colors::ACTIVE_BACKGROUND));
                        }
                    });
                });
            }
        });
}
