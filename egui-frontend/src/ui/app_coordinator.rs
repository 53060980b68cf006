//! # App Coordinator Module
//!
//! This module contains the main update loop of the booking app.
//!
//! ## Key Functions:
//! - `eframe::App::update()` - Main application update loop
//!
//! ## Application Flow:
//! 1. Complete a pending booking submission if its delay has elapsed
//! 2. Keep repainting while a submission is running so the timer is observed
//! 3. Render header, feedback messages and the main content
//! 4. Render any open modal on top

use std::time::{Duration, Instant};

use eframe::egui;
use crate::ui::app_state::BookingApp;
use crate::ui::*;

const SUBMISSION_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.poll_submission(Instant::now()) {
            ctx.request_repaint_after(SUBMISSION_POLL_INTERVAL);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let full_rect = ui.max_rect();
                draw_app_background(ui, full_rect);

                ui.vertical(|ui| {
                    self.render_header(ui);
                    ui.add_space(6.0);
                    self.render_messages(ui);
                    self.render_main_content(ui);
                });
            });

        self.render_modals(ctx);
    }
}
