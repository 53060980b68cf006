use eframe::egui;
use log::{error, info};

mod backend;
mod config;
mod ui;

use config::AppConfig;
use ui::BookingApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Appointment Booking egui application");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return Err(eframe::Error::AppCreation(format!("Failed to load configuration: {:#}", e).into()));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Appointment Booking")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Appointment Booking",
        options,
        Box::new(move |cc| match BookingApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized Appointment Booking app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
