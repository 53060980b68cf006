//! # Backend Module
//!
//! Non-UI logic for the booking app. The egui layer talks to these services
//! directly; everything is synchronous and in memory.

use anyhow::{Context, Result};
use log::info;

pub mod domain;

use crate::config::AppConfig;

/// Main backend struct that holds all services
#[derive(Clone)]
pub struct Backend {
    pub catalog_service: domain::CatalogService,
    pub time_slot_service: domain::TimeSlotService,
    pub booking_form_service: domain::BookingFormService,
    pub country_service: domain::CountryService,
    pub dashboard_service: domain::DashboardService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new(config: &AppConfig) -> Result<Self> {
        let validator = domain::FormValidator::new().context("Failed to compile form validation patterns")?;

        let catalog_service = domain::CatalogService::new();
        let time_slot_service =
            domain::TimeSlotService::new(config.slot_availability, config.booking_window_months);
        let booking_form_service =
            domain::BookingFormService::new(validator, config.submission_delay(), config.failure_rate);
        let country_service = domain::CountryService::new();
        let dashboard_service = domain::DashboardService::new();

        info!(
            "Backend ready: delay={}ms failure_rate={} slot_availability={}",
            config.submission_delay_ms, config.failure_rate, config.slot_availability
        );

        Ok(Backend {
            catalog_service,
            time_slot_service,
            booking_form_service,
            country_service,
            dashboard_service,
        })
    }
}
