//! # Admin State Module
//!
//! Tab and appointment filter for the read-only admin dashboard.

use shared::AppointmentStatus;
use crate::backend::domain::DashboardTab;
use crate::backend::domain::dashboard_service::next_status_filter;

#[derive(Debug, Default)]
pub struct AdminState {
    pub current_tab: DashboardTab,

    /// `None` shows every appointment
    pub status_filter: Option<AppointmentStatus>,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the filter: all → confirmed → pending → all
    pub fn cycle_filter(&mut self) {
        self.status_filter = next_status_filter(self.status_filter);
    }
}
