//! Admin dashboard domain logic.
//!
//! Read-only mock data for the admin screen: headline statistics and a short
//! list of upcoming appointments. There is no write path.

use shared::{Appointment, AppointmentStatus, DashboardStats};

/// Sections of the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Appointments,
    Customers,
    Services,
    Settings,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::Appointments,
        DashboardTab::Customers,
        DashboardTab::Services,
        DashboardTab::Settings,
    ];
}

/// Status filter cycled by the "Filter" button: all → confirmed → pending
pub fn next_status_filter(current: Option<AppointmentStatus>) -> Option<AppointmentStatus> {
    match current {
        None => Some(AppointmentStatus::Confirmed),
        Some(AppointmentStatus::Confirmed) => Some(AppointmentStatus::Pending),
        Some(AppointmentStatus::Pending) => None,
    }
}

#[derive(Clone)]
pub struct DashboardService {
    stats: DashboardStats,
    appointments: Vec<Appointment>,
}

impl DashboardService {
    pub fn new() -> Self {
        Self {
            stats: DashboardStats {
                total_appointments: 24,
                confirmed_appointments: 18,
                pending_appointments: 6,
                revenue: 1250.0,
            },
            appointments: mock_appointments(),
        }
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn upcoming_appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appointments with the given status, or all of them for `None`
    pub fn filter_appointments(&self, status: Option<AppointmentStatus>) -> Vec<Appointment> {
        self.upcoming_appointments()
            .iter()
            .filter(|appointment| status.map_or(true, |status| appointment.status == status))
            .cloned()
            .collect()
    }

    /// Revenue without cents, e.g. "$1250"
    pub fn format_revenue(&self) -> String {
        format!("${:.0}", self.stats.revenue)
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

fn mock_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            customer: "John Doe".to_string(),
            service: "Consultation".to_string(),
            date: "2023-06-15".to_string(),
            time: "10:00 AM".to_string(),
            status: AppointmentStatus::Confirmed,
            is_paid: true,
        },
        Appointment {
            id: 2,
            customer: "Jane Smith".to_string(),
            service: "Follow-up".to_string(),
            date: "2023-06-15".to_string(),
            time: "11:30 AM".to_string(),
            status: AppointmentStatus::Pending,
            is_paid: false,
        },
        Appointment {
            id: 3,
            customer: "Mike Johnson".to_string(),
            service: "Initial Meeting".to_string(),
            date: "2023-06-16".to_string(),
            time: "2:00 PM".to_string(),
            status: AppointmentStatus::Confirmed,
            is_paid: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let service = DashboardService::new();
        let stats = service.stats();
        assert_eq!(stats.total_appointments, 24);
        assert_eq!(stats.confirmed_appointments + stats.pending_appointments, stats.total_appointments);
        assert_eq!(service.format_revenue(), "$1250");
    }

    #[test]
    fn test_filter_appointments() {
        let service = DashboardService::new();
        assert_eq!(service.filter_appointments(None).len(), 3);

        let confirmed = service.filter_appointments(Some(AppointmentStatus::Confirmed));
        assert_eq!(confirmed.len(), 2);
        assert!(confirmed.iter().all(|a| a.is_paid));

        let pending = service.filter_appointments(Some(AppointmentStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].customer, "Jane Smith");
    }

    #[test]
    fn test_upcoming_appointments_is_unfiltered_list() {
        let service = DashboardService::new();
        let upcoming = service.upcoming_appointments();
        assert_eq!(upcoming.len(), 3);
        assert_eq!(upcoming[0].customer, "John Doe");
        assert_eq!(service.filter_appointments(None), upcoming.to_vec());
    }

    #[test]
    fn test_status_filter_cycle() {
        let mut filter = None;
        filter = next_status_filter(filter);
        assert_eq!(filter, Some(AppointmentStatus::Confirmed));
        filter = next_status_filter(filter);
        assert_eq!(filter, Some(AppointmentStatus::Pending));
        filter = next_status_filter(filter);
        assert_eq!(filter, None);
    }
}
