use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a service is offered for free or requires payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Free,
    Paid,
}

/// A bookable offering shown on the service selection screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Human-readable duration label, e.g. "30 min"
    pub duration: String,
    /// Price in dollars; `None` or `0` means the service is free
    pub price: Option<f64>,
    pub description: String,
    pub service_type: ServiceType,
}

impl Service {
    /// A service requires payment only when it carries a positive price
    pub fn requires_payment(&self) -> bool {
        matches!(self.price, Some(price) if price > 0.0)
    }

    /// Amount charged for this service, if any
    pub fn charge(&self) -> Option<f64> {
        self.price.filter(|price| *price > 0.0)
    }
}

/// Filter tabs on the service selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl ServiceFilter {
    pub const ALL: [ServiceFilter; 3] = [ServiceFilter::All, ServiceFilter::Free, ServiceFilter::Paid];

    pub fn matches(&self, service: &Service) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Free => service.service_type == ServiceType::Free,
            ServiceFilter::Paid => service.service_type == ServiceType::Paid,
        }
    }
}

/// A half-hour period that can be booked on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot ID in format: "slot-<hour>-<minute>", e.g. "slot-9-30"
    pub id: String,
    /// Display label, e.g. "9:30 AM"
    pub time: String,
    pub available: bool,
}

/// Lifecycle status of a mock appointment on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

impl AppointmentStatus {
    /// Capitalised label used on status badges
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub customer: String,
    pub service: String,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub is_paid: bool,
}

/// Headline numbers for the admin overview tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_appointments: u32,
    pub confirmed_appointments: u32,
    pub pending_appointments: u32,
    pub revenue: f64,
}

/// International dialing code offered by the phone country picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCode {
    /// Dialing prefix, e.g. "+44"
    pub code: String,
    /// ISO 3166 alpha-2 country code
    pub country: String,
    pub name: String,
}

/// Steps of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStep {
    PersonalInfo,
    Payment,
    Confirmed,
    Failed,
}

impl BookingStep {
    /// Step number as shown to the user (1-4)
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::PersonalInfo => 1,
            BookingStep::Payment => 2,
            BookingStep::Confirmed => 3,
            BookingStep::Failed => 4,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStep::Confirmed | BookingStep::Failed)
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStep::PersonalInfo => "personal info",
            BookingStep::Payment => "payment",
            BookingStep::Confirmed => "confirmed",
            BookingStep::Failed => "failed",
        };
        write!(f, "{} ({})", name, self.number())
    }
}

/// Result of a simulated booking submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success,
    Error,
}

/// Summary of a completed (or attempted) booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    pub reference: String,
    pub service_name: String,
    pub duration: String,
    /// Long-form date, e.g. "Thursday, June 15, 2023"
    pub date: String,
    pub time: String,
    pub email: String,
    /// Amount charged; `None` for free services
    pub amount: Option<f64>,
    pub outcome: SubmissionOutcome,
}

/// Languages offered by the language switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Spanish];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Spanish => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Locale::English),
            "es" => Some(Locale::Spanish),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(price: Option<f64>, service_type: ServiceType) -> Service {
        Service {
            id: "test".to_string(),
            name: "Test Service".to_string(),
            duration: "30 min".to_string(),
            price,
            description: "Test".to_string(),
            service_type,
        }
    }

    #[test]
    fn test_requires_payment() {
        assert!(!service(None, ServiceType::Free).requires_payment());
        assert!(!service(Some(0.0), ServiceType::Free).requires_payment());
        assert!(service(Some(75.0), ServiceType::Paid).requires_payment());
        assert_eq!(service(Some(0.0), ServiceType::Free).charge(), None);
        assert_eq!(service(Some(120.0), ServiceType::Paid).charge(), Some(120.0));
    }

    #[test]
    fn test_service_filter_matches() {
        let free = service(None, ServiceType::Free);
        let paid = service(Some(75.0), ServiceType::Paid);

        assert!(ServiceFilter::All.matches(&free));
        assert!(ServiceFilter::All.matches(&paid));
        assert!(ServiceFilter::Free.matches(&free));
        assert!(!ServiceFilter::Free.matches(&paid));
        assert!(ServiceFilter::Paid.matches(&paid));
        assert!(!ServiceFilter::Paid.matches(&free));
    }

    #[test]
    fn test_booking_step_numbers() {
        assert_eq!(BookingStep::PersonalInfo.number(), 1);
        assert_eq!(BookingStep::Payment.number(), 2);
        assert_eq!(BookingStep::Confirmed.number(), 3);
        assert_eq!(BookingStep::Failed.number(), 4);
        assert!(BookingStep::Confirmed.is_terminal());
        assert!(BookingStep::Failed.is_terminal());
        assert!(!BookingStep::Payment.is_terminal());
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code(" ES "), Some(Locale::Spanish));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_serialization_uses_lowercase_tags() {
        let json = serde_json::to_string(&AppointmentStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");

        let locale: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(locale, Locale::Spanish);
    }
}
