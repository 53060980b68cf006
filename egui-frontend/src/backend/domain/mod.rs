//! # Domain Module
//!
//! Business rules of the booking app, independent of egui.
//!
//! ## Module Organization
//!
//! - **catalog_service**: Static service catalog and free/paid filters
//! - **time_slot_service**: Half-hour slot generation and the booking window
//! - **validation**: Field checks for personal and payment details
//! - **booking_form**: The personal info → payment → confirmation state machine
//! - **booking_wizard**: Service → time → details screen flow
//! - **country_service**: Dialing codes for the phone country picker
//! - **dashboard_service**: Mock statistics and appointments for the admin screen
//! - **i18n**: English and Spanish UI strings

pub mod booking_form;
pub mod booking_wizard;
pub mod catalog_service;
pub mod country_service;
pub mod dashboard_service;
pub mod i18n;
pub mod models;
pub mod time_slot_service;
pub mod validation;

pub use booking_form::{BookingForm, BookingFormError, BookingFormService, BookingSelection};
pub use booking_wizard::{BookingWizard, WizardStep};
pub use catalog_service::CatalogService;
pub use country_service::CountryService;
pub use dashboard_service::{DashboardService, DashboardTab};
pub use i18n::Message;
pub use time_slot_service::{BookingWindow, TimeSlotService};
pub use validation::{FormValidator, ValidationError};
