//! # App State Module
//!
//! This module defines the central application struct and the actions the
//! UI components trigger on it.
//!
//! ## Key Types:
//! - `BookingApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Build the backend from config and initialise every state group
//! - `select_service()` / `select_time_slot()` - Wizard progression
//! - `continue_from_personal_info()` / `submit_payment()` - Booking form steps
//! - `poll_submission()` - Finish a simulated submission once its delay has elapsed
//! - `start_new_booking()` - Return to service selection with an empty form
//!
//! ## Purpose:
//! Components only render and report clicks; every state change goes through
//! one of these methods so that wizard, calendar and form stay consistent.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use log::{info, warn};
use shared::{BookingStep, Locale, Service};

use crate::backend::Backend;
use crate::backend::domain::{BookingFormError, WizardStep};
use crate::config::AppConfig;
use crate::ui::state::*;

/// Main application struct for the egui booking app
pub struct BookingApp {
    pub core: CoreAppState,
    pub ui: UIState,
    pub booking: BookingState,
    pub calendar: CalendarState,
    pub admin: AdminState,
    pub modal: ModalState,
}

impl BookingApp {
    /// Create a new BookingApp from the loaded configuration
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing BookingApp");

        crate::ui::setup_booking_style(&cc.egui_ctx);

        let backend = Backend::new(&config)?;
        Ok(Self::with_backend(backend, config.default_locale, today()))
    }

    /// Assemble the app around an existing backend
    pub fn with_backend(backend: Backend, locale: Locale, today: NaiveDate) -> Self {
        let window = backend.time_slot_service.booking_window(today);
        let slots = backend.time_slot_service.generate_slots();

        Self {
            core: CoreAppState::new(backend, locale),
            ui: UIState::new(),
            booking: BookingState::new(),
            calendar: CalendarState::new(window, slots),
            admin: AdminState::new(),
            modal: ModalState::new(),
        }
    }

    pub fn switch_screen(&mut self, screen: AppScreen) {
        if self.core.current_screen != screen {
            info!("🧭 Switching to {:?} screen", screen);
            self.core.current_screen = screen;
            self.modal.close_all();
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.core.locale != locale {
            info!("🌐 Language changed to {}", locale.code());
            self.core.locale = locale;
        }
    }

    /// Pick a service and move on to the calendar
    pub fn select_service(&mut self, service: Service) {
        self.ui.clear_messages();
        match self.booking.wizard.select_service(service) {
            Ok(_) => {
                // Each visit to the calendar starts from the first bookable day
                let window = self.core.backend.time_slot_service.booking_window(today());
                let slots = self.core.backend.time_slot_service.generate_slots();
                self.calendar = CalendarState::new(window, slots);
            }
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    /// Show a different day, regenerating its slots
    pub fn change_date(&mut self, date: NaiveDate) {
        let date = self.calendar.window.clamp(date);
        if date == self.calendar.selected_date {
            return;
        }
        let slots = self.core.backend.time_slot_service.generate_slots();
        if self.calendar.set_date(date, slots) {
            info!("📅 Showing slots for {}", date);
        }
    }

    pub fn previous_day(&mut self) {
        let service = &self.core.backend.time_slot_service;
        if let Some(date) = service.previous_day(self.calendar.selected_date, &self.calendar.window) {
            self.change_date(date);
        }
    }

    pub fn next_day(&mut self) {
        let service = &self.core.backend.time_slot_service;
        if let Some(date) = service.next_day(self.calendar.selected_date, &self.calendar.window) {
            self.change_date(date);
        }
    }

    /// Pick an available slot and move on to the booking form
    pub fn select_time_slot(&mut self, slot_id: &str) {
        let Some(slot) = self.calendar.select_slot(slot_id) else {
            warn!("Ignoring click on unavailable slot {}", slot_id);
            return;
        };
        if let Err(e) = self.booking.wizard.select_slot(self.calendar.selected_date, slot) {
            self.calendar.clear_selection();
            self.ui.set_error(e.to_string());
        }
    }

    /// Step back one wizard screen; refused while a booking is being submitted
    pub fn wizard_back(&mut self) {
        if self.booking.form.is_loading() {
            warn!("Ignoring back navigation while a submission is in progress");
            return;
        }
        self.ui.clear_messages();
        let leaving_details = self.booking.wizard.step() == WizardStep::EnterDetails;
        if self.booking.wizard.back() == WizardStep::ChooseTime {
            self.calendar.clear_selection();
        }
        if leaving_details {
            self.booking.form.clear();
        }
    }

    pub fn continue_from_personal_info(&mut self) {
        let Some(selection) = self.booking.wizard.selection() else {
            return;
        };
        let result = self.core.backend.booking_form_service.continue_from_personal_info(
            &mut self.booking.form,
            &selection,
            Instant::now(),
        );
        self.handle_form_result(result);
    }

    pub fn submit_payment(&mut self) {
        let Some(selection) = self.booking.wizard.selection() else {
            return;
        };
        let result =
            self.core
                .backend
                .booking_form_service
                .submit_payment(&mut self.booking.form, &selection, Instant::now());
        self.handle_form_result(result);
    }

    pub fn back_to_personal_info(&mut self) {
        let result = self.core.backend.booking_form_service.back_to_personal_info(&mut self.booking.form);
        self.handle_form_result(result);
    }

    /// "Try Again" on the failure screen keeps the entered details
    pub fn retry_booking(&mut self) {
        let result = self.core.backend.booking_form_service.retry(&mut self.booking.form);
        self.handle_form_result(result);
    }

    /// Clear the finished booking and go back to service selection
    pub fn start_new_booking(&mut self) {
        let result = self.core.backend.booking_form_service.reset(&mut self.booking.form);
        if result.is_ok() {
            self.booking.wizard.start_over();
            self.calendar.clear_selection();
            self.modal.close_all();
        }
        self.handle_form_result(result);
    }

    /// Complete a pending submission; returns true while one is still running
    pub fn poll_submission(&mut self, now: Instant) -> bool {
        if !self.booking.form.is_loading() {
            return false;
        }
        let Some(selection) = self.booking.wizard.selection() else {
            return false;
        };
        self.core
            .backend
            .booking_form_service
            .poll_submission(&mut self.booking.form, &selection, now)
            .is_none()
    }

    pub fn select_country(&mut self, code: &str) {
        info!("📞 Country code set to {}", code);
        self.booking.form.set_field(crate::backend::domain::models::FormField::CountryCode, code);
        self.modal.close_country_picker();
    }

    fn handle_form_result(&mut self, result: Result<BookingStep, BookingFormError>) {
        match result {
            Ok(_) => self.ui.clear_messages(),
            // Field errors are rendered next to the inputs
            Err(BookingFormError::ValidationFailed { .. }) => self.ui.clear_messages(),
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{FormField, PersonalDetails};
    use std::time::Duration;

    fn test_app() -> BookingApp {
        let config = AppConfig {
            submission_delay_ms: 0,
            slot_availability: 1.0,
            ..AppConfig::default()
        };
        let backend = Backend::new(&config).unwrap();
        BookingApp::with_backend(backend, Locale::English, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
    }

    fn service(app: &BookingApp, id: &str) -> Service {
        app.core.backend.catalog_service.get_service(id).unwrap()
    }

    fn fill_personal_info(app: &mut BookingApp) {
        let form = &mut app.booking.form;
        form.set_field(FormField::FirstName, "Ada");
        form.set_field(FormField::LastName, "Lovelace");
        form.set_field(FormField::Email, "ada@example.com");
        form.set_field(FormField::Phone, "555 123 4567");
    }

    fn first_slot_id(app: &BookingApp) -> String {
        app.calendar.slots[0].id.clone()
    }

    #[test]
    fn test_selecting_service_and_slot_reaches_details() {
        let mut app = test_app();
        let free = service(&app, "1");
        app.select_service(free);
        assert_eq!(app.booking.wizard.step(), WizardStep::ChooseTime);
        assert_eq!(app.calendar.slots.len(), 17);

        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);
        assert_eq!(app.booking.wizard.step(), WizardStep::EnterDetails);
        assert_eq!(app.calendar.selected_slot_id.as_deref(), Some(slot_id.as_str()));
    }

    #[test]
    fn test_back_from_details_clears_slot_highlight() {
        let mut app = test_app();
        let paid = service(&app, "2");
        app.select_service(paid);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);

        app.wizard_back();
        assert_eq!(app.booking.wizard.step(), WizardStep::ChooseTime);
        assert!(app.calendar.selected_slot_id.is_none());
    }

    #[test]
    fn test_leaving_details_discards_form() {
        let mut app = test_app();
        let free = service(&app, "1");
        app.select_service(free);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);
        app.booking.form.set_field(FormField::FirstName, "Ada");
        app.continue_from_personal_info();
        assert!(!app.booking.form.errors().is_empty());

        app.wizard_back();
        app.wizard_back();
        assert_eq!(app.booking.wizard.step(), WizardStep::SelectService);

        let paid = service(&app, "2");
        app.select_service(paid);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);
        assert_eq!(app.booking.wizard.step(), WizardStep::EnterDetails);
        assert_eq!(app.booking.form.step(), BookingStep::PersonalInfo);
        assert_eq!(app.booking.form.personal, PersonalDetails::default());
        assert!(app.booking.form.errors().is_empty());
    }

    #[test]
    fn test_invalid_personal_info_shows_field_errors_only() {
        let mut app = test_app();
        let free = service(&app, "1");
        app.select_service(free);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);

        app.continue_from_personal_info();
        assert_eq!(app.booking.form.step(), BookingStep::PersonalInfo);
        assert!(app.booking.form.error_for(FormField::FirstName).is_some());
        assert!(app.ui.error_message.is_none());
    }

    #[test]
    fn test_free_booking_submits_and_polls_to_terminal_step() {
        let mut app = test_app();
        let free = service(&app, "4");
        app.select_service(free);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);
        fill_personal_info(&mut app);

        app.continue_from_personal_info();
        assert!(app.booking.form.is_loading());

        let still_running = app.poll_submission(Instant::now() + Duration::from_millis(1));
        assert!(!still_running);
        assert!(app.booking.form.step().is_terminal());
        assert!(app.booking.form.receipt().is_some());
    }

    #[test]
    fn test_paid_booking_goes_through_payment() {
        let mut app = test_app();
        let paid = service(&app, "3");
        app.select_service(paid);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);
        fill_personal_info(&mut app);

        app.continue_from_personal_info();
        assert_eq!(app.booking.form.step(), BookingStep::Payment);

        app.submit_payment();
        assert_eq!(app.booking.form.step(), BookingStep::Payment);
        assert!(app.booking.form.error_for(FormField::CardNumber).is_some());

        app.back_to_personal_info();
        assert_eq!(app.booking.form.step(), BookingStep::PersonalInfo);
        assert_eq!(app.booking.form.personal.first_name, "Ada");
    }

    #[test]
    fn test_start_new_booking_requires_terminal_step() {
        let mut app = test_app();
        let free = service(&app, "1");
        app.select_service(free);
        app.start_new_booking();
        assert!(app.ui.error_message.is_some());
        assert_eq!(app.booking.wizard.step(), WizardStep::ChooseTime);
    }

    #[test]
    fn test_start_new_booking_after_completion() {
        let mut app = test_app();
        let free = service(&app, "1");
        app.select_service(free);
        let slot_id = first_slot_id(&app);
        app.select_time_slot(&slot_id);
        fill_personal_info(&mut app);
        app.continue_from_personal_info();
        app.poll_submission(Instant::now() + Duration::from_millis(1));

        app.start_new_booking();
        assert_eq!(app.booking.wizard.step(), WizardStep::SelectService);
        assert_eq!(app.booking.form.step(), BookingStep::PersonalInfo);
        assert!(app.booking.form.personal.email.is_empty());
    }

    #[test]
    fn test_select_country_sets_code_and_closes_picker() {
        let mut app = test_app();
        app.modal.open_country_picker();
        app.modal.country_search = "united".to_string();
        app.select_country("+44");
        assert_eq!(app.booking.form.personal.country_code, "+44");
        assert!(!app.modal.show_country_picker);
        assert!(app.modal.country_search.is_empty());
    }

    #[test]
    fn test_day_navigation_stays_in_window() {
        let mut app = test_app();
        let min_date = app.calendar.window.min_date;
        app.previous_day();
        assert_eq!(app.calendar.selected_date, min_date);

        app.next_day();
        assert_eq!(app.calendar.selected_date, min_date.succ_opt().unwrap());
    }
}
