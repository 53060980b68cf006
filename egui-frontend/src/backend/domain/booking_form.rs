//! Booking form domain logic.
//!
//! The booking form is a small state machine:
//!
//! ```text
//! PersonalInfo(1) ──paid──> Payment(2) ──submit──┐
//!       │  ^                   │                 │
//!       │  └──────back─────────┘                 v
//!       └──free──────────submit──────────> (loading, 1.5s)
//!                                                │
//!                                   ┌────────────┴────────────┐
//!                                   v                         v
//!                              Confirmed(3)               Failed(4)
//!                                   │                         │ retry (keeps data)
//!                                   └──reset (clears)──> PersonalInfo(1) <┘
//! ```
//!
//! Submission is simulated: once started it completes after a fixed delay and
//! the outcome is drawn at random. The deadline is polled from the UI loop, so
//! nothing here spawns threads or timers.

use chrono::NaiveDate;
use log::{info, warn};
use rand::Rng;
use shared::{BookingReceipt, BookingStep, Service, SubmissionOutcome, TimeSlot};
use std::time::{Duration, Instant};

use crate::backend::domain::models::{FormField, PaymentDetails, PersonalDetails};
use crate::backend::domain::time_slot_service::format_long_date;
use crate::backend::domain::validation::{FieldErrors, FormValidator, ValidationError};

/// What is being booked: the output of the service and time selection screens
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSelection {
    pub service: Service,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingFormError {
    #[error("Please fix {count} field(s) before continuing")]
    ValidationFailed { count: usize },
    #[error("Cannot {action} from step {from}")]
    InvalidTransition { from: BookingStep, action: &'static str },
    #[error("A booking submission is already in progress")]
    SubmissionInProgress,
}

/// Decides whether a simulated submission succeeds
pub trait OutcomeSource {
    fn draw(&mut self) -> SubmissionOutcome;
}

/// Unseeded random outcome with a fixed failure probability
pub struct RandomOutcome {
    failure_rate: f64,
}

impl RandomOutcome {
    pub fn new(failure_rate: f64) -> Self {
        Self { failure_rate }
    }
}

impl OutcomeSource for RandomOutcome {
    fn draw(&mut self) -> SubmissionOutcome {
        if rand::thread_rng().gen::<f64>() < self.failure_rate {
            SubmissionOutcome::Error
        } else {
            SubmissionOutcome::Success
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSubmission {
    completes_at: Instant,
}

/// State owned by the booking form while it is on screen
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub personal: PersonalDetails,
    pub payment: PaymentDetails,
    errors: FieldErrors,
    step: BookingStep,
    pending: Option<PendingSubmission>,
    receipt: Option<BookingReceipt>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            personal: PersonalDetails::default(),
            payment: PaymentDetails::default(),
            errors: FieldErrors::new(),
            step: BookingStep::PersonalInfo,
            pending: None,
            receipt: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Receipt of the last finished submission
    pub fn receipt(&self) -> Option<&BookingReceipt> {
        self.receipt.as_ref()
    }

    /// Called whenever the user edits a field; the field's error goes away
    pub fn field_changed(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    /// Mutable text of a field, for binding to an input widget
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.personal.first_name,
            FormField::LastName => &mut self.personal.last_name,
            FormField::Email => &mut self.personal.email,
            FormField::Phone => &mut self.personal.phone,
            FormField::CountryCode => &mut self.personal.country_code,
            FormField::Notes => &mut self.personal.notes,
            FormField::CardNumber => &mut self.payment.card_number,
            FormField::CardExpiry => &mut self.payment.card_expiry,
            FormField::CardCvc => &mut self.payment.card_cvc,
        }
    }

    /// Replace a field's text and clear its error
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
        self.field_changed(field);
    }

    /// Back to an empty first step
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives transitions of a [`BookingForm`]
#[derive(Clone)]
pub struct BookingFormService {
    validator: FormValidator,
    submission_delay: Duration,
    failure_rate: f64,
}

impl BookingFormService {
    pub fn new(validator: FormValidator, submission_delay: Duration, failure_rate: f64) -> Self {
        Self {
            validator,
            submission_delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    /// Leave the personal info step: paid services go to payment, free ones are submitted
    pub fn continue_from_personal_info(
        &self,
        form: &mut BookingForm,
        selection: &BookingSelection,
        now: Instant,
    ) -> Result<BookingStep, BookingFormError> {
        self.ensure_step(form, BookingStep::PersonalInfo, "continue")?;

        let errors = self.validator.validate_personal(&form.personal);
        self.apply_errors(form, errors)?;

        if selection.service.requires_payment() {
            form.step = BookingStep::Payment;
            info!("📝 Personal info accepted, moving to payment for {}", selection.service.name);
        } else {
            self.begin_submission(form, now);
            info!("📝 Personal info accepted, submitting free booking for {}", selection.service.name);
        }
        Ok(form.step)
    }

    /// Validate card details and start the simulated payment + booking
    pub fn submit_payment(
        &self,
        form: &mut BookingForm,
        selection: &BookingSelection,
        now: Instant,
    ) -> Result<BookingStep, BookingFormError> {
        self.ensure_step(form, BookingStep::Payment, "pay")?;

        let mut errors = self.validator.validate_personal(&form.personal);
        if selection.service.requires_payment() {
            errors.extend(self.validator.validate_payment(&form.payment));
        }
        self.apply_errors(form, errors)?;

        self.begin_submission(form, now);
        info!("💳 Payment details accepted, submitting booking for {}", selection.service.name);
        Ok(form.step)
    }

    pub fn back_to_personal_info(&self, form: &mut BookingForm) -> Result<BookingStep, BookingFormError> {
        self.ensure_step(form, BookingStep::Payment, "go back")?;
        form.step = BookingStep::PersonalInfo;
        Ok(form.step)
    }

    /// Finish the pending submission if its delay has elapsed
    pub fn poll_submission(
        &self,
        form: &mut BookingForm,
        selection: &BookingSelection,
        now: Instant,
    ) -> Option<BookingReceipt> {
        let mut outcome = RandomOutcome::new(self.failure_rate);
        self.poll_submission_with(form, selection, now, &mut outcome)
    }

    pub fn poll_submission_with(
        &self,
        form: &mut BookingForm,
        selection: &BookingSelection,
        now: Instant,
        outcome_source: &mut dyn OutcomeSource,
    ) -> Option<BookingReceipt> {
        let pending = form.pending?;
        if now < pending.completes_at {
            return None;
        }

        form.pending = None;
        let outcome = outcome_source.draw();
        form.step = match outcome {
            SubmissionOutcome::Success => BookingStep::Confirmed,
            SubmissionOutcome::Error => BookingStep::Failed,
        };

        let receipt = BookingReceipt {
            reference: uuid::Uuid::new_v4().to_string(),
            service_name: selection.service.name.clone(),
            duration: selection.service.duration.clone(),
            date: format_long_date(selection.date),
            time: selection.slot.time.clone(),
            email: form.personal.email.trim().to_string(),
            amount: selection.service.charge(),
            outcome,
        };

        match outcome {
            SubmissionOutcome::Success => info!("✅ Booking {} confirmed", receipt.reference),
            SubmissionOutcome::Error => warn!("❌ Simulated booking {} failed", receipt.reference),
        }

        form.receipt = Some(receipt.clone());
        Some(receipt)
    }

    /// "Try Again" after a failure keeps everything the user typed
    pub fn retry(&self, form: &mut BookingForm) -> Result<BookingStep, BookingFormError> {
        self.ensure_step(form, BookingStep::Failed, "retry")?;
        form.step = BookingStep::PersonalInfo;
        form.errors.clear();
        Ok(form.step)
    }

    /// Start a fresh booking from a terminal step
    pub fn reset(&self, form: &mut BookingForm) -> Result<BookingStep, BookingFormError> {
        if !form.step.is_terminal() {
            warn!("Rejected reset from step {}", form.step);
            return Err(BookingFormError::InvalidTransition { from: form.step, action: "reset" });
        }
        form.clear();
        info!("🔄 Booking form reset");
        Ok(form.step)
    }

    fn ensure_step(&self, form: &BookingForm, expected: BookingStep, action: &'static str) -> Result<(), BookingFormError> {
        if form.is_loading() {
            warn!("Rejected '{}' while a submission is in progress", action);
            return Err(BookingFormError::SubmissionInProgress);
        }
        if form.step != expected {
            warn!("Rejected '{}' from step {}", action, form.step);
            return Err(BookingFormError::InvalidTransition { from: form.step, action });
        }
        Ok(())
    }

    fn apply_errors(&self, form: &mut BookingForm, errors: FieldErrors) -> Result<(), BookingFormError> {
        let count = errors.len();
        form.errors = errors;
        if count > 0 {
            warn!("Booking form has {} invalid field(s) on step {}", count, form.step);
            return Err(BookingFormError::ValidationFailed { count });
        }
        Ok(())
    }

    fn begin_submission(&self, form: &mut BookingForm, now: Instant) {
        form.pending = Some(PendingSubmission {
            completes_at: now + self.submission_delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ServiceType;

    struct FixedOutcome(SubmissionOutcome);

    impl OutcomeSource for FixedOutcome {
        fn draw(&mut self) -> SubmissionOutcome {
            self.0
        }
    }

    fn form_service() -> BookingFormService {
        BookingFormService::new(FormValidator::new().unwrap(), Duration::from_millis(1500), 0.2)
    }

    fn selection(price: Option<f64>) -> BookingSelection {
        let service_type = if matches!(price, Some(p) if p > 0.0) { ServiceType::Paid } else { ServiceType::Free };
        BookingSelection {
            service: Service {
                id: "test".to_string(),
                name: "Test Session".to_string(),
                duration: "60 min".to_string(),
                price,
                description: "Test".to_string(),
                service_type,
            },
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            slot: TimeSlot {
                id: "slot-10-00".to_string(),
                time: "10:00 AM".to_string(),
                available: true,
            },
        }
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.set_field(FormField::FirstName, "Jane");
        form.set_field(FormField::LastName, "Smith");
        form.set_field(FormField::Email, "jane@example.com");
        form.set_field(FormField::Phone, "555 123 4567");
        form.set_field(FormField::Notes, "Window seat please");
        form
    }

    fn fill_card(form: &mut BookingForm) {
        form.set_field(FormField::CardNumber, "4242 4242 4242 4242");
        form.set_field(FormField::CardExpiry, "12/29");
        form.set_field(FormField::CardCvc, "123");
    }

    fn finish(
        service: &BookingFormService,
        form: &mut BookingForm,
        selection: &BookingSelection,
        started: Instant,
        outcome: SubmissionOutcome,
    ) -> BookingReceipt {
        service
            .poll_submission_with(form, selection, started + Duration::from_millis(1500), &mut FixedOutcome(outcome))
            .unwrap()
    }

    #[test]
    fn test_free_services_skip_payment() {
        for price in [None, Some(0.0)] {
            let service = form_service();
            let selection = selection(price);
            let mut form = filled_form();
            let now = Instant::now();

            let step = service.continue_from_personal_info(&mut form, &selection, now).unwrap();
            assert_eq!(step, BookingStep::PersonalInfo);
            assert!(form.is_loading());

            let receipt = finish(&service, &mut form, &selection, now, SubmissionOutcome::Success);
            assert_eq!(form.step(), BookingStep::Confirmed);
            assert_eq!(receipt.amount, None);
        }
    }

    #[test]
    fn test_paid_services_go_through_payment() {
        let service = form_service();
        let selection = selection(Some(75.0));
        let mut form = filled_form();
        let now = Instant::now();

        let step = service.continue_from_personal_info(&mut form, &selection, now).unwrap();
        assert_eq!(step, BookingStep::Payment);
        assert!(!form.is_loading());
    }

    #[test]
    fn test_payment_validation_gates_submission() {
        let service = form_service();
        let selection = selection(Some(75.0));
        let mut form = filled_form();
        let now = Instant::now();
        service.continue_from_personal_info(&mut form, &selection, now).unwrap();

        let result = service.submit_payment(&mut form, &selection, now);
        assert_eq!(result, Err(BookingFormError::ValidationFailed { count: 3 }));
        assert_eq!(form.step(), BookingStep::Payment);
        assert!(!form.is_loading());
        assert!(form.error_for(FormField::CardNumber).is_some());

        form.set_field(FormField::CardNumber, "4242 4242 4242 4242");
        assert!(form.error_for(FormField::CardNumber).is_none());

        fill_card(&mut form);
        service.submit_payment(&mut form, &selection, now).unwrap();
        assert!(form.is_loading());

        let receipt = finish(&service, &mut form, &selection, now, SubmissionOutcome::Success);
        assert_eq!(receipt.amount, Some(75.0));
        assert_eq!(receipt.date, "Thursday, June 15, 2023");
        assert_eq!(receipt.time, "10:00 AM");
        assert_eq!(receipt.email, "jane@example.com");
    }

    #[test]
    fn test_invalid_personal_info_stays_on_step() {
        let service = form_service();
        let selection = selection(None);
        let mut form = BookingForm::new();
        form.set_field(FormField::Email, "jane");

        let result = service.continue_from_personal_info(&mut form, &selection, Instant::now());
        assert_eq!(result, Err(BookingFormError::ValidationFailed { count: 4 }));
        assert_eq!(form.step(), BookingStep::PersonalInfo);
        assert!(!form.is_loading());
        assert_eq!(form.error_for(FormField::Email), Some(&ValidationError::InvalidEmail));
    }

    #[test]
    fn test_submission_waits_for_delay() {
        let service = form_service();
        let selection = selection(None);
        let mut form = filled_form();
        let now = Instant::now();
        service.continue_from_personal_info(&mut form, &selection, now).unwrap();

        let early = service.poll_submission_with(
            &mut form,
            &selection,
            now + Duration::from_millis(1499),
            &mut FixedOutcome(SubmissionOutcome::Success),
        );
        assert!(early.is_none());
        assert!(form.is_loading());

        // Nothing pending means nothing to poll
        let mut idle = BookingForm::new();
        assert!(service.poll_submission(&mut idle, &selection, now + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn test_transitions_rejected_while_loading() {
        let service = form_service();
        let selection = selection(Some(75.0));
        let mut form = filled_form();
        let now = Instant::now();
        service.continue_from_personal_info(&mut form, &selection, now).unwrap();
        fill_card(&mut form);
        service.submit_payment(&mut form, &selection, now).unwrap();

        assert_eq!(service.back_to_personal_info(&mut form), Err(BookingFormError::SubmissionInProgress));
        assert_eq!(
            service.submit_payment(&mut form, &selection, now),
            Err(BookingFormError::SubmissionInProgress)
        );
    }

    #[test]
    fn test_back_from_payment_keeps_data() {
        let service = form_service();
        let selection = selection(Some(75.0));
        let mut form = filled_form();
        service.continue_from_personal_info(&mut form, &selection, Instant::now()).unwrap();

        assert_eq!(service.back_to_personal_info(&mut form), Ok(BookingStep::PersonalInfo));
        assert_eq!(form.personal.first_name, "Jane");
        assert!(service.back_to_personal_info(&mut form).is_err());
    }

    #[test]
    fn test_failure_then_retry_keeps_data() {
        let service = form_service();
        let selection = selection(None);
        let mut form = filled_form();
        let now = Instant::now();
        service.continue_from_personal_info(&mut form, &selection, now).unwrap();

        let receipt = finish(&service, &mut form, &selection, now, SubmissionOutcome::Error);
        assert_eq!(receipt.outcome, SubmissionOutcome::Error);
        assert_eq!(form.step(), BookingStep::Failed);

        assert_eq!(service.retry(&mut form), Ok(BookingStep::PersonalInfo));
        assert_eq!(form.personal.email, "jane@example.com");
    }

    #[test]
    fn test_reset_clears_all_fields() {
        for outcome in [SubmissionOutcome::Success, SubmissionOutcome::Error] {
            let service = form_service();
            let selection = selection(Some(120.0));
            let mut form = filled_form();
            form.set_field(FormField::CountryCode, "+44");
            let now = Instant::now();
            service.continue_from_personal_info(&mut form, &selection, now).unwrap();
            fill_card(&mut form);
            service.submit_payment(&mut form, &selection, now).unwrap();
            finish(&service, &mut form, &selection, now, outcome);
            assert!(form.step().is_terminal());

            assert_eq!(service.reset(&mut form), Ok(BookingStep::PersonalInfo));
            assert_eq!(form.personal, PersonalDetails::default());
            assert_eq!(form.personal.country_code, "+1");
            assert_eq!(form.payment, PaymentDetails::default());
            assert!(form.errors().is_empty());
            assert!(form.receipt().is_none());
        }
    }

    #[test]
    fn test_reset_only_from_terminal_steps() {
        let service = form_service();
        let mut form = filled_form();
        assert_eq!(
            service.reset(&mut form),
            Err(BookingFormError::InvalidTransition { from: BookingStep::PersonalInfo, action: "reset" })
        );
        assert_eq!(form.personal.first_name, "Jane");
        assert!(service.retry(&mut form).is_err());
    }

    #[test]
    fn test_random_outcome_extremes() {
        assert_eq!(RandomOutcome::new(0.0).draw(), SubmissionOutcome::Success);
        assert_eq!(RandomOutcome::new(1.0).draw(), SubmissionOutcome::Error);
    }
}
