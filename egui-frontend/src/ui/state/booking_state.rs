//! # Booking State Module
//!
//! Everything the booking screen keeps between frames: the wizard position,
//! the catalog filter on the first screen and the multi-step form.

use shared::ServiceFilter;
use crate::backend::domain::{BookingForm, BookingWizard};

pub struct BookingState {
    /// Service → time → details progress
    pub wizard: BookingWizard,

    /// All / Free / Paid tab on the service selection screen
    pub service_filter: ServiceFilter,

    /// Personal info, payment and submission state
    pub form: BookingForm,
}

impl BookingState {
    pub fn new() -> Self {
        Self {
            wizard: BookingWizard::new(),
            service_filter: ServiceFilter::All,
            form: BookingForm::new(),
        }
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}
