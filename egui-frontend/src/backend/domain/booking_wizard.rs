//! Top-level booking flow: service → time → details.
//!
//! Each screen hands its output forward to the next. Going back drops the
//! output of the screen being left so it is chosen again.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{Service, TimeSlot};
use std::fmt;

use crate::backend::domain::booking_form::BookingSelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectService,
    ChooseTime,
    EnterDetails,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::SelectService, WizardStep::ChooseTime, WizardStep::EnterDetails];

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectService => 1,
            WizardStep::ChooseTime => 2,
            WizardStep::EnterDetails => 3,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.number())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Expected step {expected}, but the booking is at step {actual}")]
    WrongStep { expected: WizardStep, actual: WizardStep },
    #[error("Time slot {0} is not available")]
    SlotUnavailable(String),
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    service: Option<Service>,
    date: Option<NaiveDate>,
    slot: Option<TimeSlot>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectService,
            service: None,
            date: None,
            slot: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn select_service(&mut self, service: Service) -> Result<WizardStep, WizardError> {
        self.ensure_step(WizardStep::SelectService)?;
        info!("🛎️ Selected service: {}", service.name);
        self.service = Some(service);
        self.step = WizardStep::ChooseTime;
        Ok(self.step)
    }

    pub fn select_slot(&mut self, date: NaiveDate, slot: TimeSlot) -> Result<WizardStep, WizardError> {
        self.ensure_step(WizardStep::ChooseTime)?;
        if !slot.available {
            warn!("Ignoring unavailable slot {}", slot.id);
            return Err(WizardError::SlotUnavailable(slot.time));
        }
        info!("🕒 Selected {} on {}", slot.time, date);
        self.date = Some(date);
        self.slot = Some(slot);
        self.step = WizardStep::EnterDetails;
        Ok(self.step)
    }

    /// One screen back; no-op on the first screen
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::SelectService => WizardStep::SelectService,
            WizardStep::ChooseTime => {
                self.service = None;
                WizardStep::SelectService
            }
            WizardStep::EnterDetails => {
                self.date = None;
                self.slot = None;
                WizardStep::ChooseTime
            }
        };
        self.step
    }

    pub fn start_over(&mut self) {
        info!("🔄 Booking wizard restarted");
        *self = Self::new();
    }

    /// Everything the booking form needs, once service and slot are chosen
    pub fn selection(&self) -> Option<BookingSelection> {
        match (&self.service, self.date, &self.slot) {
            (Some(service), Some(date), Some(slot)) => Some(BookingSelection {
                service: service.clone(),
                date,
                slot: slot.clone(),
            }),
            _ => None,
        }
    }

    fn ensure_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep { expected, actual: self.step });
        }
        Ok(())
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::catalog_service::CatalogService;
    use shared::ServiceFilter;

    fn slot(available: bool) -> TimeSlot {
        TimeSlot {
            id: "slot-11-30".to_string(),
            time: "11:30 AM".to_string(),
            available,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn test_full_flow_produces_selection() {
        let catalog = CatalogService::new();
        let service = catalog.list_services(ServiceFilter::Paid).remove(0);
        let mut wizard = BookingWizard::new();

        assert_eq!(wizard.select_service(service.clone()), Ok(WizardStep::ChooseTime));
        assert!(wizard.selection().is_none());
        assert_eq!(wizard.select_slot(date(), slot(true)), Ok(WizardStep::EnterDetails));

        let selection = wizard.selection().unwrap();
        assert_eq!(selection.service, service);
        assert_eq!(selection.date, date());
        assert_eq!(selection.slot.time, "11:30 AM");
    }

    #[test]
    fn test_unavailable_slot_is_ignored() {
        let mut wizard = BookingWizard::new();
        wizard.select_service(CatalogService::new().get_service("1").unwrap()).unwrap();

        let result = wizard.select_slot(date(), slot(false));
        assert_eq!(result, Err(WizardError::SlotUnavailable("11:30 AM".to_string())));
        assert_eq!(wizard.step(), WizardStep::ChooseTime);
    }

    #[test]
    fn test_steps_must_be_in_order() {
        let mut wizard = BookingWizard::new();
        assert_eq!(
            wizard.select_slot(date(), slot(true)),
            Err(WizardError::WrongStep { expected: WizardStep::ChooseTime, actual: WizardStep::SelectService })
        );
    }

    #[test]
    fn test_back_drops_step_output() {
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.back(), WizardStep::SelectService);

        wizard.select_service(CatalogService::new().get_service("2").unwrap()).unwrap();
        wizard.select_slot(date(), slot(true)).unwrap();

        assert_eq!(wizard.back(), WizardStep::ChooseTime);
        assert!(wizard.selection().is_none());
        assert!(wizard.service().is_some());

        assert_eq!(wizard.back(), WizardStep::SelectService);
        assert!(wizard.service().is_none());
    }

    #[test]
    fn test_start_over() {
        let mut wizard = BookingWizard::new();
        wizard.select_service(CatalogService::new().get_service("4").unwrap()).unwrap();
        wizard.start_over();
        assert_eq!(wizard.step(), WizardStep::SelectService);
        assert!(wizard.service().is_none());
    }
}
