//! # Calendar State Module
//!
//! Date and time-slot selection for the "Choose Time" screen.
//!
//! ## Responsibilities:
//! - Selected date, always inside the booking window
//! - Slots generated for that date
//! - Highlighted slot
//!
//! Slots are regenerated whenever the date changes, so availability is not
//! stable across revisits of the same day.

use chrono::NaiveDate;
use shared::TimeSlot;
use crate::backend::domain::BookingWindow;

#[derive(Debug, Clone)]
pub struct CalendarState {
    /// Date shown in the picker
    pub selected_date: NaiveDate,

    /// First and last bookable dates
    pub window: BookingWindow,

    /// Slots for `selected_date`
    pub slots: Vec<TimeSlot>,

    /// Id of the highlighted slot, if any
    pub selected_slot_id: Option<String>,
}

impl CalendarState {
    /// Start on the first bookable day with the given slots
    pub fn new(window: BookingWindow, slots: Vec<TimeSlot>) -> Self {
        Self {
            selected_date: window.min_date,
            window,
            slots,
            selected_slot_id: None,
        }
    }

    /// Move to a new date; returns false when the date did not change
    pub fn set_date(&mut self, date: NaiveDate, slots: Vec<TimeSlot>) -> bool {
        let date = self.window.clamp(date);
        if date == self.selected_date && !self.slots.is_empty() {
            return false;
        }
        self.selected_date = date;
        self.slots = slots;
        self.selected_slot_id = None;
        true
    }

    /// Highlight a slot; unavailable or unknown slots are ignored
    pub fn select_slot(&mut self, slot_id: &str) -> Option<TimeSlot> {
        let slot = self.slots.iter().find(|slot| slot.id == slot_id && slot.available)?;
        self.selected_slot_id = Some(slot.id.clone());
        Some(slot.clone())
    }

    pub fn clear_selection(&mut self) {
        self.selected_slot_id = None;
    }

    pub fn is_selected(&self, slot: &TimeSlot) -> bool {
        self.selected_slot_id.as_deref() == Some(slot.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> BookingWindow {
        BookingWindow {
            min_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            max_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn slot(id: &str, available: bool) -> TimeSlot {
        TimeSlot {
            id: id.to_string(),
            time: id.to_string(),
            available,
        }
    }

    #[test]
    fn test_starts_on_first_bookable_day() {
        let state = CalendarState::new(window(), vec![slot("slot-9-00", true)]);
        assert_eq!(state.selected_date, window().min_date);
        assert!(state.selected_slot_id.is_none());
    }

    #[test]
    fn test_unavailable_slot_is_ignored() {
        let mut state = CalendarState::new(window(), vec![slot("slot-9-00", false), slot("slot-9-30", true)]);
        assert!(state.select_slot("slot-9-00").is_none());
        assert!(state.selected_slot_id.is_none());

        let picked = state.select_slot("slot-9-30").unwrap();
        assert_eq!(picked.id, "slot-9-30");
        assert!(state.is_selected(&picked));
    }

    #[test]
    fn test_changing_date_clears_selected_slot() {
        let mut state = CalendarState::new(window(), vec![slot("slot-9-00", true)]);
        state.select_slot("slot-9-00");

        let next = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert!(state.set_date(next, vec![slot("slot-10-00", true)]));
        assert_eq!(state.selected_date, next);
        assert!(state.selected_slot_id.is_none());
        assert_eq!(state.slots[0].id, "slot-10-00");
    }

    #[test]
    fn test_dates_outside_window_are_clamped() {
        let mut state = CalendarState::new(window(), vec![slot("slot-9-00", true)]);
        let far_future = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        state.set_date(far_future, vec![slot("slot-9-00", true)]);
        assert_eq!(state.selected_date, window().max_date);
    }
}
