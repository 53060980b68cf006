//! Time slot domain logic.
//!
//! Generates the half-hour slots offered for a day and keeps date navigation
//! inside the booking window. Slot availability is random and regenerated
//! every time the date changes; nothing here is stored.

use chrono::{Days, Months, NaiveDate};
use log::debug;
use rand::Rng;
use shared::TimeSlot;

const FIRST_HOUR: u32 = 9;
const LAST_HOUR: u32 = 17;

/// Range of dates that can be picked, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl BookingWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min_date && date <= self.max_date
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min_date, self.max_date)
    }
}

#[derive(Clone)]
pub struct TimeSlotService {
    slot_availability: f64,
    window_months: u32,
}

impl TimeSlotService {
    pub fn new(slot_availability: f64, window_months: u32) -> Self {
        Self {
            slot_availability: slot_availability.clamp(0.0, 1.0),
            window_months,
        }
    }

    /// Slots for a day with freshly drawn availability
    pub fn generate_slots(&self) -> Vec<TimeSlot> {
        self.generate_slots_with_rng(&mut rand::thread_rng())
    }

    /// Slots from 9:00 AM to 5:00 PM every half hour (the last slot is 5:00 PM)
    pub fn generate_slots_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<TimeSlot> {
        let mut slots = Vec::new();

        for hour in FIRST_HOUR..=LAST_HOUR {
            slots.push(self.make_slot(hour, 0, rng));
            if hour < LAST_HOUR {
                slots.push(self.make_slot(hour, 30, rng));
            }
        }

        let available = slots.iter().filter(|slot| slot.available).count();
        debug!("Generated {} time slots ({} available)", slots.len(), available);
        slots
    }

    fn make_slot<R: Rng + ?Sized>(&self, hour: u32, minute: u32, rng: &mut R) -> TimeSlot {
        TimeSlot {
            id: format!("slot-{}-{:02}", hour, minute),
            time: slot_label(hour, minute),
            available: rng.gen::<f64>() < self.slot_availability,
        }
    }

    /// Booking window starting today and extending the configured number of months
    pub fn booking_window(&self, today: NaiveDate) -> BookingWindow {
        let max_date = today
            .checked_add_months(Months::new(self.window_months))
            .unwrap_or(NaiveDate::MAX);
        BookingWindow { min_date: today, max_date }
    }

    /// The day before `date`, unless that falls before the window
    pub fn previous_day(&self, date: NaiveDate, window: &BookingWindow) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(1)).filter(|day| window.contains(*day))
    }

    /// The day after `date`, unless that falls after the window
    pub fn next_day(&self, date: NaiveDate, window: &BookingWindow) -> Option<NaiveDate> {
        date.checked_add_days(Days::new(1)).filter(|day| window.contains(*day))
    }
}

/// 12-hour clock label, e.g. "9:30 AM" or "12:00 PM"
pub fn slot_label(hour: u32, minute: u32) -> String {
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    let period = if hour < 12 { "AM" } else { "PM" };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// Long date used in summaries, e.g. "Thursday, June 15, 2023"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_slots_covers_working_day() {
        let service = TimeSlotService::new(0.7, 3);
        let slots = service.generate_slots_with_rng(&mut StdRng::seed_from_u64(7));

        assert_eq!(slots.len(), 17);
        assert_eq!(slots.first().unwrap().time, "9:00 AM");
        assert_eq!(slots.first().unwrap().id, "slot-9-00");
        assert_eq!(slots[1].time, "9:30 AM");
        assert_eq!(slots[6].time, "12:00 PM");
        assert_eq!(slots.last().unwrap().time, "5:00 PM");
        assert_eq!(slots.last().unwrap().id, "slot-17-00");
    }

    #[test]
    fn test_availability_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let always = TimeSlotService::new(1.0, 3).generate_slots_with_rng(&mut rng);
        assert!(always.iter().all(|slot| slot.available));

        let never = TimeSlotService::new(0.0, 3).generate_slots_with_rng(&mut rng);
        assert!(never.iter().all(|slot| !slot.available));
    }

    #[test]
    fn test_booking_window_navigation() {
        let service = TimeSlotService::new(0.7, 3);
        let today = date(2024, 1, 31);
        let window = service.booking_window(today);

        assert_eq!(window.max_date, date(2024, 4, 30));
        assert_eq!(service.previous_day(today, &window), None);
        assert_eq!(service.next_day(today, &window), Some(date(2024, 2, 1)));
        assert_eq!(service.next_day(window.max_date, &window), None);
        assert_eq!(window.clamp(date(2023, 12, 1)), today);
        assert_eq!(window.clamp(date(2025, 1, 1)), window.max_date);
    }

    #[test]
    fn test_labels() {
        assert_eq!(slot_label(9, 0), "9:00 AM");
        assert_eq!(slot_label(12, 30), "12:30 PM");
        assert_eq!(slot_label(16, 30), "4:30 PM");
        assert_eq!(format_long_date(date(2023, 6, 15)), "Thursday, June 15, 2023");
    }
}
