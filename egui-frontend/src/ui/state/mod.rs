//! # UI State Module
//!
//! State structs grouped by concern. `BookingApp` owns one of each.
//!
//! - **app_state**: Backend handle, active screen, locale
//! - **ui_state**: User feedback messages
//! - **booking_state**: Wizard progress, service filter and the booking form
//! - **calendar_state**: Selected date, generated slots, booking window
//! - **admin_state**: Dashboard tab and appointment filter
//! - **modal_state**: Country picker and support dialog

pub mod admin_state;
pub mod app_state;
pub mod booking_state;
pub mod calendar_state;
pub mod modal_state;
pub mod ui_state;

pub use admin_state::*;
pub use app_state::*;
pub use booking_state::*;
pub use calendar_state::*;
pub use modal_state::*;
pub use ui_state::*;
