//! # UI Components Module
//!
//! This module organizes all UI components of the booking app. Each submodule
//! renders one part of the interface as methods on `BookingApp` or as free
//! widget functions.
//!
//! ## Module Organization:
//! - `theme` / `styling` - Colors, global style and card drawing
//! - `ui_components` - Reusable widgets (buttons, inputs, badges)
//! - `header` - Title, screen toggle and language switcher
//! - `tab_manager` - Content routing between booking and admin screens
//! - `progress_indicator` - Wizard and form step indicators
//! - `service_selection` - Service cards with the free/paid filter
//! - `calendar_renderer` - Date picker and time slot grid
//! - `booking_form` - Personal info, payment, confirmation and failure steps
//! - `admin_dashboard` - Read-only statistics and appointments
//! - `modals` - Country picker and support dialog

pub mod admin_dashboard;
pub mod booking_form;
pub mod calendar_renderer;
pub mod header;
pub mod modals;
pub mod progress_indicator;
pub mod service_selection;
pub mod styling;
pub mod tab_manager;
pub mod theme;
pub mod ui_components;

pub use styling::{draw_app_background, setup_booking_style};
