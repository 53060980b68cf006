//! # Modals Module
//!
//! Overlay dialogs of the booking app.
//!
//! ## Module Organization:
//! - `country_picker` - Searchable list of phone dialing codes
//! - `support_contact` - Support contact details after a failed booking
//! - `shared` - Backdrop/frame helper and the modal coordinator

pub mod country_picker;
pub mod shared;
pub mod support_contact;
