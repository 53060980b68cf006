//! # Core Application State
//!
//! The backend handle plus the two pieces of state every screen reads:
//! which top-level screen is showing and which language strings are in.

use shared::Locale;
use crate::backend::Backend;
use crate::backend::domain::Message;

/// Top-level screens toggled from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Booking,
    Admin,
}

/// Core application state containing essential app data
pub struct CoreAppState {
    /// Domain services
    pub backend: Backend,

    /// Screen currently shown below the header
    pub current_screen: AppScreen,

    /// Language used for every translated label
    pub locale: Locale,
}

impl CoreAppState {
    pub fn new(backend: Backend, locale: Locale) -> Self {
        Self {
            backend,
            current_screen: AppScreen::Booking,
            locale,
        }
    }

    /// Translate a message into the active locale
    pub fn t(&self, message: Message) -> &'static str {
        message.text(self.locale)
    }
}
