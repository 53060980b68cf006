//! # UI State Module
//!
//! General feedback shown above the main content, independent of the
//! screen that produced it.

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self { error_message: None }
    }

    /// Clear any error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}
