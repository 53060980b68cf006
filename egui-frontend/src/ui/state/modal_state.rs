//! # Modal State Module
//!
//! Visibility flags and inputs for the overlay dialogs.
//!
//! ## Responsibilities:
//! - Country picker visibility and its search query
//! - "Contact Support" dialog visibility
//!
//! ## Purpose:
//! Keeps modal bookkeeping in one place so at most one dialog is open.

#[derive(Debug, Default)]
pub struct ModalState {
    pub show_country_picker: bool,
    pub country_search: String,
    pub show_support_dialog: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_country_picker(&mut self) {
        self.close_all();
        self.show_country_picker = true;
    }

    /// Close the picker and forget the search query
    pub fn close_country_picker(&mut self) {
        self.show_country_picker = false;
        self.country_search.clear();
    }

    pub fn open_support_dialog(&mut self) {
        self.close_all();
        self.show_support_dialog = true;
    }

    pub fn close_all(&mut self) {
        self.close_country_picker();
        self.show_support_dialog = false;
    }

    pub fn any_open(&self) -> bool {
        self.show_country_picker || self.show_support_dialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_picker_clears_search() {
        let mut state = ModalState::new();
        state.open_country_picker();
        state.country_search = "spa".to_string();
        state.close_country_picker();
        assert!(!state.show_country_picker);
        assert!(state.country_search.is_empty());
    }

    #[test]
    fn test_only_one_modal_at_a_time() {
        let mut state = ModalState::new();
        state.open_country_picker();
        state.open_support_dialog();
        assert!(!state.show_country_picker);
        assert!(state.show_support_dialog);
        assert!(state.any_open());
    }
}
