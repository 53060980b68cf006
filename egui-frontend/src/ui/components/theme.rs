//! # Theme Configuration
//!
//! Centralized color configuration for the booking app. All visual styling
//! should use these constants so screens stay consistent.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{Theme, CURRENT_THEME};
//!
//! let color = CURRENT_THEME.interactive.hover_border;
//! ```

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, tabs, slots)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Success, failure and warning colors
    pub status: StatusColors,
    /// Time slot grid colors
    pub slots: SlotColors,
}

/// Colors for interactive elements (buttons, tabs, hover states)
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Outline used on hover and on the selected card
    pub hover_border: Color32,
    /// Semi-transparent hover background
    pub hover_background: Color32,
    /// Primary action / active tab background
    pub active_background: Color32,
    /// Inactive tab and secondary button background
    pub inactive_background: Color32,
    /// Disabled primary button background
    pub disabled_background: Color32,
    pub button_border_normal: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub app_background: Color32,
    pub header_background: Color32,
    pub admin_header_background: Color32,
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
    pub summary_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub heading: Color32,
    pub white: Color32,
}

/// Outcome and badge colors
#[derive(Debug, Clone)]
pub struct StatusColors {
    pub success: Color32,
    pub success_background: Color32,
    pub error: Color32,
    pub error_background: Color32,
    pub warning: Color32,
    pub warning_background: Color32,
    pub info_background: Color32,
}

/// Time slot grid colors
#[derive(Debug, Clone)]
pub struct SlotColors {
    pub available_background: Color32,
    pub available_border: Color32,
    pub unavailable_background: Color32,
    pub unavailable_text: Color32,
    pub selected_background: Color32,
}

/// The current active theme: white cards on a pale blue background with indigo accents
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        hover_border: Color32::from_rgb(99, 102, 241),
        hover_background: Color32::from_rgba_premultiplied(238, 242, 255, 255),
        active_background: Color32::from_rgb(79, 70, 229),
        inactive_background: Color32::from_rgb(243, 244, 246),
        disabled_background: Color32::from_rgb(180, 180, 180),
        button_border_normal: Color32::from_rgb(209, 213, 219),
    },
    layout: LayoutColors {
        app_background: Color32::from_rgb(239, 246, 255),
        header_background: Color32::WHITE,
        admin_header_background: Color32::from_rgb(67, 56, 202),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(229, 231, 235),
        summary_background: Color32::from_rgb(249, 250, 251),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(31, 41, 55),
        secondary: Color32::from_rgb(107, 114, 128),
        heading: Color32::from_rgb(17, 24, 39),
        white: Color32::WHITE,
    },
    status: StatusColors {
        success: Color32::from_rgb(22, 163, 74),
        success_background: Color32::from_rgb(220, 252, 231),
        error: Color32::from_rgb(220, 50, 50),
        error_background: Color32::from_rgb(254, 226, 226),
        warning: Color32::from_rgb(202, 138, 4),
        warning_background: Color32::from_rgb(254, 249, 195),
        info_background: Color32::from_rgb(219, 234, 254),
    },
    slots: SlotColors {
        available_background: Color32::WHITE,
        available_border: Color32::from_rgb(209, 213, 219),
        unavailable_background: Color32::from_rgb(243, 244, 246),
        unavailable_text: Color32::from_rgb(156, 163, 175),
        selected_background: Color32::from_rgb(79, 70, 229),
    },
};

impl Theme {
    /// Fill for a primary button, grayed out while disabled
    pub fn primary_fill(&self, enabled: bool) -> Color32 {
        if enabled {
            self.interactive.active_background
        } else {
            self.interactive.disabled_background
        }
    }

    /// Tab fill and text colors for the active/inactive state
    pub fn tab_colors(&self, active: bool) -> (Color32, Color32) {
        if active {
            (self.interactive.active_background, self.typography.white)
        } else {
            (self.interactive.inactive_background, self.typography.secondary)
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    // Interactive colors
    pub const HOVER_BORDER: Color32 = CURRENT_THEME.interactive.hover_border;
    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;

    // Typography colors
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SECONDARY: Color32 = CURRENT_THEME.typography.secondary;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;

    // Layout colors
    pub const APP_BACKGROUND: Color32 = CURRENT_THEME.layout.app_background;
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const SUMMARY_BACKGROUND: Color32 = CURRENT_THEME.layout.summary_background;

    // Status colors
    pub const SUCCESS: Color32 = CURRENT_THEME.status.success;
    pub const ERROR: Color32 = CURRENT_THEME.status.error;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_fill_grays_out_when_disabled() {
        assert_eq!(CURRENT_THEME.primary_fill(true), colors::ACTIVE_BACKGROUND);
        assert_ne!(CURRENT_THEME.primary_fill(false), colors::ACTIVE_BACKGROUND);
    }

    #[test]
    fn test_tab_colors() {
        let (fill, text) = CURRENT_THEME.tab_colors(true);
        assert_eq!(fill, colors::ACTIVE_BACKGROUND);
        assert_eq!(text, colors::TEXT_WHITE);
    }
}
