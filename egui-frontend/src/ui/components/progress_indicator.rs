//! # Progress Indicator Module
//!
//! Step indicators drawn with the painter.
//!
//! ## Key Functions:
//! - `render_wizard_progress()` - Numbered circles for Service → Time → Details
//! - `render_form_progress()` - Two-segment bar over the personal info and payment steps

use eframe::egui;
use crate::backend::domain::{Message, WizardStep};
use crate::ui::app_state::BookingApp;
use crate::ui::components::theme::{colors, CURRENT_THEME};

const CIRCLE_RADIUS: f32 = 16.0;

impl BookingApp {
    /// Three numbered steps joined by lines; completed and current steps are filled
    pub fn render_wizard_progress(&self, ui: &mut egui::Ui) {
        let current = self.booking.wizard.step().number();
        let labels = [
            self.core.t(Message::StepSelectService),
            self.core.t(Message::StepChooseTime),
            self.core.t(Message::StepEnterDetails),
        ];

        let width = ui.available_width().min(600.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 64.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let spacing = rect.width() / WizardStep::ALL.len() as f32;

        let centers: Vec<egui::Pos2> = (0..WizardStep::ALL.len())
            .map(|i| egui::pos2(rect.left() + spacing * (i as f32 + 0.5), rect.top() + CIRCLE_RADIUS + 2.0))
            .collect();

        for (i, pair) in centers.windows(2).enumerate() {
            let reached = (i as u8 + 2) <= current;
            let color = if reached { colors::ACTIVE_BACKGROUND } else { colors::CARD_BORDER };
            painter.line_segment(
                [pair[0] + egui::vec2(CIRCLE_RADIUS, 0.0), pair[1] - egui::vec2(CIRCLE_RADIUS, 0.0)],
                egui::Stroke::new(3.0, color),
            );
        }

        for (step, (center, label)) in WizardStep::ALL.iter().zip(centers.iter().zip(labels)) {
            let number = step.number();
            let reached = number <= current;
            let (fill, text_color) = if reached {
                (colors::ACTIVE_BACKGROUND, colors::TEXT_WHITE)
            } else {
                (CURRENT_THEME.interactive.inactive_background, colors::TEXT_SECONDARY)
            };

            painter.circle_filled(*center, CIRCLE_RADIUS, fill);
            painter.text(
                *center,
                egui::Align2::CENTER_CENTER,
                number.to_string(),
                egui::FontId::new(15.0, egui::FontFamily::Proportional),
                text_color,
            );
            painter.text(
                *center + egui::vec2(0.0, CIRCLE_RADIUS + 12.0),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::new(13.0, egui::FontFamily::Proportional),
                if number == current { colors::TEXT_HEADING } else { colors::TEXT_SECONDARY },
            );
        }
    }

    /// Progress bar for the form's editable steps; hidden once the booking has an outcome
    pub fn render_form_progress(&self, ui: &mut egui::Ui, show_payment: bool) {
        let step = self.booking.form.step();
        if step.is_terminal() {
            return;
        }

        let segments: u8 = if show_payment { 2 } else { 1 };
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 6.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let gap = 6.0;
        let segment_width = (rect.width() - gap * (segments as f32 - 1.0)) / segments as f32;

        for segment in 0..segments {
            let reached = segment < step.number();
            let min = egui::pos2(rect.left() + segment as f32 * (segment_width + gap), rect.top());
            let segment_rect = egui::Rect::from_min_size(min, egui::vec2(segment_width, rect.height()));
            let color = if reached { colors::ACTIVE_BACKGROUND } else { colors::CARD_BORDER };
            painter.rect_filled(segment_rect, egui::Rounding::same(3.0), color);
        }
    }
}
