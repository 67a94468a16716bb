//! Single-screen composite
//!
//! Holds the raw field texts and their parsed values between keystrokes and
//! wires a "Calculate" press through evaluation into the feedback controller.
//! Hosts (the wasm bindings, the CLI) drive the core through this type.

use crate::bmi::{evaluate, DisplayText, EvaluationOutcome};
use crate::feedback::{DisplayState, Feedback, FeedbackController};
use crate::input::parse_numeric;
use crate::intent::AnimationTimings;
use crate::validation::rejection_hint;
use serde::Serialize;

/// Result of a "Calculate" press
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateUpdate {
    pub outcome: EvaluationOutcome,
    /// Result card text, present only for accepted outcomes
    pub display: Option<DisplayText>,
    /// Input card hint, present only for rejected outcomes
    pub hint: Option<String>,
    pub feedback: Feedback,
}

/// The calculator screen
#[derive(Debug, Clone, Default)]
pub struct BmiScreen {
    height_text: String,
    weight_text: String,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    controller: FeedbackController,
}

impl BmiScreen {
    pub fn new(timings: AnimationTimings) -> Self {
        Self {
            controller: FeedbackController::new(timings),
            ..Self::default()
        }
    }

    /// Height field changed
    pub fn set_height_text(&mut self, text: &str) {
        self.height_text = text.to_string();
        self.height_cm = parse_numeric(text);
    }

    /// Weight field changed
    pub fn set_weight_text(&mut self, text: &str) {
        self.weight_text = text.to_string();
        self.weight_kg = parse_numeric(text);
    }

    /// Gauge width changed
    pub fn set_available_width(&mut self, width: f64) {
        self.controller.on_layout(width);
    }

    /// "Calculate" pressed
    pub fn calculate(&mut self) -> CalculateUpdate {
        let outcome = evaluate(self.height_cm, self.weight_kg);
        let feedback = self.controller.on_calculate(&outcome);

        let (display, hint) = match &outcome {
            EvaluationOutcome::Accepted(result) => (Some(DisplayText::from(result)), None),
            EvaluationOutcome::Rejected(reason) => (None, Some(rejection_hint(reason))),
        };

        CalculateUpdate {
            outcome,
            display,
            hint,
            feedback,
        }
    }

    /// "Reset" pressed; honors the controller's request to clear the fields
    pub fn reset(&mut self) -> Feedback {
        let feedback = self.controller.on_reset();
        if feedback.clear_inputs {
            self.set_height_text("");
            self.set_weight_text("");
        }
        feedback
    }

    pub fn state(&self) -> &DisplayState {
        self.controller.state()
    }

    /// Result card text for the current state
    pub fn display_text(&self) -> Option<DisplayText> {
        self.state().result().map(DisplayText::from)
    }

    pub fn height_text(&self) -> &str {
        &self.height_text
    }

    pub fn weight_text(&self) -> &str {
        &self.weight_text
    }

    pub fn parsed_inputs(&self) -> (Option<f64>, Option<f64>) {
        (self.height_cm, self.weight_kg)
    }

    pub fn scale_width(&self) -> f64 {
        self.controller.scale_width()
    }

    /// Resting indicator offset in pixels while a result is shown
    pub fn indicator_offset(&self) -> Option<f64> {
        self.controller.indicator_offset()
    }
}
