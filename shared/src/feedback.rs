//! Display state machine and feedback intents
//!
//! [`FeedbackController`] is the only writer of [`DisplayState`]. Each
//! command returns a [`Feedback`] describing what the renderer should do;
//! nothing here waits on or observes an animation.
//!
//! ```text
//!            calculate(rejected)             calculate(accepted)
//!   Idle ───────────────────────▶ Invalid ◀──────────────────────▶ Result
//!     ▲                              │  ▲                            │
//!     └──────────── reset ───────────┘  └──── calculate(rejected) ───┘
//! ```
//!
//! Every state accepts every command; there is no terminal state.

use crate::bmi::{BmiResult, EvaluationOutcome};
use crate::intent::{
    AnimationTimings, Cue, Easing, Element, Intent, Property, Target, SHAKE_PATTERN,
};
use serde::Serialize;
use tracing::debug;

/// What the screen currently shows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(tag = "state", content = "result", rename_all = "snake_case")]
pub enum DisplayState {
    #[default]
    Idle,
    Invalid,
    Result(BmiResult),
}

impl DisplayState {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayState::Idle => "idle",
            DisplayState::Invalid => "invalid",
            DisplayState::Result(_) => "result",
        }
    }

    pub fn result(&self) -> Option<&BmiResult> {
        match self {
            DisplayState::Result(result) => Some(result),
            _ => None,
        }
    }
}

/// Output of a controller command
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Feedback {
    pub intents: Vec<Intent>,
    /// Host should empty both text fields
    pub clear_inputs: bool,
}

impl Feedback {
    fn with_intents(intents: Vec<Intent>) -> Self {
        Self {
            intents,
            clear_inputs: false,
        }
    }

    /// Whether any emitted intent carries the given cue
    pub fn has_cue(&self, cue: Cue) -> bool {
        self.intents.iter().any(|i| i.cue == cue)
    }

    /// Intents carrying the given cue
    pub fn intents_for(&self, cue: Cue) -> impl Iterator<Item = &Intent> {
        self.intents.iter().filter(move |i| i.cue == cue)
    }
}

/// Owns the display state and turns events into intents
#[derive(Debug, Clone)]
pub struct FeedbackController {
    state: DisplayState,
    timings: AnimationTimings,
    scale_width: f64,
}

impl Default for FeedbackController {
    fn default() -> Self {
        Self::new(AnimationTimings::default())
    }
}

impl FeedbackController {
    pub fn new(timings: AnimationTimings) -> Self {
        Self {
            state: DisplayState::Idle,
            timings,
            scale_width: 0.0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn scale_width(&self) -> f64 {
        self.scale_width
    }

    pub fn timings(&self) -> &AnimationTimings {
        &self.timings
    }

    /// Apply the outcome of a "Calculate" press
    pub fn on_calculate(&mut self, outcome: &EvaluationOutcome) -> Feedback {
        match outcome {
            EvaluationOutcome::Rejected(_) => {
                self.transition(DisplayState::Invalid);
                let mut intents = vec![self.shake()];
                intents.extend(self.retract());
                Feedback::with_intents(intents)
            }
            EvaluationOutcome::Accepted(result) => {
                self.transition(DisplayState::Result(*result));
                let mut intents = self.reveal();
                intents.extend(self.fill(result));
                intents.extend(self.pop());
                Feedback::with_intents(intents)
            }
        }
    }

    /// Apply a "Reset" press
    pub fn on_reset(&mut self) -> Feedback {
        self.transition(DisplayState::Idle);
        Feedback {
            intents: self.retract(),
            clear_inputs: true,
        }
    }

    /// Record a new gauge width reported by the host layout
    ///
    /// Non-finite or negative widths count as zero. Indicator intents are in
    /// track fractions, so a width change never emits anything and never
    /// interrupts a running fill.
    pub fn on_layout(&mut self, width: f64) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        debug!(width, "Scale width changed");
        self.scale_width = width;
    }

    /// Resting pixel offset of the indicator for the current width
    ///
    /// `None` unless a result is shown.
    pub fn indicator_offset(&self) -> Option<f64> {
        self.state
            .result()
            .map(|result| result.scale_position * self.scale_width)
    }

    fn transition(&mut self, next: DisplayState) {
        debug!(from = self.state.name(), to = next.name(), "Display state transition");
        self.state = next;
    }

    // ------------------------------------------------------------------------
    // Intent builders
    // ------------------------------------------------------------------------

    fn shake(&self) -> Intent {
        let t = &self.timings;
        SHAKE_PATTERN.iter().fold(
            Intent::new(Cue::Shake, Element::InputCard, Property::TranslateX),
            |intent, factor| intent.to(factor * t.shake_amplitude, t.shake_leg_ms, Easing::EaseInOut),
        )
    }

    fn retract(&self) -> Vec<Intent> {
        let ms = self.timings.retract_ms;
        vec![
            Intent::new(Cue::Retract, Element::ResultCard, Property::Opacity)
                .to(0.0, ms, Easing::EaseIn),
            Intent::new(Cue::Retract, Element::ResultCard, Property::TranslateY)
                .to(self.timings.reveal_offset, ms, Easing::EaseIn),
            Intent::new(Cue::Retract, Element::ScaleFill, Property::Fraction)
                .to(0.0, ms, Easing::EaseInOut),
            Intent::new(Cue::Retract, Element::ScaleFill, Property::Color)
                .then(Target::Neutral, ms, Easing::EaseInOut),
            Intent::new(Cue::Retract, Element::Indicator, Property::Fraction)
                .to(0.0, ms, Easing::EaseInOut),
            Intent::new(Cue::Retract, Element::Indicator, Property::Color)
                .then(Target::Neutral, ms, Easing::EaseInOut),
        ]
    }

    fn reveal(&self) -> Vec<Intent> {
        let ms = self.timings.reveal_ms;
        vec![
            Intent::new(Cue::Reveal, Element::ResultCard, Property::Opacity)
                .to(1.0, ms, Easing::EaseOut),
            Intent::new(Cue::Reveal, Element::ResultCard, Property::TranslateY)
                .to(0.0, ms, Easing::EaseOutCubic),
        ]
    }

    fn fill(&self, result: &BmiResult) -> Vec<Intent> {
        let ms = self.timings.fill_ms;
        let accent = Target::Accent(result.category.accent());
        vec![
            Intent::new(Cue::Fill, Element::ScaleFill, Property::Fraction)
                .to(result.scale_position, ms, Easing::EaseOutCubic),
            Intent::new(Cue::Fill, Element::ScaleFill, Property::Color)
                .then(accent, ms, Easing::EaseOut),
            Intent::new(Cue::Fill, Element::Indicator, Property::Fraction)
                .to(result.scale_position, ms, Easing::EaseOutCubic),
            Intent::new(Cue::Fill, Element::Indicator, Property::Color)
                .then(accent, ms, Easing::EaseOut),
        ]
    }

    fn pop(&self) -> Vec<Intent> {
        let t = &self.timings;
        vec![
            Intent::new(Cue::Pop, Element::Indicator, Property::Scale)
                .to(t.pop_scale, t.pop_ms, Easing::EaseOut)
                .to(1.0, t.pop_ms, Easing::EaseOutBack),
            Intent::new(Cue::Pop, Element::Indicator, Property::TranslateY)
                .to(-t.pop_lift, t.pop_ms, Easing::EaseOut)
                .to(0.0, t.pop_ms, Easing::EaseOutBack),
        ]
    }
}
