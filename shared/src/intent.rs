//! Declarative animation intents
//!
//! The core never animates anything itself. It describes where a visual
//! property should end up, how long to take and with which easing. Any
//! renderer (CSS transitions, a native animation API, a frame loop) can
//! consume the same records.
//!
//! An intent is keyed by `(element, property)`. A newer intent for the same
//! key supersedes the one in flight and starts from the current value.

use crate::theme::AccentToken;
use serde::{Deserialize, Serialize};

/// Visual element on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    InputCard,
    ResultCard,
    ScaleFill,
    Indicator,
}

/// Animatable property of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Horizontal offset in pixels
    TranslateX,
    /// Vertical offset in pixels
    TranslateY,
    Opacity,
    Scale,
    /// Share of the gauge track, in [0, 1]; the renderer scales it by the
    /// track width (fill extent, indicator position)
    Fraction,
    Color,
}

/// Easing curve requested from the animation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutCubic,
    /// Slight overshoot before settling
    EaseOutBack,
}

/// Value a step animates towards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Target {
    Value(f64),
    Accent(AccentToken),
    /// Theme's neutral track color
    Neutral,
}

/// One leg of an animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub target: Target,
    pub duration_ms: u32,
    pub easing: Easing,
}

/// Which piece of feedback an intent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Input card oscillates after an invalid calculation
    Shake,
    /// Result card fades and slides in
    Reveal,
    /// Gauge fill and indicator move to the result
    Fill,
    /// Indicator briefly grows and lifts, then settles
    Pop,
    /// Result card and gauge return to their zero state
    Retract,
}

/// A declarative animation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub cue: Cue,
    pub element: Element,
    pub property: Property,
    pub delay_ms: u32,
    /// Played in order; concurrent intents live in separate records
    pub steps: Vec<Tween>,
}

impl Intent {
    pub fn new(cue: Cue, element: Element, property: Property) -> Self {
        Self {
            cue,
            element,
            property,
            delay_ms: 0,
            steps: Vec::new(),
        }
    }

    /// Append a leg
    pub fn then(mut self, target: Target, duration_ms: u32, easing: Easing) -> Self {
        self.steps.push(Tween {
            target,
            duration_ms,
            easing,
        });
        self
    }

    /// Append a numeric leg
    pub fn to(self, value: f64, duration_ms: u32, easing: Easing) -> Self {
        self.then(Target::Value(value), duration_ms, easing)
    }

    /// Superseding key
    pub fn key(&self) -> (Element, Property) {
        (self.element, self.property)
    }

    pub fn total_duration_ms(&self) -> u32 {
        self.delay_ms + self.steps.iter().map(|s| s.duration_ms).sum::<u32>()
    }

    /// Value the property rests at once the intent finishes
    pub fn final_target(&self) -> Option<Target> {
        self.steps.last().map(|s| s.target)
    }
}

// ============================================================================
// Timings
// ============================================================================

/// Durations and magnitudes used when building intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTimings {
    /// Duration of each of the five shake legs
    pub shake_leg_ms: u32,
    /// Peak horizontal displacement of the shake, in pixels
    pub shake_amplitude: f64,
    pub reveal_ms: u32,
    /// Distance the result card slides up from, in pixels
    pub reveal_offset: f64,
    pub fill_ms: u32,
    /// Duration of each pop leg (grow, settle)
    pub pop_ms: u32,
    pub pop_scale: f64,
    /// Upward lift of the indicator during the pop, in pixels
    pub pop_lift: f64,
    pub retract_ms: u32,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            shake_leg_ms: 60,
            shake_amplitude: 10.0,
            reveal_ms: 350,
            reveal_offset: 16.0,
            fill_ms: 700,
            pop_ms: 160,
            pop_scale: 1.25,
            pop_lift: 6.0,
            retract_ms: 220,
        }
    }
}

/// Relative displacement of each shake leg; alternating sign, shrinking, at rest last
pub const SHAKE_PATTERN: [f64; 5] = [1.0, -0.8, 0.6, -0.3, 0.0];
