//! BMI Gauge WASM Module
//!
//! WebAssembly bindings that let a browser renderer drive the BMI gauge
//! core. Structured values (outcomes, intents, display text) cross the
//! boundary as JSON strings; the page feeds intents to its own animation
//! layer.

use bmi_gauge_shared::{
    self as shared, AccentToken, AnimationTimings, BmiScreen, DisplayText, Theme,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Parse a text field value; `undefined` when nothing usable was entered
#[wasm_bindgen]
pub fn parse_numeric(text: &str) -> Option<f64> {
    shared::parse_numeric(text)
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    shared::calculate_bmi(weight_kg, height_cm)
}

/// Position of a BMI value on the gauge, in [0, 1]
#[wasm_bindgen]
pub fn scale_position(bmi: f64) -> f64 {
    shared::scale_position(bmi)
}

/// BMI with one decimal place
#[wasm_bindgen]
pub fn format_bmi(value: f64) -> String {
    shared::format_bmi(value)
}

/// Evaluate raw field texts and return the outcome as JSON
#[wasm_bindgen]
pub fn evaluate_json(height_text: &str, weight_text: &str) -> String {
    let outcome = shared::evaluate(
        shared::parse_numeric(height_text),
        shared::parse_numeric(weight_text),
    );
    to_json(&outcome)
}

/// Gauge tick marks as JSON
#[wasm_bindgen]
pub fn scale_ticks_json() -> String {
    to_json(&shared::scale_ticks())
}

/// Resolve an accent token (`"success"`, ...) for a theme (`"light"`, `"dark"`)
#[wasm_bindgen]
pub fn accent_color(theme: &str, token: &str) -> Option<String> {
    let theme: Theme = theme.parse().ok()?;
    let token: AccentToken =
        serde_json::from_value(serde_json::Value::String(token.to_string())).ok()?;
    Some(theme.accent_color(token).to_string())
}

/// Stateful gauge screen owned by the page
#[wasm_bindgen]
pub struct BmiGauge {
    screen: BmiScreen,
}

impl Default for BmiGauge {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BmiGauge {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BmiGauge {
        BmiGauge {
            screen: BmiScreen::new(AnimationTimings::default()),
        }
    }

    /// Create a gauge with custom timings given as JSON; missing keys use defaults
    pub fn with_timings(timings_json: &str) -> Result<BmiGauge, String> {
        let timings: AnimationTimings =
            serde_json::from_str(timings_json).map_err(|e| e.to_string())?;
        Ok(BmiGauge {
            screen: BmiScreen::new(timings),
        })
    }

    pub fn set_height_text(&mut self, text: &str) {
        self.screen.set_height_text(text);
    }

    pub fn set_weight_text(&mut self, text: &str) {
        self.screen.set_weight_text(text);
    }

    /// Report the gauge width in pixels
    pub fn set_available_width(&mut self, width: f64) {
        self.screen.set_available_width(width);
    }

    /// Resting indicator offset in pixels; `undefined` unless a result is shown
    pub fn indicator_offset(&self) -> Option<f64> {
        self.screen.indicator_offset()
    }

    /// "Calculate" pressed; returns the full update as JSON
    pub fn calculate(&mut self) -> String {
        to_json(&self.screen.calculate())
    }

    /// "Reset" pressed; returns feedback JSON (with `clear_inputs`)
    pub fn reset(&mut self) -> String {
        to_json(&self.screen.reset())
    }

    /// Current state name: `idle`, `invalid` or `result`
    pub fn state(&self) -> String {
        self.screen.state().name().to_string()
    }

    /// Result card text as JSON, or `null`
    pub fn display_json(&self) -> String {
        let display: Option<DisplayText> = self.screen.display_text();
        to_json(&display)
    }
}
