//! BMI evaluation module
//!
//! Validates parsed inputs, computes the Body Mass Index, classifies it
//! and maps it onto the visual gauge.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: evaluation has no side effects and never panics
//! 2. **Full Precision**: the stored value is unrounded, rounding is display-only
//! 3. **Static Categories**: thresholds and labels are domain constants

use crate::errors::RejectReason;
use crate::theme::AccentToken;
use crate::validation::{validate_height_cm, validate_weight_kg};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Static display metadata attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub range: &'static str,
    pub hint: &'static str,
    pub accent: AccentToken,
}

static UNDERWEIGHT_INFO: CategoryInfo = CategoryInfo {
    label: "Underweight",
    range: "< 18.5",
    hint: "Consider a nutrient-rich diet and talk to a healthcare provider.",
    accent: AccentToken::Info,
};

static NORMAL_INFO: CategoryInfo = CategoryInfo {
    label: "Normal",
    range: "18.5 – 24.9",
    hint: "Great job! Keep up a balanced diet and regular activity.",
    accent: AccentToken::Success,
};

static OVERWEIGHT_INFO: CategoryInfo = CategoryInfo {
    label: "Overweight",
    range: "25 – 29.9",
    hint: "Small changes in diet and daily movement can make a difference.",
    accent: AccentToken::Warning,
};

static OBESE_INFO: CategoryInfo = CategoryInfo {
    label: "Obese",
    range: "≥ 30",
    hint: "A healthcare provider can help you build a sustainable plan.",
    accent: AccentToken::Danger,
};

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, NORMAL_MIN),
            BmiCategory::Normal => (NORMAL_MIN, OVERWEIGHT_MIN),
            BmiCategory::Overweight => (OVERWEIGHT_MIN, OBESE_MIN),
            BmiCategory::Obese => (OBESE_MIN, f64::INFINITY),
        }
    }

    /// Get the display metadata for this category
    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            BmiCategory::Underweight => &UNDERWEIGHT_INFO,
            BmiCategory::Normal => &NORMAL_INFO,
            BmiCategory::Overweight => &OVERWEIGHT_INFO,
            BmiCategory::Obese => &OBESE_INFO,
        }
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn accent(&self) -> AccentToken {
        self.info().accent
    }
}

// ============================================================================
// Thresholds and Scale
// ============================================================================

pub const NORMAL_MIN: f64 = 18.5;
pub const OVERWEIGHT_MIN: f64 = 25.0;
pub const OBESE_MIN: f64 = 30.0;

/// BMI shown at the left end of the gauge
pub const SCALE_MIN: f64 = 10.0;
/// BMI shown at the right end of the gauge; anything above saturates
pub const SCALE_MAX: f64 = 40.0;

/// A labelled tick on the gauge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTick {
    pub label: String,
    pub bmi: f64,
    pub position: f64,
}

/// Tick marks for the gauge, derived from the same constants as the mapping
pub fn scale_ticks() -> Vec<ScaleTick> {
    [SCALE_MIN, NORMAL_MIN, OVERWEIGHT_MIN, OBESE_MIN, SCALE_MAX]
        .iter()
        .map(|&bmi| {
            let label = if bmi >= SCALE_MAX {
                format!("{}+", bmi)
            } else {
                format!("{}", bmi)
            };
            ScaleTick {
                label,
                bmi,
                position: scale_position(bmi),
            }
        })
        .collect()
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// The first category whose exclusive upper bound lies above `bmi`.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BmiCategory::ALL
        .into_iter()
        .find(|category| bmi < category.range().1)
        .unwrap_or(BmiCategory::Obese)
}

/// Map a BMI onto the unit interval of the gauge
///
/// BMI 10 sits at 0.0, BMI 40 at 1.0; values outside saturate.
pub fn scale_position(bmi: f64) -> f64 {
    ((bmi - SCALE_MIN) / (SCALE_MAX - SCALE_MIN)).clamp(0.0, 1.0)
}

/// Format a BMI value with one decimal place, rounding half up
pub fn format_bmi(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1}", rounded)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Successful BMI evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, unrounded
    pub value: f64,
    pub category: BmiCategory,
    /// Position on the gauge in [0, 1]
    pub scale_position: f64,
}

impl BmiResult {
    /// Build a result from a BMI value
    pub fn from_bmi(value: f64) -> Self {
        Self {
            value,
            category: classify_bmi(value),
            scale_position: scale_position(value),
        }
    }
}

/// Outcome of evaluating a pair of inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Rejected(RejectReason),
    Accepted(BmiResult),
}

impl EvaluationOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, EvaluationOutcome::Rejected(_))
    }

    pub fn result(&self) -> Option<&BmiResult> {
        match self {
            EvaluationOutcome::Accepted(result) => Some(result),
            EvaluationOutcome::Rejected(_) => None,
        }
    }
}

/// Evaluate parsed height and weight
///
/// Height problems are reported before weight problems.
pub fn evaluate(height_cm: Option<f64>, weight_kg: Option<f64>) -> EvaluationOutcome {
    let validated = validate_height_cm(height_cm)
        .and_then(|h| validate_weight_kg(weight_kg).map(|w| (h, w)));

    match validated {
        Ok((height, weight)) => {
            let result = BmiResult::from_bmi(calculate_bmi(weight, height));
            debug!(
                bmi = result.value,
                category = ?result.category,
                position = result.scale_position,
                "BMI evaluated"
            );
            EvaluationOutcome::Accepted(result)
        }
        Err(reason) => {
            debug!(%reason, field = reason.field(), "Evaluation rejected");
            EvaluationOutcome::Rejected(reason)
        }
    }
}

// ============================================================================
// Display Text
// ============================================================================

/// Text shown on the result card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    pub value: String,
    pub label: &'static str,
    pub range: &'static str,
    pub hint: &'static str,
}

impl From<&BmiResult> for DisplayText {
    fn from(result: &BmiResult) -> Self {
        let info = result.category.info();
        Self {
            value: format_bmi(result.value),
            label: info.label,
            range: info.range,
            hint: info.hint,
        }
    }
}
