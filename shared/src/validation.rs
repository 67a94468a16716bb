//! Input validation for height and weight
//!
//! The bounds describe physically plausible entries, not medical limits.
//! Both ends are exclusive: a boundary value is itself rejected.

use crate::errors::RejectReason;
use serde::{Deserialize, Serialize};

/// Exclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationBounds {
    pub min: f64,
    pub max: f64,
}

impl ValidationBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies strictly between `min` and `max`
    pub fn contains(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }
}

/// Accepted height range in centimeters
pub const HEIGHT_CM_BOUNDS: ValidationBounds = ValidationBounds::new(40.0, 260.0);

/// Accepted weight range in kilograms
pub const WEIGHT_KG_BOUNDS: ValidationBounds = ValidationBounds::new(10.0, 400.0);

/// Validate a parsed height value (in cm)
pub fn validate_height_cm(height_cm: Option<f64>) -> Result<f64, RejectReason> {
    match height_cm {
        None => Err(RejectReason::MissingHeight),
        Some(h) if !HEIGHT_CM_BOUNDS.contains(h) => Err(RejectReason::HeightOutOfRange(h)),
        Some(h) => Ok(h),
    }
}

/// Validate a parsed weight value (in kg)
pub fn validate_weight_kg(weight_kg: Option<f64>) -> Result<f64, RejectReason> {
    match weight_kg {
        None => Err(RejectReason::MissingWeight),
        Some(w) if !WEIGHT_KG_BOUNDS.contains(w) => Err(RejectReason::WeightOutOfRange(w)),
        Some(w) => Ok(w),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "height_cm" => "Height",
        "weight_kg" => "Weight",
        _ => field_name,
    }
}

/// Short hint suitable for display under the input card
pub fn rejection_hint(reason: &RejectReason) -> String {
    let label = get_field_display_label(reason.field());
    match reason {
        RejectReason::MissingHeight | RejectReason::MissingWeight => {
            format!("{}: enter a number", label)
        }
        RejectReason::HeightOutOfRange(_) => format!(
            "{}: must be between {} and {} cm",
            label, HEIGHT_CM_BOUNDS.min, HEIGHT_CM_BOUNDS.max
        ),
        RejectReason::WeightOutOfRange(_) => format!(
            "{}: must be between {} and {} kg",
            label, WEIGHT_KG_BOUNDS.min, WEIGHT_KG_BOUNDS.max
        ),
    }
}
