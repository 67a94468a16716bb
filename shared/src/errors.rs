//! Error types for the BMI gauge core
//!
//! Nothing in the core is fatal. A rejected evaluation still carries the
//! reason so hosts can log it or show a hint under the input card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an evaluation was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum RejectReason {
    #[error("Height is missing or not a number")]
    MissingHeight,

    #[error("Weight is missing or not a number")]
    MissingWeight,

    #[error("Height {0} cm is outside the accepted range")]
    HeightOutOfRange(f64),

    #[error("Weight {0} kg is outside the accepted range")]
    WeightOutOfRange(f64),
}

impl RejectReason {
    /// Name of the input field the rejection points at
    pub fn field(&self) -> &'static str {
        match self {
            RejectReason::MissingHeight | RejectReason::HeightOutOfRange(_) => "height_cm",
            RejectReason::MissingWeight | RejectReason::WeightOutOfRange(_) => "weight_kg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_reason_field() {
        assert_eq!(RejectReason::MissingHeight.field(), "height_cm");
        assert_eq!(RejectReason::HeightOutOfRange(300.0).field(), "height_cm");
        assert_eq!(RejectReason::MissingWeight.field(), "weight_kg");
        assert_eq!(RejectReason::WeightOutOfRange(5.0).field(), "weight_kg");
    }

    #[test]
    fn test_reject_reason_message() {
        assert_eq!(
            RejectReason::HeightOutOfRange(30.0).to_string(),
            "Height 30 cm is outside the accepted range"
        );
    }

    #[test]
    fn test_reject_reason_serializes_tagged() {
        let json = serde_json::to_string(&RejectReason::WeightOutOfRange(400.0)).unwrap();
        assert_eq!(json, r#"{"reason":"weight_out_of_range","value":400.0}"#);

        let json = serde_json::to_string(&RejectReason::MissingHeight).unwrap();
        assert_eq!(json, r#"{"reason":"missing_height"}"#);
    }
}
