//! BMI Gauge Shared Library
//!
//! The computation-and-state core of the BMI gauge screen: text parsing,
//! validation, BMI evaluation, and the feedback state machine that emits
//! declarative animation intents. Used by the WASM bindings and the CLI host.

pub mod animation;
pub mod bmi;
pub mod errors;
pub mod feedback;
pub mod input;
pub mod intent;
pub mod screen;
pub mod theme;
pub mod validation;

// Re-export commonly used items
pub use animation::AnimationBoard;
pub use bmi::*;
pub use errors::*;
pub use feedback::{DisplayState, Feedback, FeedbackController};
pub use input::parse_numeric;
pub use intent::*;
pub use screen::{BmiScreen, CalculateUpdate};
pub use theme::{AccentToken, Theme};
