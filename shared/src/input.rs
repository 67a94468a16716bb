//! Free-text numeric input parsing
//!
//! Text fields deliver raw strings on every keystroke. Parsing never fails
//! loudly: anything that is not a finite number is simply absent.

/// Parse user-entered text into a number
///
/// Accepts a comma as the decimal separator and ignores surrounding
/// whitespace. Empty, non-numeric and non-finite text yields `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
