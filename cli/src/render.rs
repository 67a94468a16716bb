//! Human-readable event reports

use crate::session::EventReport;
use bmi_gauge_shared::{Intent, Target, Theme};
use serde::Serialize;
use std::fmt::Write;

/// snake_case name a unit enum serializes to
fn tag<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => "?".to_string(),
    }
}

fn describe_target(target: &Target, theme: Theme) -> String {
    match target {
        Target::Value(value) => format!("{:.3}", value),
        Target::Accent(token) => format!("{} {}", tag(token), theme.accent_color(*token)),
        Target::Neutral => format!("neutral {}", theme.track_color()),
    }
}

fn describe_intent(intent: &Intent, theme: Theme) -> String {
    let steps: Vec<String> = intent
        .steps
        .iter()
        .map(|step| {
            format!(
                "{} ({}ms {})",
                describe_target(&step.target, theme),
                step.duration_ms,
                tag(&step.easing)
            )
        })
        .collect();

    format!(
        "{:<8} {:<24} -> {}",
        tag(&intent.cue),
        format!("{}.{}", tag(&intent.element), tag(&intent.property)),
        steps.join(", ")
    )
}

/// Render a report as indented text, one intent per line
pub fn render_text(report: &EventReport, theme: Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {} -> {}",
        report.line,
        report.event.name(),
        report.state
    );

    if let Some(display) = &report.display {
        let _ = writeln!(
            out,
            "    BMI {}  {} ({})",
            display.value, display.label, display.range
        );
        let _ = writeln!(out, "    {}", display.hint);
    }
    if let Some(offset) = report.indicator_offset {
        let _ = writeln!(out, "    indicator at {:.1}px", offset);
    }
    if let Some(hint) = &report.hint {
        let _ = writeln!(out, "    ! {}", hint);
    }
    if report.clear_inputs {
        let _ = writeln!(out, "    inputs cleared");
    }
    for intent in &report.intents {
        let _ = writeln!(out, "    {}", describe_intent(intent, theme));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_gauge_shared::{AccentToken, Cue, Easing, Element, Property};

    #[test]
    fn test_describe_intent() {
        let intent = Intent::new(Cue::Fill, Element::ScaleFill, Property::Color).then(
            Target::Accent(AccentToken::Success),
            700,
            Easing::EaseOut,
        );
        let text = describe_intent(&intent, Theme::Light);
        assert!(text.starts_with("fill"));
        assert!(text.contains("scale_fill.color"));
        assert!(text.contains("success #22C55E (700ms ease_out)"));
    }

    #[test]
    fn test_describe_neutral_uses_theme() {
        assert_eq!(
            describe_target(&Target::Neutral, Theme::Dark),
            "neutral #374151"
        );
        assert_eq!(describe_target(&Target::Value(0.5), Theme::Dark), "0.500");
    }
}
