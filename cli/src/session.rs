//! Headless session driving the core from script events

use crate::config::{AppConfig, OutputFormat};
use crate::error::CliResult;
use crate::render;
use crate::script::{parse_script, ScriptEvent, ScriptLine};
use bmi_gauge_shared::{
    AnimationBoard, BmiScreen, DisplayText, EvaluationOutcome, Feedback, Intent, Theme,
};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, warn};

/// Everything observable after one event
#[derive(Debug, Clone, Serialize)]
pub struct EventReport {
    pub line: usize,
    pub event: ScriptEvent,
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<EvaluationOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Resting indicator offset in pixels while a result is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_offset: Option<f64>,
    pub clear_inputs: bool,
    pub intents: Vec<Intent>,
    /// Intents that replaced one still on the board
    pub superseded: usize,
}

/// Totals for a whole script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub events: usize,
    pub calculations: usize,
    pub rejected: usize,
    pub intents: usize,
    /// Intents that cut short one still in flight
    pub superseded: u64,
}

/// One screen plus a board standing in for the animation layer
pub struct Session {
    screen: BmiScreen,
    board: AnimationBoard,
    theme: Theme,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        let mut screen = BmiScreen::new(config.animation.clone());
        screen.set_available_width(config.display.scale_width);
        Self {
            screen,
            board: AnimationBoard::new(),
            theme: config.display.theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn screen(&self) -> &BmiScreen {
        &self.screen
    }

    pub fn board(&self) -> &AnimationBoard {
        &self.board
    }

    /// Feed one event through the screen
    pub fn handle(&mut self, line: &ScriptLine) -> EventReport {
        let mut outcome = None;
        let mut display = None;
        let mut hint = None;

        let feedback = match &line.event {
            ScriptEvent::Height(text) => {
                self.screen.set_height_text(text);
                Feedback::default()
            }
            ScriptEvent::Weight(text) => {
                self.screen.set_weight_text(text);
                Feedback::default()
            }
            ScriptEvent::Width(width) => {
                self.screen.set_available_width(*width);
                Feedback::default()
            }
            ScriptEvent::Calculate => {
                let update = self.screen.calculate();
                if let EvaluationOutcome::Rejected(reason) = &update.outcome {
                    warn!(line = line.line, %reason, "Calculation rejected");
                }
                outcome = Some(update.outcome);
                display = update.display;
                hint = update.hint;
                update.feedback
            }
            ScriptEvent::Reset => self.screen.reset(),
        };

        let superseded = self.board.apply(&feedback.intents);
        debug!(
            line = line.line,
            event = line.event.name(),
            state = self.screen.state().name(),
            intents = feedback.intents.len(),
            superseded,
            "Event handled"
        );

        EventReport {
            line: line.line,
            event: line.event.clone(),
            state: self.screen.state().name(),
            outcome,
            display,
            hint,
            indicator_offset: self.screen.indicator_offset(),
            clear_inputs: feedback.clear_inputs,
            intents: feedback.intents,
            superseded,
        }
    }
}

/// Parse and replay a script, writing one report per event to `out`
pub fn run_script<W: Write>(source: &str, config: &AppConfig, out: &mut W) -> CliResult<RunSummary> {
    let lines = parse_script(source)?;
    let mut session = Session::new(config);
    let mut summary = RunSummary::default();

    for line in &lines {
        let report = session.handle(line);

        summary.events += 1;
        summary.intents += report.intents.len();
        if let Some(outcome) = &report.outcome {
            summary.calculations += 1;
            if outcome.is_rejected() {
                summary.rejected += 1;
            }
        }

        match config.output.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
            OutputFormat::Text => write!(out, "{}", render::render_text(&report, session.theme()))?,
        }
    }
    summary.superseded = session.board().superseded_total();

    info!(
        events = summary.events,
        calculations = summary.calculations,
        rejected = summary.rejected,
        intents = summary.intents,
        superseded = summary.superseded,
        "Script finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_gauge_shared::{Cue, DisplayState, Element, Property, Target};

    fn line(n: usize, event: ScriptEvent) -> ScriptLine {
        ScriptLine { line: n, event }
    }

    #[test]
    fn test_session_uses_configured_width() {
        let session = Session::new(&AppConfig::default());
        assert_eq!(session.screen().scale_width(), 320.0);
    }

    #[test]
    fn test_text_events_do_not_emit_intents() {
        let mut session = Session::new(&AppConfig::default());
        let report = session.handle(&line(1, ScriptEvent::Height("172".into())));

        assert!(report.intents.is_empty());
        assert!(report.outcome.is_none());
        assert_eq!(report.state, "idle");
    }

    #[test]
    fn test_calculate_reports_display_and_board() {
        let mut session = Session::new(&AppConfig::default());
        session.handle(&line(1, ScriptEvent::Height("172".into())));
        session.handle(&line(2, ScriptEvent::Weight("68".into())));
        let report = session.handle(&line(3, ScriptEvent::Calculate));

        assert_eq!(report.state, "result");
        assert_eq!(report.display.as_ref().unwrap().value, "23.0");
        assert_eq!(report.superseded, 0);
        assert!(matches!(session.screen().state(), DisplayState::Result(_)));
        assert!(matches!(
            session.board().resting_target(Element::ScaleFill, Property::Fraction),
            Some(Target::Value(v)) if (v - 0.433).abs() < 0.001
        ));
    }

    #[test]
    fn test_reset_after_invalid() {
        let mut session = Session::new(&AppConfig::default());
        session.handle(&line(1, ScriptEvent::Height("30".into())));
        session.handle(&line(2, ScriptEvent::Weight("70".into())));
        let report = session.handle(&line(3, ScriptEvent::Calculate));
        assert_eq!(report.state, "invalid");
        assert!(report.hint.is_some());
        assert!(report.intents.iter().any(|i| i.cue == Cue::Shake));

        let report = session.handle(&line(4, ScriptEvent::Reset));
        assert_eq!(report.state, "idle");
        assert!(report.clear_inputs);
        assert!(report.superseded > 0);
        assert_eq!(session.screen().height_text(), "");
    }

    #[test]
    fn test_width_event_keeps_fill_running() {
        let mut session = Session::new(&AppConfig::default());
        session.handle(&line(1, ScriptEvent::Height("160".into())));
        session.handle(&line(2, ScriptEvent::Weight("64".into())));
        session.handle(&line(3, ScriptEvent::Calculate));
        let report = session.handle(&line(4, ScriptEvent::Width(200.0)));

        assert!(report.intents.is_empty());
        assert_eq!(report.superseded, 0);
        assert!(matches!(report.indicator_offset, Some(v) if (v - 100.0).abs() < 1e-6));
        let indicator = session
            .board()
            .current(Element::Indicator, Property::Fraction)
            .unwrap();
        assert_eq!(indicator.cue, Cue::Fill);
    }
}
