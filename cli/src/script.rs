//! Event script parsing
//!
//! One event per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! width 320
//! height 172
//! weight 68,5
//! calculate
//! reset
//! ```
//!
//! Everything after `height`/`weight` is the raw field text, so an empty or
//! malformed value is passed through to the parser untouched.

use crate::error::ScriptError;
use serde::Serialize;

/// A single user or layout event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ScriptEvent {
    Height(String),
    Weight(String),
    Width(f64),
    Calculate,
    Reset,
}

impl ScriptEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptEvent::Height(_) => "height",
            ScriptEvent::Weight(_) => "weight",
            ScriptEvent::Width(_) => "width",
            ScriptEvent::Calculate => "calculate",
            ScriptEvent::Reset => "reset",
        }
    }
}

/// Event together with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub event: ScriptEvent,
}

/// Parse one line; `Ok(None)` for blank lines and comments
pub fn parse_line(line: usize, text: &str) -> Result<Option<ScriptEvent>, ScriptError> {
    let trimmed = text.trim_start();
    if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (trimmed.trim_end(), ""),
    };

    let event = match command.to_lowercase().as_str() {
        "height" => ScriptEvent::Height(rest.to_string()),
        "weight" => ScriptEvent::Weight(rest.to_string()),
        "calculate" => no_argument(line, "calculate", rest, ScriptEvent::Calculate)?,
        "reset" => no_argument(line, "reset", rest, ScriptEvent::Reset)?,
        "width" => {
            let value = rest.trim();
            if value.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "width",
                });
            }
            let width = value.parse::<f64>().map_err(|_| ScriptError::InvalidWidth {
                line,
                value: value.to_string(),
            })?;
            ScriptEvent::Width(width)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            })
        }
    };

    Ok(Some(event))
}

fn no_argument(
    line: usize,
    command: &'static str,
    rest: &str,
    event: ScriptEvent,
) -> Result<ScriptEvent, ScriptError> {
    if rest.trim().is_empty() {
        Ok(event)
    } else {
        Err(ScriptError::UnexpectedArgument { line, command })
    }
}

/// Parse a whole script, stopping at the first bad line
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(event) = parse_line(line, text)? {
            lines.push(ScriptLine { line, event });
        }
    }
    Ok(lines)
}
