//! Common test utilities for integration tests
//!
//! Runs scripts through the host and collects the emitted reports.

use bmi_gauge_cli::config::{AppConfig, OutputFormat};
use bmi_gauge_cli::{run_script, RunSummary};
use serde_json::Value;

/// Config that writes one JSON report per event
pub fn json_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.output.format = OutputFormat::Json;
    config
}

/// Replay a script and parse every report line
pub fn run_json(script: &str) -> (RunSummary, Vec<Value>) {
    let mut out = Vec::new();
    let summary = run_script(script, &json_config(), &mut out).expect("script should run");
    let text = String::from_utf8(out).expect("output is utf-8");
    let reports = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    (summary, reports)
}

/// Cues of every intent in a report
pub fn cues(report: &Value) -> Vec<String> {
    report["intents"]
        .as_array()
        .map(|intents| {
            intents
                .iter()
                .filter_map(|i| i["cue"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
