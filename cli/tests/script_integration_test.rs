//! Integration tests replaying event scripts through the host

mod common;

use bmi_gauge_cli::config::AppConfig;
use bmi_gauge_cli::error::{CliError, ScriptError};
use bmi_gauge_cli::run_script;
use common::{cues, run_json};

#[test]
fn test_normal_scenario() {
    let (summary, reports) = run_json("height 172\nweight 68\ncalculate\n");

    assert_eq!(summary.events, 3);
    assert_eq!(summary.calculations, 1);
    assert_eq!(summary.rejected, 0);

    let report = &reports[2];
    assert_eq!(report["state"], "result");
    assert_eq!(report["display"]["value"], "23.0");
    assert_eq!(report["display"]["label"], "Normal");
    assert_eq!(report["display"]["range"], "18.5 – 24.9");
    assert_eq!(report["outcome"]["outcome"], "accepted");
    assert_eq!(report["outcome"]["data"]["category"], "normal");

    let position = report["outcome"]["data"]["scale_position"].as_f64().unwrap();
    assert!((position - 0.433).abs() < 0.001);

    let cues = cues(report);
    assert!(cues.iter().any(|c| c == "reveal"));
    assert!(cues.iter().any(|c| c == "fill"));
    assert!(cues.iter().any(|c| c == "pop"));
}

#[test]
fn test_obese_scenario_saturates() {
    let (_, reports) = run_json("height 150\nweight 120\ncalculate\n");
    let data = &reports[2]["outcome"]["data"];

    assert_eq!(data["category"], "obese");
    assert_eq!(data["scale_position"].as_f64(), Some(1.0));
    assert_eq!(reports[2]["display"]["value"], "53.3");
}

#[test]
fn test_short_height_scenario() {
    let (summary, reports) = run_json("height 30\nweight 70\ncalculate\n");
    let report = &reports[2];

    assert_eq!(summary.rejected, 1);
    assert_eq!(report["state"], "invalid");
    assert_eq!(report["outcome"]["data"]["reason"], "height_out_of_range");
    assert!(report.get("display").is_none());

    let cues = cues(report);
    assert!(cues.iter().any(|c| c == "shake"));
    assert!(cues.iter().any(|c| c == "retract"));
}

#[test]
fn test_repeated_invalid_presses_supersede() {
    let (summary, reports) = run_json("calculate\ncalculate\ncalculate\n");

    assert_eq!(reports[0]["superseded"], 0);
    let emitted = reports[1]["intents"].as_array().unwrap().len() as u64;
    assert_eq!(reports[1]["superseded"].as_u64(), Some(emitted));
    assert_eq!(reports[2]["superseded"].as_u64(), Some(emitted));
    assert_eq!(summary.superseded, 2 * emitted);
}

#[test]
fn test_reset_and_recalculate() {
    let script = "\
# first try
height 172
weight 68
calculate
reset
calculate
";
    let (summary, reports) = run_json(script);

    assert_eq!(reports[3]["state"], "idle");
    assert_eq!(reports[3]["clear_inputs"], true);
    // Inputs were cleared, so the next press is rejected
    assert_eq!(reports[4]["state"], "invalid");
    assert_eq!(reports[4]["outcome"]["data"]["reason"], "missing_height");
    assert_eq!(summary.calculations, 2);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn test_width_change_does_not_interrupt_fill() {
    let (_, reports) = run_json("height 160\nweight 64\ncalculate\nwidth 200\nwidth 0\n");

    let indicator = reports[2]["intents"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["element"] == "indicator" && i["property"] == "fraction")
        .unwrap();
    assert_eq!(indicator["cue"], "fill");
    let position = indicator["steps"][0]["target"]["value"].as_f64().unwrap();
    assert!((position - 0.5).abs() < 1e-6);

    for report in &reports[3..] {
        assert!(report["intents"].as_array().unwrap().is_empty());
        assert_eq!(report["superseded"], 0);
    }
    let offset = reports[3]["indicator_offset"].as_f64().unwrap();
    assert!((offset - 100.0).abs() < 1e-6);
    assert_eq!(reports[4]["indicator_offset"].as_f64(), Some(0.0));
}

#[test]
fn test_trailing_argument_fails_with_line() {
    let mut out = Vec::new();
    let error = run_script("height 172\nweight 68\ncalculate now\n", &AppConfig::default(), &mut out)
        .unwrap_err();

    match error {
        CliError::Script(ScriptError::UnexpectedArgument { line, command }) => {
            assert_eq!(line, 3);
            assert_eq!(command, "calculate");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(out.is_empty());
}

#[test]
fn test_unknown_command_fails_with_line() {
    let mut out = Vec::new();
    let error = run_script("height 172\nfly\n", &AppConfig::default(), &mut out).unwrap_err();

    match error {
        CliError::Script(ScriptError::UnknownCommand { line, command }) => {
            assert_eq!(line, 2);
            assert_eq!(command, "fly");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // Nothing is replayed when the script is malformed
    assert!(out.is_empty());
}

#[test]
fn test_text_output() {
    let mut out = Vec::new();
    run_script(
        "height 172\nweight 68\ncalculate\n",
        &AppConfig::default(),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("[3] calculate -> result"));
    assert!(text.contains("BMI 23.0  Normal (18.5 – 24.9)"));
    assert!(text.contains("scale_fill.color"));
    assert!(text.contains("#22C55E"));
    assert!(text.contains("indicator at 138.5px"));
}
