//! BMI Gauge CLI Library
//!
//! Headless host for the BMI gauge core: replays event scripts and reports
//! the resulting display text and animation intents.

pub mod args;
pub mod config;
pub mod error;
pub mod render;
pub mod script;
pub mod session;

pub use args::Cli;
pub use session::{run_script, EventReport, RunSummary, Session};
