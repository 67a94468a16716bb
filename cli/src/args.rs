//! Command line arguments for the `bmi-gauge` binary.

use crate::config::{AppConfig, LogFormat, OutputFormat};
use bmi_gauge_shared::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Replay a BMI gauge event script and print what a renderer would receive.
#[derive(Parser, Debug)]
#[command(name = "bmi-gauge", version, about)]
pub struct Cli {
    /// Event script to replay; `-` or nothing reads stdin.
    pub script: Option<PathBuf>,

    /// Report format on stdout (overrides `output.format`).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log line format on stderr (overrides `log.format`).
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Color theme used by the text report (overrides `display.theme`).
    #[arg(long)]
    pub theme: Option<Theme>,
}

impl Cli {
    /// Script path, or `None` when events come from stdin.
    pub fn script_path(&self) -> Option<&PathBuf> {
        self.script.as_ref().filter(|path| path.as_os_str() != "-")
    }

    /// Apply flags on top of the layered configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(format) = self.log_format {
            config.log.format = format;
        }
        if let Some(theme) = self.theme {
            config.display.theme = theme;
        }
    }
}
