//! BMI Gauge headless host
//!
//! Replays an event script through the BMI gauge core and prints what a
//! renderer would receive.
//!
//! ## Usage
//!
//! - `bmi-gauge script.txt` reads events from a file
//! - `bmi-gauge` or `bmi-gauge -` reads events from stdin
//! - `--format json`, `--log-format compact`, `--theme dark` override the
//!   layered configuration

use anyhow::{Context, Result};
use bmi_gauge_cli::config::{self, LogFormat};
use bmi_gauge_cli::error::CliError;
use bmi_gauge_cli::{run_script, Cli};
use clap::Parser;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration, then apply command line overrides
    let mut config = config::AppConfig::load()?;
    cli.apply(&mut config);

    // Initialize tracing
    init_tracing(config.log.format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        theme = %config.display.theme,
        "Starting BMI gauge host"
    );

    let path = cli.script_path();
    let source = read_script(path.map(|p| p.as_path()))?;
    let origin = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_script(&source, &config, &mut out)
        .with_context(|| format!("Failed to replay script from {}", origin))?;

    info!(events = summary.events, "Done");
    Ok(())
}

/// Read the whole script from a file, or stdin when no path is given
fn read_script(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| CliError::Read {
                    path: "stdin".to_string(),
                    source: err,
                })?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "bmi_gauge_cli=info,bmi_gauge_shared=info".into()
        } else {
            "bmi_gauge_cli=debug,bmi_gauge_shared=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => {
            // JSON logging for log aggregation
            subscriber
                .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Compact => {
            subscriber
                .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            // Pretty logging for development
            subscriber
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
                .init();
        }
    }
}
