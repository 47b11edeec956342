use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::wizard::Step;

/// patient-setup: onboard patients through a three-step wizard
#[derive(Parser, Debug)]
#[command(name = "patient-setup")]
#[command(version = "0.1.0")]
#[command(about = "Interactive setup wizard for onboarding patients")]
#[command(
    long_about = "Walks through your clinic profile, collects patient details into an in-memory roster and reviews the result. Nothing is written to disk."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of the platform data directory
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file path (defaults to setup.yaml in the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive setup wizard
    Wizard {
        /// Step to open on
        #[arg(long)]
        start_step: Option<StartStep>,

        /// Roster highlight duration after adding a patient, in milliseconds
        #[arg(long)]
        highlight_ms: Option<u64>,

        /// Disable mouse capture
        #[arg(long)]
        no_mouse: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Wizard { .. } => "wizard",
        }
    }

    /// Command line values that override the config file
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Commands::Wizard {
                start_step,
                highlight_ms,
                no_mouse,
            } => ConfigOverrides {
                start_step: start_step.map(Step::from),
                highlight_ms: *highlight_ms,
                no_mouse: *no_mouse,
            },
        }
    }
}

/// Step names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartStep {
    Info,
    AddPatients,
    Complete,
}

impl From<StartStep> for Step {
    fn from(step: StartStep) -> Self {
        match step {
            StartStep::Info => Step::Info,
            StartStep::AddPatients => Step::AddPatients,
            StartStep::Complete => Step::Complete,
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_wizard_defaults() {
        let cli = Cli::parse_from(["patient-setup", "wizard"]);

        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.config, None);
        assert_eq!(cli.command.name(), "wizard");
        assert_eq!(cli.command.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_wizard_flags() {
        let cli = Cli::parse_from([
            "patient-setup",
            "wizard",
            "--start-step",
            "complete",
            "--highlight-ms",
            "800",
            "--no-mouse",
        ]);

        let overrides = cli.command.overrides();
        assert_eq!(overrides.start_step, Some(Step::Complete));
        assert_eq!(overrides.highlight_ms, Some(800));
        assert!(overrides.no_mouse);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "patient-setup",
            "wizard",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/wizard.log",
            "--config",
            "my-setup.yaml",
        ]);

        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/wizard.log")));
        assert_eq!(cli.config, Some(PathBuf::from("my-setup.yaml")));
    }

    #[test]
    fn test_start_step_value_names() {
        let cli = Cli::parse_from(["patient-setup", "wizard", "--start-step", "add-patients"]);
        assert_eq!(cli.command.overrides().start_step, Some(Step::AddPatients));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["patient-setup"]).is_err());
    }
}
