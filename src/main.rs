use clap::Parser;
use patient_setup::{
    cli::commands::{wizard::WizardCommand, CommandHandler},
    cli::{Cli, Commands, LogLevel},
    config::loader::project_dirs,
    Result,
};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

const FALLBACK_LOG_FILE: &str = "patient-setup.log";

/// Initialize tracing with CLI flags
///
/// The terminal belongs to the wizard while it runs, so logs go to a file
/// rather than stderr. An explicit `--log-file` must open; otherwise the first
/// default location that opens wins, and logging is dropped if none does.
fn initialize_tracing(log_level: &LogLevel, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    let writer = match open_log_file(log_file, &default_log_paths())? {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(())
}

fn open_log_file(explicit: Option<&Path>, defaults: &[PathBuf]) -> Result<Option<File>> {
    if let Some(path) = explicit {
        return Ok(Some(append_to(path)?));
    }
    Ok(defaults.iter().find_map(|path| append_to(path).ok()))
}

fn append_to(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

fn default_log_paths() -> Vec<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().join("wizard.log"))
        .into_iter()
        .chain([PathBuf::from(FALLBACK_LOG_FILE)])
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_file.as_deref())?;
    tracing::debug!(command = cli.command.name(), "Dispatching command");

    match &cli.command {
        Commands::Wizard { .. } => {
            let command = WizardCommand::new(cli.config.clone(), cli.command.overrides());
            command.execute()?;
        }
    }

    Ok(())
}
