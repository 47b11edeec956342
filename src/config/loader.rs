use super::types::WizardConfig;
use crate::{Result, SetupError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "setup.yaml";

/// Platform directories for this application
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "patient-setup")
}

/// Default config path, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Loader for the wizard configuration file
pub struct ConfigLoader {
    /// Explicit path from the command line
    path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Load configuration. An explicit path must exist; the default path may be missing.
    pub fn load(&self) -> Result<WizardConfig> {
        match &self.path {
            Some(path) => self.load_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => self.load_file(&path),
                _ => {
                    info!("No configuration file found, using defaults");
                    Ok(WizardConfig::default())
                }
            },
        }
    }

    /// Load configuration from a specific file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<WizardConfig> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SetupError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::parse(&contents).map_err(|e| {
            SetupError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn parse(contents: &str) -> Result<WizardConfig> {
        if contents.trim().is_empty() {
            return Ok(WizardConfig::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }
}
