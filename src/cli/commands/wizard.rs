use super::CommandHandler;
use crate::cli::tui;
use crate::config::{ConfigLoader, ConfigOverrides};
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Handler for the `wizard` command
pub struct WizardCommand {
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

impl WizardCommand {
    pub fn new(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        Self {
            config_path,
            overrides,
        }
    }
}

impl CommandHandler for WizardCommand {
    fn execute(&self) -> Result<()> {
        let mut config = ConfigLoader::new(self.config_path.clone()).load()?;
        self.overrides.apply(&mut config);
        info!(?config, "Starting setup wizard");

        let runtime = tokio::runtime::Runtime::new()?;
        let result = runtime.block_on(tui::run_setup_wizard(config));
        // The input reader polls in 100ms slices; don't wait on it forever
        runtime.shutdown_timeout(Duration::from_millis(250));
        result?;

        info!("Setup wizard closed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "wizard"
    }
}
