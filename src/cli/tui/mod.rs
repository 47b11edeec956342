/// Terminal User Interface module for interactive commands
pub mod setup;

use crate::config::WizardConfig;
use crate::Result;

/// Run the interactive setup wizard
pub async fn run_setup_wizard(config: WizardConfig) -> Result<()> {
    setup::run(config).await
}
