/// Interactive setup wizard implementation
pub mod app;
pub mod events;
pub mod motion;
pub mod screens;
pub mod state;
pub mod theme;

use crate::config::WizardConfig;
use crate::Result;

/// Entry point for the setup wizard
pub async fn run(config: WizardConfig) -> Result<()> {
    let app = app::App::new(config);
    app.run().await
}
