use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::wizard::{Step, DEFAULT_HIGHLIGHT};

/// Settings for a wizard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Step shown when the wizard opens
    pub start_step: Step,

    /// How long the roster stays highlighted after a commit, in milliseconds
    pub highlight_ms: u64,

    /// Redraw interval for animations, in milliseconds
    pub tick_rate_ms: u64,

    /// Capture mouse movement and clicks
    pub mouse: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            start_step: Step::AddPatients,
            highlight_ms: DEFAULT_HIGHLIGHT.as_millis() as u64,
            tick_rate_ms: 50,
            mouse: true,
        }
    }
}

impl WizardConfig {
    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Values from the command line that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub start_step: Option<Step>,
    pub highlight_ms: Option<u64>,
    pub no_mouse: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut WizardConfig) {
        if let Some(step) = self.start_step {
            config.start_step = step;
        }
        if let Some(ms) = self.highlight_ms {
            config.highlight_ms = ms;
        }
        if self.no_mouse {
            config.mouse = false;
        }
    }
}
