//! Wizard steps and navigation

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the three wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    Info,
    AddPatients,
    Complete,
}

impl Default for Step {
    fn default() -> Self {
        Step::AddPatients
    }
}

impl Step {
    /// All steps in display order
    pub const ALL: [Step; 3] = [Step::Info, Step::AddPatients, Step::Complete];

    pub fn index(&self) -> usize {
        match self {
            Step::Info => 0,
            Step::AddPatients => 1,
            Step::Complete => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Info => "Your Info",
            Step::AddPatients => "Add Patients",
            Step::Complete => "Complete",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::Info => "Quick intro to your clinic profile and preferences.",
            Step::AddPatients => "Gather essentials so your care team is always ready.",
            Step::Complete => "Review and launch your proactive care workspace.",
        }
    }

    /// The step before this one, floored at the first step
    pub fn previous(&self) -> Self {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(Step::Info)
    }
}

/// Owns the active step. Any step can be reached from any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardController {
    active: Step,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// Starts on the Add Patients step
    pub fn new() -> Self {
        Self::with_step(Step::default())
    }

    pub fn with_step(step: Step) -> Self {
        Self { active: step }
    }

    pub fn active(&self) -> Step {
        self.active
    }

    pub fn index(&self) -> usize {
        self.active.index()
    }

    /// Jump to a step. Transitions are never gated.
    pub fn go_to(&mut self, step: Step) {
        if step != self.active {
            debug!(from = self.active.title(), to = step.title(), "Step changed");
        }
        self.active = step;
    }

    /// Index form of [`go_to`](Self::go_to). Returns false for an unknown index.
    pub fn go_to_index(&mut self, index: usize) -> bool {
        match Step::from_index(index) {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        self.go_to(self.active.previous());
    }

    /// Whether `step` sits before the active step
    pub fn is_complete(&self, step: Step) -> bool {
        step.index() < self.active.index()
    }
}
