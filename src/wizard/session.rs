use std::time::{Duration, Instant};

use super::form::{PatientFormController, SubmitOutcome};
use super::highlight::{Highlight, HighlightToken};
use super::roster::Roster;
use super::step::{Step, WizardController};

/// All state for one setup session
#[derive(Debug, Clone, Default)]
pub struct SetupSession {
    pub wizard: WizardController,
    pub form: PatientFormController,
    pub roster: Roster,
    pub highlight: Highlight,
}

impl SetupSession {
    pub fn new(start: Step, highlight_duration: Duration) -> Self {
        Self {
            wizard: WizardController::with_step(start),
            form: PatientFormController::new(),
            roster: Roster::new(),
            highlight: Highlight::new(highlight_duration),
        }
    }

    pub fn step(&self) -> Step {
        self.wizard.active()
    }

    /// Submit the draft. A commit also arms the highlight.
    pub fn submit(&mut self, now: Instant) -> (SubmitOutcome, Option<HighlightToken>) {
        let outcome = self.form.submit(&mut self.roster);
        let token = outcome.is_committed().then(|| self.highlight.arm(now));
        (outcome, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::patient::FieldKey;

    #[test]
    fn test_default_session() {
        let session = SetupSession::default();
        assert_eq!(session.step(), Step::AddPatients);
        assert!(session.roster.is_empty());
    }

    #[test]
    fn test_commit_arms_highlight() {
        let mut session = SetupSession::default();
        let now = Instant::now();
        session.form.set_field(FieldKey::Name, "Lee");

        let (outcome, token) = session.submit(now);
        assert!(outcome.is_committed());
        assert!(token.is_some());
        assert!(session.highlight.is_active(now));
    }

    #[test]
    fn test_discard_leaves_highlight_off() {
        let mut session = SetupSession::default();
        let now = Instant::now();

        let (outcome, token) = session.submit(now);
        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert!(token.is_none());
        assert!(!session.highlight.is_active(now));
    }
}
