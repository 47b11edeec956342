//! Draft editing and submission

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::patient::{DraftForm, FieldKey, Gender, PatientRecord};
use super::roster::Roster;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A record was prepended to the roster
    Committed { id: Uuid },
    /// Name was blank; nothing changed
    Discarded,
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, SubmitOutcome::Committed { .. })
    }
}

/// Owns the draft record and commits it to a roster
#[derive(Debug, Clone, Default)]
pub struct PatientFormController {
    draft: DraftForm,
}

impl PatientFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn field(&self, key: FieldKey) -> &str {
        self.draft.get(key)
    }

    /// Update one draft field. No validation happens here.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.draft.set(key, value);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    pub fn submit(&mut self, roster: &mut Roster) -> SubmitOutcome {
        self.submit_at(roster, Utc::now())
    }

    /// Submit with an explicit creation timestamp
    pub fn submit_at(&mut self, roster: &mut Roster, created_at: DateTime<Utc>) -> SubmitOutcome {
        let Some(record) = PatientRecord::from_draft(&self.draft, created_at) else {
            debug!("Discarding submission with blank name");
            return SubmitOutcome::Discarded;
        };

        let id = record.id;
        roster.prepend(record);
        self.draft = DraftForm::default();
        info!(%id, roster_size = roster.count(), "Patient added to roster");

        SubmitOutcome::Committed { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submit_blank_name_is_noop() {
        let mut form = PatientFormController::new();
        let mut roster = Roster::new();
        form.set_field(FieldKey::Name, "   ");
        form.set_field(FieldKey::Age, "40");
        let before = form.draft().clone();

        assert_eq!(form.submit(&mut roster), SubmitOutcome::Discarded);
        assert_eq!(roster.count(), 0);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_submit_trims_and_resets() {
        let mut form = PatientFormController::new();
        let mut roster = Roster::new();
        form.set_field(FieldKey::Name, "  Jane Doe  ");
        form.set_field(FieldKey::Age, "34");
        form.set_gender(Gender::Female);

        let outcome = form.submit(&mut roster);
        assert!(outcome.is_committed());
        assert_eq!(roster.count(), 1);

        let record = roster.get(0).unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.age, "34");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(outcome, SubmitOutcome::Committed { id: record.id });

        assert_eq!(form.draft(), &DraftForm::default());
        assert_eq!(form.draft().gender, Gender::Male);
    }

    #[test]
    fn test_submit_uses_given_timestamp() {
        let mut form = PatientFormController::new();
        let mut roster = Roster::new();
        let at = DateTime::parse_from_rfc3339("2024-05-01T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        form.set_field(FieldKey::Name, "Sam");
        form.submit_at(&mut roster, at);
        assert_eq!(roster.get(0).unwrap().created_at, at);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut form = PatientFormController::new();
        let mut roster = Roster::new();
        for name in ["a", "b", "c"] {
            form.set_field(FieldKey::Name, name);
            form.submit(&mut roster);
        }
        let mut ids: Vec<_> = roster.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
