//! Wizard state: active step, draft form, roster and the commit highlight
pub mod form;
pub mod highlight;
pub mod patient;
pub mod roster;
pub mod session;
pub mod step;

pub use form::{PatientFormController, SubmitOutcome};
pub use highlight::{Highlight, HighlightToken, DEFAULT_HIGHLIGHT};
pub use patient::{DraftForm, FieldKey, Gender, PatientRecord};
pub use roster::Roster;
pub use session::SetupSession;
pub use step::{Step, WizardController};
