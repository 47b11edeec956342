//! Patient records and the in-progress draft form

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Gender options offered by the form's select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Parse a display label back into a gender
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|g| g == self).unwrap_or(0)
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which field of the draft a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Age,
    Gender,
    BloodType,
    Allergies,
    Conditions,
    EmergencyContact,
    EmergencyPhone,
}

impl FieldKey {
    /// Fields in form order
    pub const ALL: [FieldKey; 8] = [
        FieldKey::Name,
        FieldKey::Age,
        FieldKey::Gender,
        FieldKey::BloodType,
        FieldKey::Allergies,
        FieldKey::Conditions,
        FieldKey::EmergencyContact,
        FieldKey::EmergencyPhone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Name => "Patient Name",
            FieldKey::Age => "Age",
            FieldKey::Gender => "Gender",
            FieldKey::BloodType => "Blood Type",
            FieldKey::Allergies => "Allergies",
            FieldKey::Conditions => "Medical Conditions",
            FieldKey::EmergencyContact => "Emergency Contact",
            FieldKey::EmergencyPhone => "Emergency Phone",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn hint(&self) -> &'static str {
        match self {
            FieldKey::Name => "Full name",
            FieldKey::Age => "Age",
            FieldKey::Gender => "",
            FieldKey::BloodType => "e.g., O+",
            FieldKey::Allergies => "Any allergies",
            FieldKey::Conditions => "List any medical conditions",
            FieldKey::EmergencyContact => "Contact name",
            FieldKey::EmergencyPhone => "Contact phone",
        }
    }

    /// Marked with an asterisk in the form. Only the name is enforced on submit.
    pub fn is_marked_required(&self) -> bool {
        matches!(self, FieldKey::Name | FieldKey::Age)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldKey::Gender)
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The in-progress, uncommitted record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub blood_type: String,
    pub allergies: String,
    pub conditions: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

impl DraftForm {
    /// Display value of a field
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Age => &self.age,
            FieldKey::Gender => self.gender.as_str(),
            FieldKey::BloodType => &self.blood_type,
            FieldKey::Allergies => &self.allergies,
            FieldKey::Conditions => &self.conditions,
            FieldKey::EmergencyContact => &self.emergency_contact,
            FieldKey::EmergencyPhone => &self.emergency_phone,
        }
    }

    /// Overwrite one field. Unknown gender labels are ignored.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Age => self.age = value,
            FieldKey::Gender => {
                if let Some(gender) = Gender::from_label(&value) {
                    self.gender = gender;
                }
            }
            FieldKey::BloodType => self.blood_type = value,
            FieldKey::Allergies => self.allergies = value,
            FieldKey::Conditions => self.conditions = value,
            FieldKey::EmergencyContact => self.emergency_contact = value,
            FieldKey::EmergencyPhone => self.emergency_phone = value,
        }
    }
}

/// A committed patient. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: Uuid,
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub blood_type: String,
    pub allergies: String,
    pub conditions: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub created_at: DateTime<Utc>,
}

impl PatientRecord {
    /// Build a record from a draft. Returns `None` when the trimmed name is empty.
    pub fn from_draft(draft: &DraftForm, created_at: DateTime<Utc>) -> Option<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age: draft.age.clone(),
            gender: draft.gender,
            blood_type: draft.blood_type.clone(),
            allergies: draft.allergies.clone(),
            conditions: draft.conditions.clone(),
            emergency_contact: draft.emergency_contact.clone(),
            emergency_phone: draft.emergency_phone.clone(),
            created_at,
        })
    }
}
