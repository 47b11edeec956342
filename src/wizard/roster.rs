use std::collections::VecDeque;

use super::patient::PatientRecord;

/// Committed patients for the current session, newest first
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: VecDeque<PatientRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front
    pub fn prepend(&mut self, record: PatientRecord) {
        self.records.push_front(record);
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PatientRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.iter()
    }
}
