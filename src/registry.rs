//! In-memory, list-backed record registries.
//!
//! Each view owns one [`Registry`] per record type. Records keep the
//! identifier they were created with; every other field is replaced
//! wholesale on edit. Operations on an identifier that is not present are
//! no-ops reported as [`Outcome::Missing`].

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::ActiveStatus;

/// Opaque record identifier, unique within its registry for the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A record type stored in a [`Registry`].
pub trait Entity: Clone {
    /// Every field except the identifier.
    type Fields: Clone;

    /// Label used in log lines.
    const KIND: &'static str;

    fn id(&self) -> &RecordId;

    /// Build a record from a freshly assigned id and its fields.
    fn from_fields(id: RecordId, fields: Self::Fields) -> Self;

    fn fields(&self) -> Self::Fields;

    /// Replace every mutable field.
    fn set_fields(&mut self, fields: Self::Fields);

    /// Name shown in listings and matched by search.
    fn display_name(&self) -> String;
}

/// Records with an active/inactive switch.
pub trait Toggleable: Entity {
    fn status(&self) -> ActiveStatus;
    fn set_status(&mut self, status: ActiveStatus);
}

/// Result of an operation addressed by identifier.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The record existed and was changed.
    Applied,
    /// No record with that id; nothing changed.
    Missing,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Timestamp-based identifier source.
///
/// Ids are the creation time in milliseconds, bumped past the last issued
/// value so two records created in the same millisecond still differ.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next_at(&mut self, now_millis: i64) -> RecordId {
        let value = now_millis.max(self.last + 1);
        self.last = value;
        RecordId(value.to_string())
    }
}

/// Array-backed collection of records of one type.
#[derive(Debug, Clone)]
pub struct Registry<E: Entity> {
    records: Vec<E>,
    ids: IdGenerator,
}

impl<E: Entity> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Registry<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from seed records. Seed identifiers are kept as-is.
    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records,
            ids: IdGenerator::default(),
        }
    }

    /// Append a new record with a freshly generated identifier.
    pub fn add(&mut self, fields: E::Fields) -> &E {
        let id = self.fresh_id();
        info!(kind = E::KIND, %id, "record added");
        self.records.push(E::from_fields(id, fields));
        &self.records[self.records.len() - 1]
    }

    /// Replace all mutable fields of the record with `id`.
    pub fn edit(&mut self, id: &RecordId, fields: E::Fields) -> Outcome {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.set_fields(fields);
                info!(kind = E::KIND, %id, "record updated");
                Outcome::Applied
            }
            None => {
                debug!(kind = E::KIND, %id, "edit ignored, no such record");
                Outcome::Missing
            }
        }
    }

    /// Remove the record with `id`.
    pub fn remove(&mut self, id: &RecordId) -> Outcome {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() < before {
            info!(kind = E::KIND, %id, "record removed");
            Outcome::Applied
        } else {
            debug!(kind = E::KIND, %id, "remove ignored, no such record");
            Outcome::Missing
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: &RecordId) -> Option<&mut E> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.records.iter()
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose display name contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&E> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| needle.is_empty() || r.display_name().to_lowercase().contains(&needle))
            .collect()
    }

    fn fresh_id(&mut self) -> RecordId {
        loop {
            let id = self.ids.next_at(Utc::now().timestamp_millis());
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<E: Toggleable> Registry<E> {
    /// Flip the record between active and inactive.
    pub fn toggle_status(&mut self, id: &RecordId) -> Outcome {
        match self.get_mut(id) {
            Some(record) => {
                let next = record.status().toggled();
                record.set_status(next);
                info!(kind = E::KIND, %id, status = %next, "status toggled");
                Outcome::Applied
            }
            None => {
                debug!(kind = E::KIND, %id, "toggle ignored, no such record");
                Outcome::Missing
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::{Physiotherapist, PhysiotherapistFields};
    use crate::seed;

    fn fields(name: &str) -> PhysiotherapistFields {
        PhysiotherapistFields {
            name: name.to_string(),
            specialization: "Neuro Rehabilitation".to_string(),
            contact: "+1-555-0299".to_string(),
            availability: "Mon-Wed 8AM-2PM".to_string(),
            status: ActiveStatus::Active,
        }
    }

    fn seeded() -> Registry<Physiotherapist> {
        Registry::with_records(seed::physiotherapists())
    }

    #[test]
    fn test_id_generator_is_monotonic_within_same_millisecond() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        let c = ids.next_at(1_600_000_000_000);
        assert_eq!(a.as_str(), "1700000000000");
        assert_eq!(b.as_str(), "1700000000001");
        assert_eq!(c.as_str(), "1700000000002");
    }

    #[test]
    fn test_add_grows_by_one_with_unique_id() {
        let mut registry = seeded();
        let before = registry.len();

        let id = registry.add(fields("Dr. Nina Patel")).id().clone();

        assert_eq!(registry.len(), before + 1);
        assert_eq!(registry.iter().filter(|p| p.id == id).count(), 1);
    }

    #[test]
    fn test_rapid_adds_never_collide() {
        let mut registry = seeded();
        for i in 0..50 {
            let _ = registry.add(fields(&format!("Dr. Temp {i}")));
        }
        let ids: HashSet<_> = registry.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), registry.len());
    }

    #[test]
    fn test_edit_preserves_id_and_replaces_fields() {
        let mut registry = seeded();
        let id = RecordId::from("1");
        let before = registry.len();

        let mut replacement = fields("Dr. Sarah Smith-Lee");
        replacement.status = ActiveStatus::Inactive;
        assert_eq!(registry.edit(&id, replacement.clone()), Outcome::Applied);

        let record = registry.get(&id).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.fields(), replacement);
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let mut registry = seeded();
        let snapshot = registry.records().to_vec();

        let outcome = registry.edit(&RecordId::from("does-not-exist"), fields("Nobody"));

        assert_eq!(outcome, Outcome::Missing);
        assert_eq!(registry.records(), snapshot.as_slice());
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut registry = seeded();
        let before = registry.len();

        assert_eq!(registry.remove(&RecordId::from("2")), Outcome::Applied);
        assert_eq!(registry.len(), before - 1);
        assert!(!registry.contains(&RecordId::from("2")));

        assert_eq!(registry.remove(&RecordId::from("2")), Outcome::Missing);
        assert_eq!(registry.len(), before - 1);
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut registry = seeded();
        let id = RecordId::from("1");
        let original = registry.get(&id).unwrap().status;

        assert!(registry.toggle_status(&id).is_applied());
        assert_ne!(registry.get(&id).unwrap().status, original);
        assert!(registry.toggle_status(&id).is_applied());
        assert_eq!(registry.get(&id).unwrap().status, original);
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        let mut registry = seeded();
        assert_eq!(registry.toggle_status(&RecordId::from("42")), Outcome::Missing);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let registry = seeded();
        let hits = registry.search("michael");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dr. Michael Brown");
        assert_eq!(registry.search("  ").len(), registry.len());
        assert!(registry.search("zzz").is_empty());
    }
}
