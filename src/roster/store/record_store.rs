use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::{SearchField, StudentPatch, StudentRecord};
use std::collections::HashSet;
use tracing::debug;

/// Outcome of a successful `load`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    /// Roll numbers found more than once on disk; only the first copy was kept.
    pub dropped_duplicates: Vec<String>,
}

/// The in-memory roster, mirrored to a backend after every mutation.
pub struct RecordStore<B: StorageBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    records: Vec<StudentRecord>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// An empty store. Nothing is read until `load` is called.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            records: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the in-memory records with the backend's content.
    ///
    /// On any error the store is left empty and the error is returned, so a
    /// corrupt file costs its data but never goes unreported.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.records.clear();

        let stored = match self.backend.load_records() {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                let location = self.backend.location();
                debug!(path = %location.display(), error = %e, "load failed, starting empty");
                return Err(e);
            }
        };

        let mut seen = HashSet::new();
        let mut report = LoadReport::default();
        for record in stored {
            if seen.insert(record.roll_number.clone()) {
                self.records.push(record);
            } else {
                debug!(roll_number = %record.roll_number, "dropping duplicate record");
                report.dropped_duplicates.push(record.roll_number);
            }
        }
        report.loaded = self.records.len();

        debug!(count = report.loaded, "records loaded");
        Ok(report)
    }

    pub fn list_all(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, roll_number: &str) -> bool {
        self.position(roll_number).is_some()
    }

    pub fn get(&self, roll_number: &str) -> Result<&StudentRecord> {
        self.position(roll_number)
            .map(|i| &self.records[i])
            .ok_or_else(|| RosterError::NotFound(roll_number.to_string()))
    }

    /// Case-insensitive substring match on one field. An empty query matches nothing.
    pub fn find(&self, field: SearchField, query: &str) -> Vec<&StudentRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.field(field).to_lowercase().contains(&needle))
            .collect()
    }

    /// Append a record and persist.
    ///
    /// The age range is not checked here; confirming unusual ages is the
    /// caller's job.
    pub fn add(&mut self, record: StudentRecord) -> Result<&StudentRecord> {
        if record.roll_number.trim().is_empty() || record.name.trim().is_empty() {
            return Err(RosterError::Validation(
                "Roll number and name are required".to_string(),
            ));
        }
        if self.contains(&record.roll_number) {
            return Err(RosterError::DuplicateKey(record.roll_number));
        }

        self.records.push(record);
        self.persist()?;
        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Overwrite every mutable field of the record with `roll_number`, then persist.
    pub fn update(&mut self, roll_number: &str, patch: StudentPatch) -> Result<&StudentRecord> {
        let idx = self
            .position(roll_number)
            .ok_or_else(|| RosterError::NotFound(roll_number.to_string()))?;
        if patch.name.trim().is_empty() {
            return Err(RosterError::Validation("Name is required".to_string()));
        }

        self.records[idx].apply(patch);
        self.persist()?;
        Ok(&self.records[idx])
    }

    /// Remove the record with `roll_number`, then persist. Returns the removed record.
    pub fn delete(&mut self, roll_number: &str) -> Result<StudentRecord> {
        let idx = self
            .position(roll_number)
            .ok_or_else(|| RosterError::NotFound(roll_number.to_string()))?;

        let removed = self.records.remove(idx);
        self.persist()?;
        Ok(removed)
    }

    /// Write the full sequence to the backend.
    ///
    /// A failed write leaves the in-memory records as they are.
    pub fn persist(&self) -> Result<()> {
        self.backend.save_records(&self.records)
    }

    fn position(&self, roll_number: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.roll_number == roll_number)
    }
}
