use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;

/// In-memory backend for testing.
///
/// Holds the serialized form rather than the records themselves so that
/// loading goes through the same parse path as the file backend.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose stored content is `raw`, verbatim.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.content.replace(Some(raw.into()));
        backend
    }

    pub fn with_records(records: &[StudentRecord]) -> Self {
        let backend = Self::new();
        // Serializing plain structs to a string cannot fail.
        let raw = serde_json::to_string(records).unwrap_or_default();
        backend.content.replace(Some(raw));
        backend
    }

    /// Make every subsequent `load_records` fail with an I/O error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every subsequent `save_records` fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Option<Vec<StudentRecord>>> {
        if self.fail_reads.get() {
            return Err(RosterError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read failure",
            )));
        }
        match self.content.borrow().as_deref() {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(RosterError::Parse),
        }
    }

    fn save_records(&self, records: &[StudentRecord]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(RosterError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write failure",
            )));
        }
        let raw = serde_json::to_string_pretty(records).map_err(RosterError::Parse)?;
        self.content.replace(Some(raw));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://students.json")
    }
}
