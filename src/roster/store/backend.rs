use crate::error::Result;
use crate::model::StudentRecord;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `RecordStore` handles the "what" (uniqueness, validation, ordering).
pub trait StorageBackend {
    /// Load every stored record, in stored order.
    /// Returns Ok(None) when nothing has been stored yet (absent or blank file).
    /// Returns `RosterError::Parse` when the stored content is not a record array.
    fn load_records(&self) -> Result<Option<Vec<StudentRecord>>>;

    /// Replace the stored records with `records`.
    /// MUST rewrite the whole collection; there are no incremental writes.
    fn save_records(&self, records: &[StudentRecord]) -> Result<()>;

    /// Where the records live. For FsBackend, the real file path.
    /// For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
