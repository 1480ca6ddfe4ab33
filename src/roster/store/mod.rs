//! # Storage Layer
//!
//! Two halves, split the same way everywhere in roster:
//!
//! - [`backend::StorageBackend`]: raw I/O of the whole record array.
//!   - [`fs_backend::FsBackend`]: production JSON file
//!   - [`mem_backend::MemBackend`]: in-memory, for tests
//! - [`record_store::RecordStore`]: the in-memory roster that owns the records,
//!   enforces roll number uniqueness and flushes to its backend after every
//!   mutation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── students.json   # JSON array of records, pretty-printed
//! └── config.json     # Roster configuration
//! ```
//!
//! Each record carries `roll_number`, `name`, `age`, `class`, `section` and
//! `address`. The file is read once at startup and rewritten in full on every
//! change.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use record_store::{LoadReport, RecordStore};
