//! # API Facade
//!
//! The single entry point for roster operations, whatever the UI. It
//! dispatches to the command layer and returns `Result<CmdResult>`; it never
//! prints, prompts or exits.
//!
//! `RosterApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `RosterApi<FsBackend>`
//! - Testing: `RosterApi<MemBackend>`
//!
//! The API owns the one `RecordStore` of the process. Clients build it once
//! at startup and pass it around by `&mut`; roll numbers selected in the UI
//! are always passed in explicitly.

use crate::commands;
use crate::error::Result;
use crate::model::{SearchField, StudentDraft, StudentEdits, StudentPatch};
use crate::store::{RecordStore, StorageBackend};

pub struct RosterApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::RosterPaths,
}

impl<B: StorageBackend> RosterApi<B> {
    /// Wraps `backend` in an empty store. Call [`RosterApi::load`] before use.
    pub fn new(backend: B, paths: commands::RosterPaths) -> Self {
        Self {
            store: RecordStore::with_backend(backend),
            paths,
        }
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_students(&self, field: SearchField, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, field, query)
    }

    pub fn view_students<I: AsRef<str>>(&self, roll_numbers: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, roll_numbers)
    }

    pub fn add_student(&mut self, draft: StudentDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn prepare_update(&self, roll_number: &str, edits: StudentEdits) -> Result<StudentPatch> {
        commands::update::prepare(&self.store, roll_number, edits)
    }

    pub fn update_student(
        &mut self,
        roll_number: &str,
        patch: StudentPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, roll_number, patch)
    }

    pub fn delete_students<I: AsRef<str>>(
        &mut self,
        roll_numbers: &[I],
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, roll_numbers)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn data_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.paths)
    }

    pub fn paths(&self) -> &commands::RosterPaths {
        &self.paths
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RosterPaths};
