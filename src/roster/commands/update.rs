use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{StudentEdits, StudentPatch};
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

/// Build the full patch an edit would apply, without applying it.
///
/// The CLI uses this to see the resulting age before asking for confirmation.
pub fn prepare<B: StorageBackend>(
    store: &RecordStore<B>,
    roll_number: &str,
    edits: StudentEdits,
) -> Result<StudentPatch> {
    let current = store.get(roll_number)?;
    edits.merge(current)
}

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    roll_number: &str,
    patch: StudentPatch,
) -> Result<CmdResult> {
    let updated = store.update(roll_number, patch)?.clone();
    info!(roll_number = %updated.roll_number, "student updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student updated: {}",
        label(&updated)
    )));
    Ok(result.with_affected_students(vec![updated]))
}
