use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentDraft;
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

/// Validate a draft and add it to the roster.
///
/// Callers confirm unusual ages before getting here; the store accepts any
/// integer age.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, draft: StudentDraft) -> Result<CmdResult> {
    let record = draft.into_record()?;
    let added = store.add(record)?.clone();
    info!(roll_number = %added.roll_number, "student added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added: {}",
        label(&added)
    )));
    Ok(result.with_affected_students(vec![added]))
}
