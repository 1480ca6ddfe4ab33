use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};
use tracing::info;

/// Remove students by roll number.
///
/// Every roll number is checked before anything is removed, so an unknown
/// one leaves the roster untouched.
pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &mut RecordStore<B>,
    roll_numbers: &[I],
) -> Result<CmdResult> {
    for roll in roll_numbers {
        store.get(roll.as_ref())?;
    }

    let mut result = CmdResult::default();
    for roll in roll_numbers {
        // Repeated roll numbers in one call are removed once.
        if !store.contains(roll.as_ref()) {
            continue;
        }
        let removed = store.delete(roll.as_ref())?;
        info!(roll_number = %removed.roll_number, "student deleted");
        result.add_message(CmdMessage::success(format!(
            "Student deleted: {}",
            label(&removed)
        )));
        result.affected_students.push(removed);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::RosterError;
    use crate::model::StudentDraft;
    use crate::store::mem_backend::MemBackend;

    fn seeded() -> RecordStore<MemBackend> {
        let mut store = RecordStore::with_backend(MemBackend::new());
        add::run(&mut store, StudentDraft::new("1", "Ana", "20")).unwrap();
        add::run(&mut store, StudentDraft::new("2", "Bob", "21")).unwrap();
        store
    }

    #[test]
    fn deletes_each_student() {
        let mut store = seeded();
        let result = run(&mut store, &["1", "2"]).unwrap();
        assert_eq!(result.affected_students.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_roll_deletes_nothing() {
        let mut store = seeded();
        let err = run(&mut store, &["1", "999"]).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(ref r) if r == "999"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn repeated_roll_is_deleted_once() {
        let mut store = seeded();
        let result = run(&mut store, &["1", "1"]).unwrap();
        assert_eq!(result.affected_students.len(), 1);
        assert_eq!(store.len(), 1);
    }
}
