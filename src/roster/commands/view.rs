use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

/// Look up students by exact roll number. Fails on the first unknown one.
pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &RecordStore<B>,
    roll_numbers: &[I],
) -> Result<CmdResult> {
    let students = roll_numbers
        .iter()
        .map(|roll| store.get(roll.as_ref()).cloned())
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_students(students))
}
