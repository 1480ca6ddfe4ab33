use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>) -> Result<CmdResult> {
    let report = store.load()?;
    let mut result = CmdResult::default();

    for roll_number in &report.dropped_duplicates {
        result.add_message(CmdMessage::warning(format!(
            "Ignored duplicate record for roll number {} (kept the first one)",
            roll_number
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RosterError;
    use crate::model::StudentRecord;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn warns_about_dropped_duplicates() {
        let backend = MemBackend::with_records(&[
            StudentRecord::new("1", "Ana", 20),
            StudentRecord::new("1", "Bob", 21),
        ]);
        let mut store = RecordStore::with_backend(backend);

        let result = run(&mut store).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("roll number 1"));
    }

    #[test]
    fn clean_load_has_no_messages() {
        let backend = MemBackend::with_records(&[StudentRecord::new("1", "Ana", 20)]);
        let mut store = RecordStore::with_backend(backend);
        assert!(run(&mut store).unwrap().messages.is_empty());
    }

    #[test]
    fn corrupt_data_is_an_error() {
        let mut store = RecordStore::with_backend(MemBackend::with_raw("[{\"roll_number\": 1"));
        assert!(matches!(run(&mut store), Err(RosterError::Parse(_))));
        assert!(store.is_empty());
    }
}
