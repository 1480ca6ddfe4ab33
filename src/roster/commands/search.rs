use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SearchField;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    field: SearchField,
    query: &str,
) -> Result<CmdResult> {
    let matches: Vec<_> = store.find(field, query).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if query.is_empty() {
        result.add_message(CmdMessage::info("Enter a search term."));
    } else if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No students with {} matching '{}'.",
            field, query
        )));
    }

    Ok(result.with_listed_students(matches))
}
