use crate::commands::{CmdMessage, CmdResult, RosterPaths};
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use crate::store::fs_backend::FsBackend;
use crate::store::StorageBackend;
use std::fs;

/// Create the data directory and an empty backing file. Existing data is left alone.
pub fn run(paths: &RosterPaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !paths.data_dir.exists() {
        fs::create_dir_all(&paths.data_dir).map_err(RosterError::Io)?;
    }

    if paths.data_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Roster already exists at {}",
            paths.data_file.display()
        )));
    } else {
        let empty: [StudentRecord; 0] = [];
        FsBackend::new(&paths.data_file).save_records(&empty)?;
        result.add_message(CmdMessage::success(format!(
            "Initialized empty roster at {}",
            paths.data_file.display()
        )));
    }

    Ok(result.with_paths(vec![paths.data_file.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_empty_data_file() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("roster");
        let paths = RosterPaths::new(data_dir.clone(), data_dir.join("students.json"));

        run(&paths).unwrap();
        assert_eq!(fs::read_to_string(&paths.data_file).unwrap().trim(), "[]");
    }

    #[test]
    fn leaves_existing_data_alone() {
        let dir = TempDir::new().unwrap();
        let paths = RosterPaths::new(dir.path().to_path_buf(), dir.path().join("students.json"));
        fs::write(&paths.data_file, "[{\"roll_number\":\"1\",\"name\":\"Ana\",\"age\":20}]").unwrap();

        let result = run(&paths).unwrap();
        assert!(result.messages[0].content.contains("already exists"));
        assert!(fs::read_to_string(&paths.data_file).unwrap().contains("Ana"));
    }
}
