use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "students.json";

/// JSON-file backend: one pretty-printed array of records.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Backend for `file_name` inside `data_dir`.
    pub fn in_dir(data_dir: &Path, file_name: &str) -> Self {
        Self::new(data_dir.join(file_name))
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_file(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.data_file
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Option<Vec<StudentRecord>>> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "no data file yet");
            return Ok(None);
        }
        // Raw bytes, so invalid UTF-8 surfaces as a parse error.
        let content = fs::read(&self.data_file).map_err(RosterError::Io)?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let records: Vec<StudentRecord> =
            serde_json::from_slice(&content).map_err(RosterError::Parse)?;
        Ok(Some(records))
    }

    fn save_records(&self, records: &[StudentRecord]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(records).map_err(RosterError::Parse)?;

        // Atomic write
        let tmp_file = self.tmp_file();
        fs::write(&tmp_file, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RosterError::Io(e));
        }

        debug!(path = %self.data_file.display(), count = records.len(), "records written");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
