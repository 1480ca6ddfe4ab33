use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid student data: {0}")]
    Validation(String),

    #[error("Roll number already exists: {0}")]
    DuplicateKey(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse student data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    /// True for errors that leave the store usable (empty) after a failed load.
    pub fn is_recoverable_load(&self) -> bool {
        matches!(self, RosterError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
