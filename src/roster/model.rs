use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MIN_AGE: i32 = 5;
pub const DEFAULT_MAX_AGE: i32 = 30;

/// One student as stored in the backing file.
///
/// Optional fields are always written, empty when not given, so every record
/// on disk carries the same keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub roll_number: String,
    pub name: String,
    pub age: i32,
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub address: String,
}

impl StudentRecord {
    pub fn new(roll_number: impl Into<String>, name: impl Into<String>, age: i32) -> Self {
        Self {
            roll_number: roll_number.into(),
            name: name.into(),
            age,
            class_name: String::new(),
            section: String::new(),
            address: String::new(),
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Overwrites every mutable field. The roll number is left untouched.
    pub fn apply(&mut self, patch: StudentPatch) {
        self.name = patch.name;
        self.age = patch.age;
        self.class_name = patch.class_name;
        self.section = patch.section;
        self.address = patch.address;
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::RollNumber => &self.roll_number,
            SearchField::Name => &self.name,
        }
    }
}

/// Raw form input, every field exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub roll_number: String,
    pub name: String,
    pub age: String,
    pub class_name: String,
    pub section: String,
    pub address: String,
}

impl StudentDraft {
    pub fn new(
        roll_number: impl Into<String>,
        name: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            roll_number: roll_number.into(),
            name: name.into(),
            age: age.into(),
            ..Default::default()
        }
    }

    pub fn into_record(self) -> Result<StudentRecord> {
        if self.roll_number.trim().is_empty()
            || self.name.trim().is_empty()
            || self.age.trim().is_empty()
        {
            return Err(RosterError::Validation(
                "Roll number, name and age are required".to_string(),
            ));
        }
        let age = parse_age(&self.age)?;

        Ok(StudentRecord {
            roll_number: self.roll_number,
            name: self.name,
            age,
            class_name: self.class_name,
            section: self.section,
            address: self.address,
        })
    }
}

/// The mutable part of a record. Roll numbers never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: String,
    pub age: i32,
    pub class_name: String,
    pub section: String,
    pub address: String,
}

impl From<&StudentRecord> for StudentPatch {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            class_name: record.class_name.clone(),
            section: record.section.clone(),
            address: record.address.clone(),
        }
    }
}

/// Per-field overrides for an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentEdits {
    pub name: Option<String>,
    pub age: Option<String>,
    pub class_name: Option<String>,
    pub section: Option<String>,
    pub address: Option<String>,
}

impl StudentEdits {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.class_name.is_none()
            && self.section.is_none()
            && self.address.is_none()
    }

    /// Merges the overrides over `current`, parsing the age if one was given.
    pub fn merge(self, current: &StudentRecord) -> Result<StudentPatch> {
        let mut patch = StudentPatch::from(current);
        if let Some(name) = self.name {
            patch.name = name;
        }
        if let Some(age) = self.age {
            patch.age = parse_age(&age)?;
        }
        if let Some(class_name) = self.class_name {
            patch.class_name = class_name;
        }
        if let Some(section) = self.section {
            patch.section = section;
        }
        if let Some(address) = self.address {
            patch.address = address;
        }
        Ok(patch)
    }
}

pub fn parse_age(raw: &str) -> Result<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| RosterError::Validation(format!("Age must be a number, got '{}'", raw)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchField {
    RollNumber,
    Name,
}

impl FromStr for SearchField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "roll" | "roll_number" | "roll-number" => Ok(SearchField::RollNumber),
            "name" => Ok(SearchField::Name),
            other => Err(RosterError::Validation(format!(
                "Unknown search field: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::RollNumber => write!(f, "roll number"),
            SearchField::Name => write!(f, "name"),
        }
    }
}

/// Inclusive range of ages that need no confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: i32,
    pub max: i32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

impl AgeRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: i32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}
