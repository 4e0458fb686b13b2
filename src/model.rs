use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// One registration: a student's name and the course they enrolled in.
/// Keys on disk are `FirstName`, `LastName` and `CourseName`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct StudentRecord {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl StudentRecord {
    /// Build a record after checking both name parts. The course name is
    /// free text and is not checked.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_first_name(&first_name)?;
        validate_last_name(&last_name)?;
        Ok(StudentRecord {
            first_name,
            last_name,
            course_name: course_name.into(),
        })
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

/// A name is accepted when it is non-empty and every character has the
/// Unicode Alphabetic property.
pub fn is_alphabetic_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    if is_alphabetic_name(value) {
        Ok(())
    } else {
        Err(ValidationError::FirstName)
    }
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if is_alphabetic_name(value) {
        Ok(())
    } else {
        Err(ValidationError::LastName)
    }
}

/// Ordered registrations for the current session. Records are only ever
/// appended; insertion order is display and save order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }
}

impl From<Vec<StudentRecord>> for RecordStore {
    fn from(records: Vec<StudentRecord>) -> Self {
        RecordStore { records }
    }
}
