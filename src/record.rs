//! Student records.
//!
//! A [`StudentRecord`] can only be obtained through [`StudentRecord::new`],
//! which validates the name and every mark. Once built, a record never changes,
//! so any record held by the registry is known to be valid.

use std::io::{self, Write};

use crate::core::grading::{self, ResultStatus};
use crate::core::validation::{self, SUBJECT_COUNT};

pub use crate::core::validation::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    roll_number: i32,
    name: String,
    marks: [i32; SUBJECT_COUNT],
}

impl StudentRecord {
    /// Builds a record, trimming the name and checking each mark in subject order.
    pub fn new(
        roll_number: i32,
        name: impl AsRef<str>,
        marks: &[i32],
    ) -> Result<Self, ValidationError> {
        let name = name.as_ref();
        validation::validate_name(name)?;
        validation::validate_marks(marks)?;

        let mut stored = [0; SUBJECT_COUNT];
        stored.copy_from_slice(marks);

        Ok(Self {
            roll_number,
            name: name.trim().to_string(),
            marks: stored,
        })
    }

    pub fn roll_number(&self) -> i32 {
        self.roll_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &[i32; SUBJECT_COUNT] {
        &self.marks
    }

    pub fn average(&self) -> f64 {
        grading::average(&self.marks)
    }

    pub fn status(&self) -> ResultStatus {
        grading::status_for(&self.marks)
    }

    /// Re-checks the stored marks. Always succeeds for a record built by `new`.
    pub fn validate_marks(&self) -> Result<(), ValidationError> {
        validation::validate_marks(&self.marks)
    }

    /// Writes the result block shown when a student is looked up.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let marks = self
            .marks
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(out, "Roll Number: {}", self.roll_number)?;
        writeln!(out, "Student Name: {}", self.name)?;
        writeln!(out, "Marks: {marks}")?;
        writeln!(
            out,
            "Average: {}",
            grading::format_average(self.average())
        )?;
        writeln!(out, "Result: {}", self.status())?;
        Ok(())
    }
}
