//! Pure validation logic for student names and marks
//!
//! This module contains validation functions that can be tested in isolation
//! without requiring console I/O.

use std::fmt;

/// Number of subjects every student is graded on
pub const SUBJECT_COUNT: usize = 3;

/// Lowest mark a subject can receive
pub const MIN_MARK: i32 = 0;

/// Highest mark a subject can receive
pub const MAX_MARK: i32 = 100;

/// A rejected student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    MarkCount { found: usize },
    /// `subject` is 1-based, matching the prompts shown to the user.
    MarkOutOfRange { subject: usize, mark: i32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Student name cannot be null or empty."),
            Self::MarkCount { .. } => write!(
                f,
                "Marks array must contain exactly {SUBJECT_COUNT} integers."
            ),
            Self::MarkOutOfRange { subject, mark } => write!(
                f,
                "Invalid marks for subject {subject}: {mark}. Allowed range is {MIN_MARK} to {MAX_MARK}."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates that a student name has content once surrounding whitespace is removed
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Validates a single mark against the allowed range
pub fn validate_mark(subject: usize, mark: i32) -> Result<(), ValidationError> {
    if !(MIN_MARK..=MAX_MARK).contains(&mark) {
        return Err(ValidationError::MarkOutOfRange { subject, mark });
    }
    Ok(())
}

/// Validates a full set of marks, reporting the first offending subject
pub fn validate_marks(marks: &[i32]) -> Result<(), ValidationError> {
    if marks.len() != SUBJECT_COUNT {
        return Err(ValidationError::MarkCount { found: marks.len() });
    }

    marks
        .iter()
        .enumerate()
        .try_for_each(|(i, &mark)| validate_mark(i + 1, mark))
}
