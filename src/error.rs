use std::fmt;

use crate::record::ValidationError;

#[derive(Debug)]
pub enum ResultsError {
    Validation(ValidationError),
    DuplicateRoll {
        roll: i32,
    },
    StorageFull {
        capacity: usize,
    },
    NotFound {
        roll: i32,
    },
    InvalidInteger {
        input: String,
    },
    EmptyName,
    InputClosed,
    IoError {
        operation: String,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl ResultsError {
    pub fn duplicate_roll(roll: i32) -> Self {
        Self::DuplicateRoll { roll }
    }

    pub fn storage_full(capacity: usize) -> Self {
        Self::StorageFull { capacity }
    }

    pub fn not_found(roll: i32) -> Self {
        Self::NotFound { roll }
    }

    pub fn invalid_integer(input: impl Into<String>) -> Self {
        Self::InvalidInteger {
            input: input.into(),
        }
    }

    pub fn io_error(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            source,
        }
    }

    /// Input problems the session recovers from by discarding the line.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInteger { .. })
    }
}

impl fmt::Display for ResultsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateRoll { roll } => {
                write!(f, "A student with roll number {roll} already exists.")
            }
            Self::StorageFull { .. } => write!(f, "Student storage is full."),
            Self::NotFound { roll } => write!(f, "Student with roll number {roll} not found."),
            Self::InvalidInteger { input } => {
                write!(f, "expected an integer, got '{}'", input.trim())
            }
            Self::EmptyName => write!(f, "Student name cannot be empty."),
            Self::InputClosed => write!(f, "input stream closed"),
            Self::IoError { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
            Self::Other(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ResultsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ValidationError> for ResultsError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for ResultsError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "console".to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for ResultsError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, ResultsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_domain_messages() {
        assert_eq!(
            ResultsError::duplicate_roll(12).to_string(),
            "A student with roll number 12 already exists."
        );
        assert_eq!(
            ResultsError::storage_full(100).to_string(),
            "Student storage is full."
        );
        assert_eq!(
            ResultsError::not_found(-3).to_string(),
            "Student with roll number -3 not found."
        );
        assert_eq!(
            ResultsError::EmptyName.to_string(),
            "Student name cannot be empty."
        );
    }

    #[test]
    fn test_validation_conversion_keeps_message() {
        let err: ResultsError = ValidationError::MarkOutOfRange {
            subject: 2,
            mark: -1,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid marks for subject 2: -1. Allowed range is 0 to 100."
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ResultsError = io.into();
        assert!(err.to_string().contains("console"));
        assert!(err.to_string().contains("pipe closed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_input_error() {
        assert!(ResultsError::invalid_integer("abc").is_input_error());
        assert!(!ResultsError::InputClosed.is_input_error());
        assert!(!ResultsError::not_found(1).is_input_error());
    }

    #[test]
    fn test_other_from_anyhow() {
        let err: ResultsError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
