//! Grading arithmetic shared by every record

use std::fmt;

/// Minimum mark in every subject for an overall pass
pub const PASS_MARK: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Arithmetic mean of the marks. An empty slice averages to zero.
pub fn average(marks: &[i32]) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let sum: f64 = marks.iter().map(|&m| f64::from(m)).sum();
    sum / marks.len() as f64
}

/// A student passes only when no subject falls below [`PASS_MARK`]
pub fn status_for(marks: &[i32]) -> ResultStatus {
    if marks.iter().any(|&m| m < PASS_MARK) {
        ResultStatus::Fail
    } else {
        ResultStatus::Pass
    }
}

/// Renders an average the way result sheets print it: whole numbers keep one
/// decimal place (`80.0`), everything else uses the shortest exact form.
pub fn format_average(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
