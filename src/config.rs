//! Session settings.
//!
//! Everything here comes from command line flags; the program reads no files
//! and no environment beyond the log filter.

use crate::registry::MAX_STUDENTS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub verbose: bool,
    pub color: bool,
    pub capacity: usize,
}

impl SessionSettings {
    pub fn from_flags(verbose: bool, no_color: bool) -> Self {
        Self {
            verbose,
            color: !no_color,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            capacity: MAX_STUDENTS,
        }
    }
}
