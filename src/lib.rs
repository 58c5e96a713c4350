pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod logging;
pub mod record;
pub mod registry;
pub mod session;

#[cfg(any(test, debug_assertions))]
pub mod test_utils;

pub use config::SessionSettings;
pub use crate::core::grading::ResultStatus;
pub use error::{Result, ResultsError};
pub use record::{StudentRecord, ValidationError};
pub use registry::{StudentRegistry, MAX_STUDENTS};
pub use session::Session;
