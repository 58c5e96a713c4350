//! Common test utilities for the student results tests
//!
//! This module provides shared fixtures and custom assertions that can be used
//! across different test modules to reduce duplication and improve consistency.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
