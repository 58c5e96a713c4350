//! Core business logic module
//!
//! Pure functions behind the student record: mark and name validation, and the
//! grading arithmetic. Nothing in here reads input or writes output, so every
//! rule can be tested in isolation.

pub mod grading;
pub mod validation;

#[cfg(test)]
mod validation_proptest;
