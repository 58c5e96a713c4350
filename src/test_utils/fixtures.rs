//! Test fixtures and data builders for consistent test data
//!
//! This module provides record builders and scripted sessions used across
//! multiple test modules.

use crate::config::SessionSettings;
use crate::record::StudentRecord;
use crate::registry::StudentRegistry;
use crate::session::Session;

/// Creates a passing record with the given roll number
pub fn sample_record(roll: i32) -> StudentRecord {
    StudentRecord::new(roll, format!("Student {roll}"), &[90, 80, 70])
        .expect("fixture marks are in range")
}

/// Creates a record that fails on its third subject
pub fn failing_record(roll: i32) -> StudentRecord {
    StudentRecord::new(roll, format!("Student {roll}"), &[40, 40, 39])
        .expect("fixture marks are in range")
}

/// Creates a registry already holding `count` records with rolls `1..=count`
pub fn filled_registry(count: usize, capacity: usize) -> StudentRegistry {
    let mut registry = StudentRegistry::with_capacity(capacity);
    for roll in 1..=count as i32 {
        registry
            .insert(sample_record(roll))
            .expect("fixture registry has room");
    }
    registry
}

/// Input lines that add one student through the menu
pub fn add_student_script(roll: i32, name: &str, marks: [i32; 3]) -> String {
    format!(
        "1\n{roll}\n{name}\n{}\n{}\n{}\n",
        marks[0], marks[1], marks[2]
    )
}

/// Input lines that look a student up through the menu
pub fn show_student_script(roll: i32) -> String {
    format!("2\n{roll}\n")
}

/// Outcome of a scripted session
pub struct ScriptOutcome {
    pub output: String,
    pub stored: usize,
    pub rolls: Vec<i32>,
    /// Whether `Session::run` returned `Ok`
    pub completed: bool,
}

/// Runs a whole session against the given input with colors disabled
pub fn run_script(script: &str, capacity: usize) -> ScriptOutcome {
    let outcome = run_script_bytes(script.as_bytes(), capacity);
    assert!(outcome.completed, "scripted session runs to completion");
    outcome
}

/// Runs a whole session against raw input bytes, which need not be UTF-8
pub fn run_script_bytes(script: &[u8], capacity: usize) -> ScriptOutcome {
    let settings = SessionSettings::default()
        .with_color(false)
        .with_capacity(capacity);

    let mut out = Vec::new();
    let (completed, stored, rolls) = {
        let mut session = Session::new(script, &mut out, &settings);
        let completed = session.run().is_ok();
        let registry = session.registry();
        (
            completed,
            registry.len(),
            registry.iter().map(|r| r.roll_number()).collect(),
        )
    };

    ScriptOutcome {
        output: String::from_utf8_lossy(&out).into_owned(),
        stored,
        rolls,
        completed,
    }
}
