//! Custom assertion helpers for common test patterns
//!
//! This module provides custom assertion functions that make session tests
//! more expressive and reduce boilerplate code.

/// Asserts that the output contains every expected line fragment
pub fn assert_output_contains(output: &str, expected: &[&str]) {
    for msg in expected {
        assert!(
            output.contains(msg),
            "Expected output to contain '{msg}', but got:\n{output}"
        );
    }
}

/// Asserts that a fragment appears exactly `count` times
pub fn assert_occurrences(output: &str, fragment: &str, count: usize) {
    let found = output.matches(fragment).count();
    assert_eq!(
        found, count,
        "Expected '{fragment}' {count} time(s), found {found} in:\n{output}"
    );
}

/// Asserts that the session ended by releasing its input
pub fn assert_terminated(output: &str) {
    assert!(
        output.ends_with("Input closed. Program terminated.\n"),
        "Expected output to end with the termination line, but got:\n{output}"
    );
}
