//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::{MockIo, TestHandlers};
use yang_shell::{Outcome, Shell};

/// Shell type used by the integration tests.
pub type TestShell = Shell<MockIo, TestHandlers>;

// ============================================================================
// Shell Creation Helpers
// ============================================================================

/// Create a shell over the fixture schema and data, in normal mode.
pub fn create_test_shell() -> TestShell {
    Shell::new(fixtures::handlers(), MockIo::new())
}

/// Create a shell already in configuration mode.
pub fn create_config_shell() -> TestShell {
    let mut shell = create_test_shell();
    assert!(shell.execute_line("configure").success);
    shell
}

// ============================================================================
// Execution Helpers
// ============================================================================

/// Execute a line that must succeed and return its output.
pub fn execute_ok(shell: &mut TestShell, line: &str) -> String {
    let outcome = shell.execute_line(line);
    assert!(
        outcome.success,
        "'{}' should succeed, got: {}",
        line, outcome.output
    );
    outcome.output
}

/// Execute a line that must fail and return its output.
pub fn execute_err(shell: &mut TestShell, line: &str) -> Outcome {
    let outcome = shell.execute_line(line);
    assert!(!outcome.success, "'{}' should fail", line);
    outcome
}

/// Completion words for the text left of the cursor.
pub fn complete(shell: &TestShell, line: &str) -> Vec<String> {
    shell
        .completer()
        .complete_line(line)
        .1
        .into_iter()
        .map(|s| s.word)
        .collect()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert output contains every expected fragment.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for fragment in expected {
        assert!(
            output.contains(fragment),
            "Output should contain '{}', got: {}",
            fragment,
            output
        );
    }
}

/// Assert output contains none of the fragments.
pub fn assert_contains_none(output: &str, unexpected: &[&str]) {
    for fragment in unexpected {
        assert!(
            !output.contains(fragment),
            "Output should not contain '{}', got: {}",
            fragment,
            output
        );
    }
}
