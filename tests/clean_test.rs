//! Integration tests for `buildwatch clean`
//!
//! Clean is fire-and-forget: it never fails the command on a tool failure
//! and never triggers the hot-reload sequence.

mod common;

use common::{run_buildwatch, TestProject};

fn setup_project(clean_snippet: &str) -> TestProject {
    let project = TestProject::new();
    project.write_config("exit 0", clean_snippet);
    project.create_descriptor();
    project
}

#[test]
fn test_clean_succeeds() {
    let project = setup_project("exit 0");

    let output = run_buildwatch(&project, &["clean"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "clean should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Clean finished"), "stdout: {stdout}");
}

#[test]
fn test_clean_failure_is_discarded() {
    let project = setup_project("exit 1");

    let output = run_buildwatch(&project, &["clean"]);

    assert!(
        output.status.success(),
        "a failed clean is a warning, not a command failure"
    );
}

#[test]
fn test_clean_never_triggers_reload() {
    // The descriptor exists and no stamp does, so a build would reload;
    // clean must not, regardless of its success
    let project = setup_project("exit 0");

    let output = run_buildwatch(&project, &["clean"]);

    assert!(output.status.success());
    assert!(
        !project.file_exists("loaded.stamp"),
        "clean must never reach the hot-reload coordinator"
    );
}

#[test]
fn test_clean_skips_without_descriptor() {
    let project = TestProject::new();
    project.write_config("exit 0", "exit 0");

    let output = run_buildwatch(&project, &["clean"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Nothing to clean"), "stdout: {stdout}");
}

#[test]
fn test_clean_fails_without_config() {
    let project = TestProject::new();

    let output = run_buildwatch(&project, &["clean"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("buildwatch.toml"), "stderr: {stderr}");
}
