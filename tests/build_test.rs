//! Integration tests for `buildwatch build` and `buildwatch rebuild`
//!
//! End-to-end through the binary: descriptor handling, force-rebuild flag
//! propagation, hot-reload stamp, build logs, and exit codes.

mod common;

use common::{run_buildwatch, TestProject};
use predicates::prelude::*;

fn setup_project(build_snippet: &str, clean_snippet: &str) -> TestProject {
    let project = TestProject::new();
    project.write_config(build_snippet, clean_snippet);
    project.create_descriptor();
    project
}

#[test]
fn test_build_succeeds() {
    let project = setup_project("exit 0", "exit 0");

    let output = run_buildwatch(&project, &["build"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "build should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        predicate::str::contains("build succeeded").eval(&stdout),
        "stdout: {stdout}"
    );
}

#[test]
fn test_successful_build_hard_reloads() {
    let project = setup_project("exit 0", "exit 0");

    let output = run_buildwatch(&project, &["build"]);

    assert!(output.status.success());
    // The stamp is only refreshed by a hard reload; the descriptor is newer
    // than the (missing) stamp, so the reload predicate fired
    assert!(
        project.file_exists("loaded.stamp"),
        "hard reload should have refreshed the stamp"
    );
}

#[test]
fn test_failed_build_exits_nonzero_without_reload() {
    let project = setup_project("exit 1", "exit 0");

    let output = run_buildwatch(&project, &["build"]);

    assert!(!output.status.success(), "failed build must exit non-zero");
    assert!(
        !project.file_exists("loaded.stamp"),
        "failed build must not trigger any reload"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        predicate::str::contains("failed").eval(&stderr),
        "stderr: {stderr}"
    );
}

#[test]
fn test_absent_descriptor_is_a_quiet_no_op() {
    let project = TestProject::new();
    project.write_config("exit 0", "exit 0");
    // No descriptor created

    let output = run_buildwatch(&project, &["build"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "a skip is not a failure");
    assert!(stdout.contains("Nothing to build"), "stdout: {stdout}");
    assert!(
        !project.file_exists("loaded.stamp"),
        "a skip must not trigger any reload"
    );
    assert!(
        !project.file_exists("logs/Debug.log"),
        "a skip must not invoke the build tool"
    );
}

#[test]
fn test_rebuild_passes_force_flag() {
    let project = setup_project("echo $@ > invoked_args.txt", "exit 0");

    let output = run_buildwatch(&project, &["rebuild"]);
    assert!(output.status.success());

    let args = project.read_file("invoked_args.txt");
    assert!(args.contains("--force"), "rebuild args: {args}");
}

#[test]
fn test_build_omits_force_flag() {
    let project = setup_project("echo $@ > invoked_args.txt", "exit 0");

    let output = run_buildwatch(&project, &["build"]);
    assert!(output.status.success());

    let args = project.read_file("invoked_args.txt");
    assert!(!args.contains("--force"), "build args: {args}");
}

#[test]
fn test_configuration_is_passed_verbatim() {
    let project = setup_project("echo $@ > invoked_args.txt", "exit 0");

    let output = run_buildwatch(&project, &["build"]);
    assert!(output.status.success());

    let args = project.read_file("invoked_args.txt");
    assert!(args.contains("-s Debug"), "build args: {args}");
}

#[test]
fn test_build_output_is_logged_per_configuration() {
    let project = setup_project("echo compiling main module", "exit 0");

    run_buildwatch(&project, &["build"]);
    run_buildwatch(&project, &["build"]);

    let log = project.read_file("logs/Debug.log");
    assert_eq!(
        log.matches("compiling main module").count(),
        2,
        "log should be appended, not truncated"
    );
}

#[test]
fn test_json_output() {
    let project = setup_project("exit 0", "exit 0");

    let output = run_buildwatch(&project, &["--json", "build"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("expected a JSON line");
    let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
    assert_eq!(value["action"], "build");
    assert_eq!(value["outcome"], "success");
}

#[test]
fn test_build_fails_without_config() {
    let project = TestProject::new();

    let output = run_buildwatch(&project, &["build"]);

    assert!(!output.status.success(), "missing config must be loud");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("buildwatch.toml"), "stderr: {stderr}");
}

#[test]
fn test_unrecognized_action_is_rejected() {
    let project = setup_project("exit 0", "exit 0");

    let output = run_buildwatch(&project, &["deploy"]);

    assert!(
        !output.status.success(),
        "unknown actions must fail loudly, never no-op"
    );
}
