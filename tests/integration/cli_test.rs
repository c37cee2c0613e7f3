use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn taskdeck() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("taskdeck-cli").unwrap()
}

#[test]
fn add_creates_the_task_file() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Task added successfully!"))
        .stdout(predicates::str::contains("ID: 1, Title: \"Buy milk\""));

    assert!(dir.path().join("tasks.json").exists());
}

#[test]
fn add_respects_file_flag() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("elsewhere.json");
    taskdeck()
        .args(["add", "Buy milk", "2%", "--file"])
        .arg(&file)
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(file.exists());
    assert!(!dir.path().join("tasks.json").exists());
}

#[test]
fn add_rejects_empty_title() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "", "desc"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("title and a description"));
}

#[test]
fn add_duplicate_pending_title_fails() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["add", "BUY MILK", "whole"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
}

#[test]
fn list_without_file_fails() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no task currently in memory"));
}

#[test]
fn list_shows_tasks() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();
    taskdeck()
        .args(["add", "Walk dog", "evening"])
        .current_dir(dir.path())
        .assert()
        .success();

    let output = taskdeck()
        .arg("list")
        .current_dir(dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("=== Your Tasks ==="));
    assert!(stdout.contains("[1] Buy milk (Pending)"));
    assert!(stdout.contains("[2] Walk dog (Pending)"));
    assert!(stdout.contains("Description: 2%"));
    assert!(stdout.contains("Created:"));
}

#[test]
fn list_singular_header_for_one_task() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("=== Your Task ==="));
}

#[test]
fn list_json_output() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    let output = taskdeck()
        .args(["list", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let tasks: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["id"], 1);
    assert_eq!(tasks[0]["title"], "Buy milk");
    assert_eq!(tasks[0]["completed"], false);
    assert!(tasks[0]["createdAt"].is_string());
}

#[test]
fn complete_marks_task() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["complete", "1"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Task \"Buy milk\" marked as complete",
        ));

    taskdeck()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("[1] Buy milk (Completed)"));
}

#[test]
fn complete_rejects_non_numeric_id() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["complete", "abc"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("id must be a number"));
}

#[test]
fn complete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["complete", "42"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no task with the id 42"));
}

#[test]
fn delete_single_task() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["delete", "1"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Task \"Buy milk\" deleted successfully",
        ));
}

#[test]
fn delete_all_confirmed_with_y() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["delete", "all"])
        .current_dir(dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("All tasks deleted successfully"));

    taskdeck()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("no tasks found"));
}

#[test]
fn delete_all_defaults_to_yes_on_empty_answer() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["delete", "all"])
        .current_dir(dir.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("All tasks deleted successfully"));
}

#[test]
fn delete_all_cancelled_with_n() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["delete", "all"])
        .current_dir(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Deletion cancelled"));

    // Task survived the cancelled deletion
    taskdeck()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("[1] Buy milk"));
}

#[test]
fn delete_all_rejects_unknown_answer() {
    let dir = TempDir::new().unwrap();
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success();

    taskdeck()
        .args(["delete", "all"])
        .current_dir(dir.path())
        .write_stdin("maybe\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown answer"));
}

#[test]
fn full_lifecycle_scenario() {
    let dir = TempDir::new().unwrap();

    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("ID: 1"));
    taskdeck()
        .args(["add", "Walk dog", "evening"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("ID: 2"));

    taskdeck()
        .args(["complete", "1"])
        .current_dir(dir.path())
        .assert()
        .success();
    taskdeck()
        .args(["delete", "2"])
        .current_dir(dir.path())
        .assert()
        .success();

    // "Buy milk" is completed, not pending, so the title is free again and
    // the new task takes the next id after the remaining maximum.
    taskdeck()
        .args(["add", "Buy milk", "2%"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("ID: 2"));
}
