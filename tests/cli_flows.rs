//! End-to-end flows through the tdl binary against a temp backing file.

use std::path::Path;

use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

fn tdl(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tdl").expect("binary");
    cmd.args(["--file", file.to_str().unwrap()]);
    cmd
}

fn state_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join(".tdl.json")
}

#[test]
fn add_assigns_ids_after_the_seeds() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--add", "walk dog"])
        .assert()
        .success()
        .stdout(contains("Created Task: 3"));

    tdl(&file)
        .args(["--add", "water plants", "--priority", "2"])
        .assert()
        .success()
        .stdout(contains("Created Task: 4"));
}

#[test]
fn add_and_list_in_one_invocation() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--add", "walk dog", "--due", "07/04/2026", "--list"])
        .assert()
        .success()
        .stdout(contains("Created Task: 3"))
        .stdout(contains("ID  Age  Due Date"))
        .stdout(contains("07/04/2026"))
        .stdout(contains("walk dog"));
}

#[test]
fn done_hides_task_from_list_but_not_report() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file).args(["--add", "finish tdl"]).assert().success();

    tdl(&file)
        .args(["--done", "3"])
        .assert()
        .success()
        .stdout(contains("Completed Task: 3"));

    tdl(&file)
        .arg("--list")
        .assert()
        .success()
        .stdout(contains("finish tdl").not());

    tdl(&file)
        .arg("--report")
        .assert()
        .success()
        .stdout(contains("Completed"))
        .stdout(contains("finish tdl"));
}

#[test]
fn done_on_unknown_or_completed_id_is_silent() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--done", "99"])
        .assert()
        .success()
        .stdout(contains("Completed Task").not());

    tdl(&file).args(["--done", "1"]).assert().success();
    tdl(&file)
        .args(["--done", "1"])
        .assert()
        .success()
        .stdout(contains("Completed Task").not());
}

#[test]
fn delete_confirms_once_then_goes_silent() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--delete", "2"])
        .assert()
        .success()
        .stdout(contains("Deleted Task: 2"));

    tdl(&file)
        .args(["--delete", "2"])
        .assert()
        .success()
        .stdout(contains("Deleted Task").not());
}

#[test]
fn deleted_ids_are_never_reassigned() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file).args(["--add", "short lived"]).assert().success();
    tdl(&file).args(["--delete", "3"]).assert().success();

    tdl(&file)
        .args(["--add", "next task"])
        .assert()
        .success()
        .stdout(contains("Created Task: 4"));
}

#[test]
fn query_finds_substring_matches_in_open_tasks() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file).args(["--add", "Mask"]).assert().success();
    tdl(&file).args(["--add", "Basket"]).assert().success();
    tdl(&file).args(["--add", "Task A"]).assert().success();

    tdl(&file)
        .args(["--query", "ask"])
        .assert()
        .success()
        .stdout(contains("Mask"))
        .stdout(contains("Basket"))
        .stdout(contains("Task A").not());

    tdl(&file)
        .args(["--query", "no-such-term"])
        .assert()
        .success()
        .stdout(contains("ID  Age  Due Date"));
}

#[test]
fn empty_name_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--add", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("task name must not be empty"));
}

#[test]
fn out_of_range_priority_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--add", "x", "--priority", "5"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("priority must be 1, 2, or 3"));
}

#[test]
fn malformed_due_date_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--add", "x", "--due", "04/31/2026"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("MM/DD/YYYY"));
}

#[test]
fn corrupt_task_file_fails_without_overwriting_it() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);
    std::fs::write(&file, "garbage").unwrap();

    tdl(&file)
        .arg("--list")
        .assert()
        .failure()
        .code(4)
        .stderr(contains("corrupt"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "garbage");
}

#[test]
fn state_survives_across_invocations() {
    let dir = TempDir::new().unwrap();
    let file = state_file(&dir);

    tdl(&file)
        .args(["--add", "persistent", "--due", "12/25/2026"])
        .assert()
        .success();

    tdl(&file)
        .arg("--list")
        .assert()
        .success()
        .stdout(contains("persistent"))
        .stdout(contains("12/25/2026"));
}
