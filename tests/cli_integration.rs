use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const ITEM: &str = r#"{"id":"1","email":"a@b.com","age":30}"#;

fn recordbox(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recordbox").unwrap();
    cmd.env_remove("RECORDBOX_FILE")
        .env_remove("RECORDBOX_LOG")
        .arg("-fileName")
        .arg(file);
    cmd
}

#[test]
fn test_full_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    // Fresh file lists as an empty sequence
    recordbox(&file)
        .args(["-operation", "list"])
        .assert()
        .success()
        .stdout("[]");

    recordbox(&file)
        .args(["-operation", "add", "-item", ITEM])
        .assert()
        .success()
        .stdout("");

    recordbox(&file)
        .args(["-operation", "findById", "-id", "1"])
        .assert()
        .success()
        .stdout(ITEM);

    // Duplicate is reported on stdout, not as a failure
    recordbox(&file)
        .args(["-operation", "add", "-item", ITEM])
        .assert()
        .success()
        .stdout("Item with id 1 already exists");

    let on_disk = std::fs::read_to_string(&file).unwrap();
    assert_eq!(on_disk, format!("[{}]", ITEM));

    recordbox(&file)
        .args(["-operation", "remove", "-id", "1"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "[]");

    recordbox(&file)
        .args(["-operation", "remove", "-id", "1"])
        .assert()
        .success()
        .stdout("Item with id 1 not found");
}

#[test]
fn test_list_is_verbatim() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    recordbox(&file)
        .args(["-operation", "add", "-item", ITEM])
        .assert()
        .success();
    recordbox(&file)
        .args([
            "-operation",
            "add",
            "-item",
            r#"{"id":"2","email":"c@d.org","age":41}"#,
        ])
        .assert()
        .success();

    recordbox(&file)
        .args(["-operation", "list"])
        .assert()
        .success()
        .stdout(format!(
            r#"[{},{{"id":"2","email":"c@d.org","age":41}}]"#,
            ITEM
        ));
}

#[test]
fn test_find_missing_prints_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    recordbox(&file)
        .args(["-operation", "findById", "-id", "42"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_double_dash_flags_work_too() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    Command::cargo_bin("recordbox")
        .unwrap()
        .env_remove("RECORDBOX_FILE")
        .arg(format!("--fileName={}", file.display()))
        .args(["--operation", "add", "--item", ITEM])
        .assert()
        .success();

    recordbox(&file)
        .args(["--operation", "findById", "--id", "1"])
        .assert()
        .success()
        .stdout(ITEM);
}

#[test]
fn test_file_from_environment() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("env.json");

    Command::cargo_bin("recordbox")
        .unwrap()
        .env("RECORDBOX_FILE", &file)
        .args(["-operation", "list"])
        .assert()
        .success()
        .stdout("[]");
    assert!(file.exists());
}

#[test]
fn test_missing_file_name_fails() {
    Command::cargo_bin("recordbox")
        .unwrap()
        .env_remove("RECORDBOX_FILE")
        .args(["-operation", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("fileName must be specified"));
}

#[test]
fn test_usage_errors_fail() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    recordbox(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("operation must be specified"));

    recordbox(&file)
        .args(["-operation", "drop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Operation drop not allowed"));

    recordbox(&file)
        .args(["-operation", "remove"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("id must be specified"));

    recordbox(&file)
        .args(["-operation", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("item must be specified"));
}

#[test]
fn test_corrupt_store_fails_and_is_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");
    std::fs::write(&file, "not json at all").unwrap();

    recordbox(&file)
        .args(["-operation", "add", "-item", ITEM])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt store"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "not json at all");
}

#[test]
fn test_json_item_format_honours_keys() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    recordbox(&file)
        .args([
            "-operation",
            "add",
            "-itemFormat",
            "json",
            "-item",
            r#"{"age":30,"email":"a@b.com","id":"1"}"#,
        ])
        .assert()
        .success();

    recordbox(&file)
        .args(["-operation", "findById", "-id", "1"])
        .assert()
        .success()
        .stdout(ITEM);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    recordbox(&file)
        .args(["-v", "-operation", "add", "-item", ITEM])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("item added"));
}

#[test]
fn test_hyphen_leading_id_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");
    let item = r#"{"id":"-1","email":"neg@b.com","age":7}"#;

    recordbox(&file)
        .args(["-operation", "add", "-item", item])
        .assert()
        .success();

    recordbox(&file)
        .args(["-operation", "findById", "-id", "-1"])
        .assert()
        .success()
        .stdout(item);

    recordbox(&file)
        .args(["-operation", "remove", "-id", "-1"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "[]");
}

#[test]
fn test_flag_name_as_id_value() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("users.json");

    recordbox(&file)
        .args(["-operation", "findById", "-id", "-item"])
        .assert()
        .success()
        .stdout("");
}
