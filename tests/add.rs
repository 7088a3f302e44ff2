use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("phonebook-{}-{}", tag, uuid::Uuid::new_v4()))
}

fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("STORAGE_DIR", dir).env("STORAGE_CHOICE", "json");
    cmd
}

#[test]
fn adding_contacts() {
    let dir = scratch_dir("add");

    phonebook(&dir)
        .args(["add", "--name", "Alice", "--number", "08031234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Alice added!"));

    // Confirm newly added contact exist
    phonebook(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("08031234567"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn duplicate_name_is_rejected_with_a_warning() {
    let dir = scratch_dir("dup-name");

    phonebook(&dir)
        .args(["add", "--name", "Alice", "--number", "08031234567"])
        .assert()
        .success();

    // Same name, different number: nothing is added, exit stays clean.
    phonebook(&dir)
        .args(["add", "--name", "Alice", "--number", "111222333"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact Alice already exist!"));

    phonebook(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("08031234567"))
        .stdout(predicate::str::contains("111222333").not());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn duplicate_number_is_rejected_with_a_warning() {
    let dir = scratch_dir("dup-number");

    phonebook(&dir)
        .args(["add", "--name", "Alice", "--number", "08031234567"])
        .assert()
        .success();

    phonebook(&dir)
        .args(["add", "--name", "Bob", "--number", "08031234567"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Number 08031234567 is already in base!",
        ));

    phonebook(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob").not());

    let _ = std::fs::remove_dir_all(&dir);
}
