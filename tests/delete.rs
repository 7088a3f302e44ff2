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
fn deleting_contacts() {
    let dir = scratch_dir("delete");

    // Attempt to delete non existing contact
    phonebook(&dir)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact Not found"));

    phonebook(&dir)
        .args(["add", "--name", "Patricia", "--number", "08066809241"])
        .assert()
        .success();

    phonebook(&dir)
        .args(["delete", "--name", "Patricia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Patricia deleted!"));

    phonebook(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn delete_survives_a_restart() {
    let dir = scratch_dir("delete-restart");

    phonebook(&dir)
        .args(["add", "--name", "Ann", "--number", "111222333"])
        .assert()
        .success();
    phonebook(&dir)
        .args(["add", "--name", "Bea", "--number", "444555666"])
        .assert()
        .success();

    phonebook(&dir)
        .args(["delete", "--name", "Ann"])
        .assert()
        .success();

    phonebook(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bea"))
        .stdout(predicate::str::contains("Ann").not());

    let _ = std::fs::remove_dir_all(&dir);
}
