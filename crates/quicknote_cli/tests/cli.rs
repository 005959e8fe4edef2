#![allow(deprecated)]

use predicates::prelude::*;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn cmd(temp: &TempDir) -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("quicknote").unwrap();
    c.env("QUICKNOTE_DB_PATH", temp.path().join("notes.sqlite3"))
        .env("QUICKNOTE_UTC_OFFSET", "0")
        .env_remove("QUICKNOTE_LOG_DIR")
        .env_remove("QUICKNOTE_LOG_LEVEL");
    c
}

fn add(temp: &TempDir, title: &str, tag: &str, content: &str) -> String {
    let out = cmd(temp)
        .args(["add", "--title", title, "--tag", tag, "--content", content])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out)
        .unwrap()
        .trim()
        .strip_prefix("Added note ")
        .expect("add should print the new id")
        .to_string()
}

fn list(temp: &TempDir, extra: &[&str]) -> String {
    let out = cmd(temp)
        .arg("list")
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn empty_list_shows_hint() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet. Add one first."));
}

#[test]
fn add_then_list_renders_tag_and_multiline_content() {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "Groceries", "home", "milk\\neggs");

    let out = list(&temp, &[]);
    assert!(out.contains(&format!("Groceries  ({id})")));
    assert!(out.contains("#home\n    milk\n    eggs\n"));
    assert!(out.contains("UTC+00:00"));
}

#[test]
fn blank_title_is_refused_without_creating() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["add", "--title", "   ", "--content", "hello"])
        .assert()
        .success()
        .stderr(predicate::str::contains("must not be empty"));

    assert!(list(&temp, &[]).contains("No notes yet."));
}

#[test]
fn search_filters_and_sort_orders() {
    let temp = TempDir::new().unwrap();
    let first = add(&temp, "Meeting", "", "room 4");
    thread::sleep(Duration::from_millis(5));
    add(&temp, "Groceries", "", "milk");
    thread::sleep(Duration::from_millis(5));
    let third = add(&temp, "Meeting prep", "", "slides");

    let newest = list(&temp, &["--search", "MEET"]);
    assert!(!newest.contains("Groceries"));
    let pos_first = newest.find(&first).unwrap();
    let pos_third = newest.find(&third).unwrap();
    assert!(pos_third < pos_first);

    let oldest = list(&temp, &["-s", "meet", "--sort", "oldest-first"]);
    assert!(oldest.find(&first).unwrap() < oldest.find(&third).unwrap());
}

#[test]
fn delete_removes_note_and_reports_missing_ids() {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "Doomed", "", "bye");

    cmd(&temp)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted {id}")));
    cmd(&temp)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn edit_reads_answers_from_stdin() {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "Draft", "old", "first body");

    cmd(&temp)
        .args(["edit", &id])
        .write_stdin("Final\n\nline one\\nline two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated {id}")));

    let out = list(&temp, &[]);
    assert!(out.contains(&format!("Final  ({id})")));
    assert!(out.contains("#old\n    line one\n    line two\n"));
}

#[test]
fn edit_cancelled_by_end_of_input_keeps_note() {
    let temp = TempDir::new().unwrap();
    let id = add(&temp, "Keep", "", "body");

    cmd(&temp)
        .args(["edit", &id])
        .write_stdin("Changed\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit cancelled."));

    assert!(list(&temp, &[]).contains(&format!("Keep  ({id})")));
}

#[test]
fn edit_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .args(["edit", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("note not found: missing"));
}

#[test]
fn clear_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    add(&temp, "One", "", "a");
    add(&temp, "Two", "", "b");

    cmd(&temp)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."));
    assert!(list(&temp, &[]).contains("One"));

    cmd(&temp)
        .arg("clear")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 note(s)."));
    assert!(list(&temp, &[]).contains("No notes yet."));

    cmd(&temp)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes to delete."));
}

#[test]
fn path_prints_configured_database() {
    let temp = TempDir::new().unwrap();
    cmd(&temp)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.sqlite3"));
}
