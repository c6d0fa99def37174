use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const RAW_LOG: &str = "\
SubjectId,ItemId,Experiment,Condition,Index,mousePositionX,mousePositionY,wordPositionLeft,wordPositionTop,wordPositionRight,wordPositionBottom
alice,1,1,2,0,-12,5,,,,
,,,,1,10,5,100,50,160,70
";

fn readtrace() -> Command {
    Command::cargo_bin("readtrace").unwrap()
}

#[test]
fn divide_writes_participant_and_corrected_files() {
    let temp = tempdir().unwrap();
    let raw = temp.path().join("raw.csv");
    fs::write(&raw, RAW_LOG).unwrap();
    let divided = temp.path().join("divided");

    readtrace()
        .args(["--quiet", "divide", "--input"])
        .arg(&raw)
        .arg("--out-dir")
        .arg(&divided)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 participant files"));

    assert!(divided.join("reader_alice.csv").exists());
    assert!(temp
        .path()
        .join("corrected_divided")
        .join("reader_alice.csv")
        .exists());
}

#[test]
fn divide_without_identifier_column_fails() {
    let temp = tempdir().unwrap();
    let raw = temp.path().join("raw.csv");
    fs::write(&raw, "ItemId,Experiment\n1,1\n").unwrap();

    readtrace()
        .args(["--quiet", "divide", "--input"])
        .arg(&raw)
        .arg("--out-dir")
        .arg(temp.path().join("divided"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No participant identifier column"));
}

#[test]
fn trials_generates_word_lists() {
    let temp = tempdir().unwrap();
    let items = temp.path().join("items.json");
    fs::write(
        &items,
        r#"[{"ItemId": 3, "Experiment": 1, "Condition": 2, "Pages": ["one two\nthree"]}]"#,
    )
    .unwrap();
    let out = temp.path().join("trial_files");

    readtrace()
        .args(["--quiet", "trials", "--items"])
        .arg(&items)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 trial files (3 words)"));

    assert!(out.join("trial_item_3_page_0.tsv").exists());
}

#[test]
fn questions_requires_exactly_one_input() {
    readtrace()
        .args(["questions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
