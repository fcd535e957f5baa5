use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Write an input file and a predefined words file into a fresh temp dir
fn setup(input: &str, predefined: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = tempdir().unwrap();
    let input_path = temp.path().join("input.txt");
    let predefined_path = temp.path().join("predefined.txt");
    write_file(&input_path, input);
    write_file(&predefined_path, predefined);
    (temp, input_path, predefined_path)
}

fn wordtally_cmd(input: &Path, predefined: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wordtally").expect("Failed to find wordtally binary");
    cmd.env_remove("WORDTALLY_MAX_FILE_SIZE")
        .env_remove("WORDTALLY_MAX_WORD_COUNT")
        .env_remove("WORDTALLY_MAX_WORD_LENGTH")
        .env_remove("RUST_LOG")
        .arg("--input")
        .arg(input)
        .arg("--predefined")
        .arg(predefined);
    cmd
}

#[test]
fn prints_table_in_first_match_order() {
    let (_temp, input, predefined) = setup(
        "Detecting first names is tricky to do even with AI.\n\
         how do you say a street name is not a first name?\n",
        "Name\nDetect\nAI\n",
    );

    let expected = "Predefined word      Match count    \n\
                    AI                   1              \n\
                    Name                 2              \n";

    wordtally_cmd(&input, &predefined)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn hyphen_splits_and_underscore_joins() {
    let (_temp, input, predefined) = setup(
        "dash-dash\nunderscore_underscore\n",
        "Dash\nunderscore_underscore\n",
    );

    let assert = wordtally_cmd(&input, &predefined).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let rows: Vec<&str> = stdout.lines().skip(1).collect();

    assert_eq!(
        rows,
        vec![
            "Dash                 2              ",
            "underscore_underscore 1              ",
        ]
    );
}

#[test]
fn json_format_lists_rows() {
    let (_temp, input, predefined) = setup("ai AI Ai name", "AI\nName");

    let assert = wordtally_cmd(&input, &predefined)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let rows = value.as_array().expect("json array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["word"], "AI");
    assert_eq!(rows[0]["count"], 3);
    assert_eq!(rows[1]["word"], "Name");
    assert_eq!(rows[1]["count"], 1);
}

#[test]
fn jsonl_format_one_row_per_line() {
    let (_temp, input, predefined) = setup("beta alpha beta", "alpha\nbeta");

    let assert = wordtally_cmd(&input, &predefined)
        .arg("--format")
        .arg("jsonl")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let words: Vec<String> = stdout
        .lines()
        .map(|l| {
            let v: Value = serde_json::from_str(l).expect("valid jsonl line");
            v["word"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(words, vec!["beta", "alpha"]);
}

#[test]
fn no_match_fails_without_output() {
    let (_temp, input, predefined) = setup("nothing to see", "absent\n");

    wordtally_cmd(&input, &predefined)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No match was found"));
}

#[test]
fn empty_predefined_list_fails() {
    let (_temp, input, predefined) = setup("some words", "");

    wordtally_cmd(&input, &predefined)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Predefined words list is empty"));
}

#[test]
fn duplicate_predefined_word_fails() {
    let (_temp, input, predefined) = setup("detect", "Detect\ndetect\n");

    wordtally_cmd(&input, &predefined)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Predefined word has duplicate word detect",
        ));
}

#[test]
fn oversized_predefined_word_fails() {
    let long_word = "a".repeat(257);
    let (_temp, input, predefined) = setup("a", &long_word);

    wordtally_cmd(&input, &predefined)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is exceeding length of 256"));
}

#[test]
fn file_size_limit_from_flag() {
    let (_temp, input, predefined) = setup("name name name", "name");

    wordtally_cmd(&input, &predefined)
        .arg("--max-file-size")
        .arg("5")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("which exceeds 5"))
        .stderr(predicate::str::contains("input.txt"));
}

#[test]
fn word_count_limit_from_env() {
    let (_temp, input, predefined) = setup("one two three", "one\ntwo\nthree");

    wordtally_cmd(&input, &predefined)
        .env("WORDTALLY_MAX_WORD_COUNT", "2")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Predefined words list has size 3, which exceeds 2",
        ));
}

#[test]
fn missing_input_file_fails() {
    let temp = tempdir().unwrap();
    let predefined = temp.path().join("predefined.txt");
    write_file(&predefined, "name");

    wordtally_cmd(&temp.path().join("missing.txt"), &predefined)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn missing_required_argument_is_usage_error() {
    Command::cargo_bin("wordtally")
        .unwrap()
        .arg("--input")
        .arg("input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--predefined"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let (_temp, input, predefined) = setup("name", "name");

    wordtally_cmd(&input, &predefined)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(
            "Predefined word      Match count    \n\
             name                 1              \n",
        )
        .stderr(predicate::str::contains("predefined words"));
}
