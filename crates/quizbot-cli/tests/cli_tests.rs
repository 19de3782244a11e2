//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `quizbot` command isolated from any config on the host.
fn quizbot(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizbot").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("QUIZBOT_QUESTIONS")
        .env_remove("QUIZBOT_SCORE_LOG")
        .env_remove("QUIZBOT_SEED")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn validate_sample_bank() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("validate")
        .arg("--questions")
        .arg("../../question-banks/general.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("9 questions, 2 open-ended"))
        .stdout(predicate::str::contains("Question bank valid"));
}

#[test]
fn validate_toml_bank() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("validate")
        .arg("--questions")
        .arg("../../question-banks/science.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions, 0 open-ended"));
}

#[test]
fn validate_reports_bad_record_position() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.json");
    std::fs::write(
        &path,
        r#"[{"category": "A", "question": "ok"}, {"category": "A", "question": "x", "difficulty": "impossible"}]"#,
    )
    .unwrap();

    quizbot(&home)
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("item #2"))
        .stderr(predicate::str::contains("impossible"));
}

#[test]
fn validate_rejects_non_array_document() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("object.json");
    std::fs::write(&path, r#"{"category": "A", "question": "Q"}"#).unwrap();

    quizbot(&home)
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected an array"));
}

#[test]
fn validate_prints_warnings() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("dupes.json");
    std::fs::write(
        &path,
        r#"[{"category": "A", "question": "Same?"}, {"category": "A", "question": "same"}]"#,
    )
    .unwrap();

    quizbot(&home)
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[#2] WARNING: duplicate"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("validate")
        .arg("--questions")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_uses_config_questions_path() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("quizbot.toml"),
        "questions = \"bank.json\"\n",
    )
    .unwrap();
    std::fs::write(
        home.path().join("bank.json"),
        r#"[{"category": "A", "question": "Q", "answer": "a"}]"#,
    )
    .unwrap();

    quizbot(&home)
        .current_dir(home.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("bank.json (1 questions, 0 open-ended)"));
}

#[test]
fn facets_lists_categories_and_counts() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("facets")
        .arg("--questions")
        .arg("../../question-banks/general.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories: CS, Geography, Math, Trivia"))
        .stdout(predicate::str::contains("Difficulties: easy, medium, hard"))
        .stdout(predicate::str::contains("Auto-graded"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizbot(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizbot.toml"))
        .stdout(predicate::str::contains("Created questions.json"));

    assert!(dir.path().join("quizbot.toml").exists());
    assert!(dir.path().join("questions.json").exists());

    // The starter files are immediately usable.
    quizbot(&dir)
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question bank valid"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizbot(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizbot(&dir)
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("validate")
        .arg("--config")
        .arg("no_such_config.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Console trivia quiz"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    quizbot(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizbot"));
}
