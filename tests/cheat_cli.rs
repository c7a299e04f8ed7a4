// Copyright (C) 2020-2026 Andy Kurnia.

use std::process::Command;

fn cheat(lexicon: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cheat"))
        .arg("--lexicon")
        .arg(lexicon)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn prints_answers_longest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "cat\ncats\nat\ndog\nact\n").unwrap();
    let output = cheat(&path, &["C", "a", "t", "s"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cats\ncat\nact\nat\n");
}

#[test]
fn no_letters_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "cat\n").unwrap();
    let output = cheat(&path, &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn json_lexicon_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordsapi_sample.json");
    std::fs::write(
        &path,
        r#"{"tab": {"definitions": []}, "bat": {}, "at": {"definitions": []}}"#,
    )
    .unwrap();
    let output = cheat(&path, &["--json", "b", "a", "t"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[{\"word\":\"tab\",\"length\":3},{\"word\":\"at\",\"length\":2}]\n"
    );
}

#[test]
fn missing_lexicon_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = cheat(&dir.path().join("missing.txt"), &["a"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read lexicon"));
}

#[test]
fn letters_outside_the_words_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "cat\nat\n").unwrap();
    let output = cheat(&path, &["--alphabet", "open", "c", "a", "t", "s"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cat\nat\n");
    let output = cheat(&path, &["--alphabet", "english", "c", "7", "a", "t"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cat\nat\n");
}

#[test]
fn default_alphabet_keeps_accented_words() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "café\ncafe\nnaïve\n").unwrap();
    let output = cheat(&path, &["É", "f", "a", "c"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "café\n");
    let output = cheat(&path, &["--alphabet", "english", "e", "f", "a", "c"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "cafe\n");
}

#[test]
fn closed_stdout_is_not_an_error() {
    use std::process::Stdio;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, "a\naa\naaa\n").unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_cheat"))
        .arg("--lexicon")
        .arg(&path)
        .args(["a", "a", "a"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Broken pipe"));
}
