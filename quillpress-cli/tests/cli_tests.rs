//! Integration tests for the Quillpress CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use tempfile::TempDir;

/// Write a manifest (and chapter files) into a temp dir
fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn sample_manifest() -> String {
    serde_json::json!({
        "title": "My Book",
        "author": "Jane Doe",
        "metadata": { "description": "A tale." },
        "chapters": [
            { "title": "Chapter 1", "body": "# Hi" },
            { "title": "Chapter 2", "file": "chapter2.md" }
        ]
    })
    .to_string()
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("preview"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quillpress"));
}

#[test]
fn test_build_produces_readable_epub() {
    let dir = TempDir::new().unwrap();
    let manifest = write_file(&dir, "book.json", &sample_manifest());
    write_file(&dir, "chapter2.md", "Second chapter body.");
    let output = dir.path().join("out.epub");

    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.args([
        "build",
        manifest.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Generated 'My Book'"));

    // Read the archive back: mimetype first, chapters present
    let file = fs::File::open(&output).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert_eq!(archive.by_index(0).unwrap().name(), "mimetype");

    let mut chapter = String::new();
    archive
        .by_name("OEBPS/chapter_2.xhtml")
        .unwrap()
        .read_to_string(&mut chapter)
        .unwrap();
    assert!(chapter.contains("Second chapter body."));
}

#[test]
fn test_build_default_output_name_from_title() {
    let dir = TempDir::new().unwrap();
    let manifest = write_file(&dir, "book.json", &sample_manifest());
    write_file(&dir, "chapter2.md", "Second chapter body.");

    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.current_dir(dir.path())
        .args(["build", manifest.to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("my_book.epub").exists());
}

#[test]
fn test_build_missing_manifest_fails() {
    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.args(["build", "no-such-manifest.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read manifest"));
}

#[test]
fn test_build_rejects_empty_author() {
    let dir = TempDir::new().unwrap();
    let manifest = write_file(
        &dir,
        "book.json",
        &serde_json::json!({
            "title": "My Book",
            "author": "",
            "chapters": [{ "title": "Chapter 1", "body": "text" }]
        })
        .to_string(),
    );

    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.current_dir(dir.path())
        .args(["build", manifest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author"));
}

#[test]
fn test_build_rejects_empty_chapters() {
    let dir = TempDir::new().unwrap();
    let manifest = write_file(
        &dir,
        "book.json",
        &serde_json::json!({
            "title": "My Book",
            "author": "Jane Doe",
            "chapters": [{ "title": "Chapter 1" }]
        })
        .to_string(),
    );

    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.current_dir(dir.path())
        .args(["build", manifest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "add some content to at least one chapter",
        ));
}

#[test]
fn test_preview_renders_html_fragment() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "chapter.md", "# Title\n\nSome **bold** text.");

    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.args(["preview", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Title</h1>"))
        .stdout(predicate::str::contains("<strong>bold</strong>"));
}

#[test]
fn test_preview_missing_input_fails() {
    let mut cmd = Command::cargo_bin("quillpress-cli").unwrap();
    cmd.args(["preview", "missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}
