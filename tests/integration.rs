//! Integration tests for vwalk


use assert_cmd::Command;
use harness::{TestTree, listed_paths, run_vwalk};
use predicates::prelude::*;

#[test]
fn test_basic_listing() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "fn main() {}");
    tree.add_file("lib.rs", "pub mod foo;");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &[]);
    assert!(success, "vwalk should succeed");
    assert_eq!(listed_paths(&stdout), vec!["lib.rs", "main.rs"]);
}

#[test]
fn test_non_recursive_excludes_subdirectories() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "top");
    tree.add_file("sub/inner.txt", "inner");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &[]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec!["top.txt"]);
}

#[test]
fn test_recursive_includes_subdirectories() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "top");
    tree.add_file("sub/inner.txt", "inner");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["-r"]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec!["top.txt", "sub/inner.txt"]);
}

#[test]
fn test_version_sorted_output() {
    let tree = TestTree::new();
    tree.add_file("img10.png", "");
    tree.add_file("img2.png", "");
    tree.add_file("img1.png", "");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        listed_paths(&stdout),
        vec!["img1.png", "img2.png", "img10.png"]
    );
}

#[test]
fn test_depth_first_literal_sequence() {
    let tree = TestTree::new();
    tree.add_file("A/a.txt", "a");
    tree.add_file("B/b.txt", "b");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["-r"]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec!["B/b.txt", "A/a.txt"]);
}

#[test]
fn test_hidden_files_skipped_without_all() {
    let tree = TestTree::new();
    tree.add_file(".hidden", "h");
    tree.add_file("a.txt", "a");
    tree.add_file("b.txt", "b");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &[]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec!["a.txt", "b.txt"]);

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["-a"]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec![".hidden", "a.txt", "b.txt"]);
}

#[test]
fn test_size_column() {
    let tree = TestTree::new();
    tree.add_file("data.bin", "12345");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["-s"]);
    assert!(success);
    assert_eq!(stdout, "5B\t./data.bin\n");
}

#[test]
fn test_json_output_parses() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "aaa");
    tree.add_file("b.txt", "b");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["--json", "-s"]);
    assert!(success);

    let records: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let records = records.as_array().expect("JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["path"], "./a.txt");
    assert_eq!(records[0]["size_bytes"], 3);
    assert_eq!(records[0]["size_human"], "3B");
}

#[test]
fn test_json_without_size_omits_size_fields() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "aaa");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["--json"]);
    assert!(success);

    let records: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(records[0].get("size_bytes").is_none());
    assert!(records[0].get("size_human").is_none());
}

#[test]
fn test_multiple_roots() {
    let tree = TestTree::new();
    tree.add_file("one/a.txt", "a");
    tree.add_file("two/b.txt", "b");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["one", "two"]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec!["one/a.txt", "two/b.txt"]);
}

#[test]
fn test_explicit_path_with_trailing_slash() {
    let tree = TestTree::new();
    tree.add_file("dir/a.txt", "a");

    let (stdout, _stderr, success) = run_vwalk(tree.path(), &["dir/"]);
    assert!(success);
    assert_eq!(listed_paths(&stdout), vec!["dir/a.txt"]);
}

#[test]
fn test_empty_path_argument_fails() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "a");

    let (_stdout, stderr, success) = run_vwalk(tree.path(), &[""]);
    assert!(!success, "empty path should fail");
    assert!(stderr.contains("empty"), "stderr should explain: {}", stderr);
}

#[test]
fn test_missing_root_warns_but_exits_zero() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_vwalk(tree.path(), &["nonexistent"]);
    assert!(success, "missing root is a non-fatal diagnostic");
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("nonexistent"),
        "stderr should name the root: {}",
        stderr
    );
}

#[test]
fn test_quiet_suppresses_warnings() {
    let tree = TestTree::new();

    let (_stdout, stderr, success) = run_vwalk(tree.path(), &["-q", "nonexistent"]);
    assert!(success);
    assert!(stderr.is_empty(), "quiet should silence warnings: {}", stderr);
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("vwalk")
        .expect("binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vwalk"));
}

#[test]
fn test_help_mentions_options() {
    Command::cargo_bin("vwalk")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--recursive"))
        .stdout(predicate::str::contains("--json"));
}
