//! Integration tests for arbor


use std::fs::File;
use std::time::{Duration, SystemTime};

use arbor::test_utils::TestDir;
use harness::run_arbor;

#[test]
fn test_sample_fixture_layout() {
    let dir = TestDir::sample();
    assert!(dir.path().join("test_data/dir1/dir3/pqr.txt").exists());
    assert!(dir.path().join("test_data/dir2").is_dir());
}

#[test]
fn test_runs_on_sample() {
    let dir = TestDir::sample();
    let (_stdout, _stderr, success) = run_arbor(dir.path(), &["test_data"]);
    assert!(success);
}

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["test_data"]);
    assert!(success, "arbor should succeed");
    assert_eq!(
        stdout,
        "test_data\n\
         │──abc.txt\n\
         │──dir1\n\
         │  │──dir3\n\
         │  │  └──pqr.txt\n\
         │  └──dir4\n\
         └──dir2\n\
         4 directories 2 files\n"
    );
}

#[test]
fn test_dirs_only() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-d", "test_data"]);
    assert!(success);
    assert!(!stdout.contains("abc.txt"), "should not show files: {}", stdout);
    assert!(!stdout.contains("pqr.txt"), "should not show files: {}", stdout);
    assert!(stdout.ends_with("\n4 directories\n"), "{}", stdout);
}

#[test]
fn test_depth_limit() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-l", "1", "test_data"]);
    assert!(success);
    assert_eq!(
        stdout,
        "test_data\n│──abc.txt\n│──dir1\n└──dir2\n2 directories 1 files\n"
    );
}

#[test]
fn test_relative_paths() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-f", "test_data"]);
    assert!(success);
    assert!(stdout.starts_with("test_data\n│──test_data/abc.txt\n"), "{}", stdout);
    assert!(
        stdout.contains("│  │  └──test_data/dir1/dir3/pqr.txt\n"),
        "{}",
        stdout
    );
}

#[test]
#[cfg(unix)]
fn test_permissions() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = TestDir::new();
    let file = dir.add_file("root/run.sh", "#!/bin/sh");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o754)).unwrap();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-p", "root"]);
    assert!(success);
    assert!(stdout.contains("└──[-rwxr-xr--] run.sh\n"), "{}", stdout);
}

#[test]
fn test_sort_by_modification_time() {
    let dir = TestDir::new();
    let now = SystemTime::now();
    for (name, age_secs) in [("a.txt", 10), ("b.txt", 300), ("c.txt", 60)] {
        let path = dir.add_file(&format!("root/{}", name), name);
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(now - Duration::from_secs(age_secs))
            .unwrap();
    }

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-t", "root"]);
    assert!(success);
    assert_eq!(
        stdout,
        "root\n│──b.txt\n│──c.txt\n└──a.txt\n0 directories 3 files\n"
    );
}

#[test]
fn test_no_indentation() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-i", "test_data"]);
    assert!(success);
    assert_eq!(
        stdout,
        "test_data\nabc.txt\ndir1\ndir3\npqr.txt\ndir4\ndir2\n4 directories 2 files\n"
    );
}

#[test]
fn test_json_output() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-j", "test_data"]);
    assert!(success);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed[0]["type"], "directory");
    assert_eq!(parsed[0]["name"], "test_data");
    assert_eq!(parsed[0]["children"][1]["children"][0]["name"], "dir3");
    assert_eq!(parsed[1]["type"], "report");
    assert_eq!(parsed[1]["directories"], 4);
    assert_eq!(parsed[1]["files"], 2);
}

#[test]
fn test_xml_output() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["-x", "-d", "test_data"]);
    assert!(success);
    assert!(stdout.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<tree>\n"));
    assert!(stdout.contains("      <directory name=\"dir3\">\n      </directory>\n"));
    assert!(!stdout.contains("<files>"));
    assert!(stdout.ends_with("    <directories>4</directories>\n  </report>\n</tree>\n"));
}

#[test]
fn test_file_as_root() {
    let dir = TestDir::sample();

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["test_data/abc.txt"]);
    assert!(success);
    assert_eq!(stdout, "abc.txt\n0 directories 0 files\n");
}

#[test]
fn test_empty_directory_root() {
    let dir = TestDir::new();
    dir.add_dir("empty");

    let (stdout, _stderr, success) = run_arbor(dir.path(), &["empty"]);
    assert!(success);
    assert_eq!(stdout, "empty\n0 directories 0 files\n");
}
