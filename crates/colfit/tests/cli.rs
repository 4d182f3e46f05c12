//! End-to-end tests of the `colfit` binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn expected(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

fn colfit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_colfit"))
        .args(args)
        .output()
        .unwrap()
}

fn colfit_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_colfit"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn filters_and_refits_a_file() {
    let df = fixture("df.txt");
    let out = colfit(&[
        "-x",
        "1,start,/dev/loop",
        "-x",
        "1,tmpfs",
        df.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), expected("df_no_pseudo.expected"));
    assert!(out.stderr.is_empty());
}

#[test]
fn reads_stdin_when_no_path_is_given() {
    let out = colfit_stdin(&["-x", "1,start,/dev/loop", "-x", "1,tmpfs"], &expected("df.txt"));
    assert!(out.status.success());
    assert_eq!(stdout(&out), expected("df_no_pseudo.expected"));
}

#[test]
fn dash_reads_stdin() {
    let out = colfit_stdin(&["-"], &expected("df.txt"));
    assert!(out.status.success());
    assert_eq!(stdout(&out), expected("df_all.expected"));
}

#[test]
fn zero_based_rules() {
    let df = fixture("df.txt");
    let out = colfit(&[
        "--zero-based",
        "-x",
        "0,prefix,/dev/loop",
        "-x",
        "0,tmpfs",
        df.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), expected("df_no_pseudo.expected"));
}

#[test]
fn inert_flags_do_not_change_output() {
    let df = fixture("df.txt");
    let out = colfit(&["-i", "-s", "-x", "1,tmpfs", df.to_str().unwrap()]);
    let plain = colfit(&["-x", "1,tmpfs", df.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(out.stdout, plain.stdout);
}

#[test]
fn empty_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "").unwrap();

    let out = colfit(&[empty.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("malformed input"));
}

#[test]
fn short_row_fails_without_output() {
    let out = colfit_stdin(&[], "A B C\n1 2 3\n4 5\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("line 3"));
}

#[test]
fn invalid_rule_fails_without_output() {
    let df = fixture("df.txt");
    let out = colfit(&["-x", "1,sideways,tmpfs", df.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("sideways"));
}

#[test]
fn missing_file_fails() {
    let out = colfit(&["/nonexistent/colfit/input.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(stderr(&out).contains("reading /nonexistent/colfit/input.txt"));
}

#[test]
fn verbose_log_goes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("colfit.log");
    let df = fixture("df.txt");

    let out = colfit(&[
        "-v",
        "-l",
        log.to_str().unwrap(),
        "-x",
        "1,udev",
        df.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("excluding line 2"));
    assert!(logged.contains("calculated widths"));
}

#[test]
fn term_width_truncates_last_column() {
    let df = fixture("df.txt");
    let out = colfit(&["-w", "40", "-t", "-1", df.to_str().unwrap()]);
    assert!(out.status.success());
    for line in stdout(&out).lines() {
        assert!(line.chars().count() <= 40, "{line:?}");
    }
}

#[test]
fn conflicting_volume_flags_are_a_usage_error() {
    let out = colfit(&["-q", "-D"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
