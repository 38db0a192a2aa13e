// Binary tests — run the built `colornote` executable end to end.
#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn colornote(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_colornote"))
        .args(args)
        .env_remove("COLORNOTE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn colornote");
    // The child may exit without reading stdin (help, argument items).
    let _ = child.stdin.take().expect("stdin").write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait for colornote")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn pipe_plain_text() {
    let out = colornote(&[], "a\nb\n");
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "<html><head><meta http-equiv=\"Content-Type\" content=\"text/html;charset=UTF-8\"/>\
         <title>Untitled Note</title></head><body><p dir=\"ltr\">a<br>\nb</p>\n</body></html>"
    );
    assert!(out.stderr.is_empty());
}

#[test]
fn pipe_checklist_with_title() {
    let out = colornote(&["-l", "-t", "Music List"], "song.mp3\n");
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.contains("<title>Music List</title>"));
    assert!(html.contains("[ ] song.mp3<br>\n</p>"));
}

#[test]
fn positional_items_skip_stdin() {
    let out = colornote(&["--list", "x", "y"], "ignored\n");
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.contains("[ ] x<br>\n[ ] y<br>\n"));
    assert!(!html.contains("ignored"));
}

#[test]
fn strip_from_stdin() {
    let rendered = colornote(&["-l"], "milk\neggs\n");
    let out = colornote(&["-s", "-l"], &stdout(&rendered));
    assert!(out.status.success());
    assert_eq!(stdout(&out), "milk\neggs\n");
}

#[test]
fn file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("list.txt");
    let output = dir.path().join("list.html");
    fs::write(&input, "bread\nbutter\n").unwrap();

    let out = colornote(
        &[
            "--list",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--title=Shopping",
        ],
        "",
    );
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Shopping</title>"));
    assert!(html.contains("[ ] bread<br>\n[ ] butter<br>\n"));
}

#[test]
fn missing_input_fails_without_touching_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("out.html");

    let out = colornote(
        &["-o", output.to_str().unwrap(), "-i", input.to_str().unwrap()],
        "",
    );
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("for reading"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("nope").join("out.html");

    let out = colornote(&["-o", output.to_str().unwrap()], "text\n");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("for writing"), "stderr: {stderr}");
}

#[test]
fn help_exits_zero() {
    let out = colornote(&["--help"], "");
    assert!(out.status.success());
    let help = stdout(&out);
    assert!(help.contains("--strip"));
    assert!(help.contains("Examples:"));
}

#[test]
fn version_exits_zero() {
    let out = colornote(&["--version"], "");
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("colornote, version "));
}

#[test]
fn unknown_flag_fails() {
    let out = colornote(&["--frobnicate"], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}
