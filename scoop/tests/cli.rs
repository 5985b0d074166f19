use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use pretty_assertions::assert_eq;

const SCOOP: &str = env!("CARGO_BIN_EXE_scoop");
const GENERATE_AST: &str = env!("CARGO_BIN_EXE_generate_ast");

/// Logging would interleave with diagnostics on stderr.
fn command(bin: &str) -> Command {
    let mut command = Command::new(bin);
    command.env_remove("RUST_LOG");
    command
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scoop-cli-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_script(name: &str, source: &str) -> Output {
    let dir = scratch_dir(name);
    let path = dir.join("script.scoop");
    std::fs::write(&path, source).unwrap();
    let output = command(SCOOP).arg(&path).output().unwrap();
    std::fs::remove_dir_all(&dir).unwrap();
    output
}

fn run_prompt(input: &str) -> Output {
    let mut child = command(SCOOP)
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

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn too_many_arguments_prints_usage() {
    let output = command(SCOOP).args(["a.scoop", "b.scoop"]).output().unwrap();
    assert_eq!(output.status.code(), Some(64));
    assert!(text(&output.stdout).contains("Usage: scoop [script]"));
}

#[test]
fn clean_script_prints_tokens() {
    let output = run_script("clean", "print 1;\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(text(&output.stdout), "Print print\nNumber 1 1\nSemicolon ;\nEof \n");
    assert_eq!(text(&output.stderr), "");
}

#[test]
fn script_with_scan_errors_exits_65() {
    let output = run_script("errors", "print 1;\nprint @;\n");
    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        text(&output.stderr),
        "[line 2] Error: Unexpected character '@'.\n"
    );
    // the scan still finishes
    assert!(text(&output.stdout).ends_with("Semicolon ;\nEof \n"));
}

#[test]
fn unreadable_script_exits_66() {
    let dir = scratch_dir("missing");
    let output = command(SCOOP)
        .arg(dir.join("does-not-exist.scoop"))
        .output()
        .unwrap();
    std::fs::remove_dir_all(&dir).unwrap();
    assert_eq!(output.status.code(), Some(66));
    assert!(text(&output.stderr).starts_with("failed to read"));
}

#[test]
fn prompt_forgets_errors_after_each_line() {
    let output = run_prompt("print @;\nprint 1;\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        text(&output.stderr),
        "[line 1] Error: Unexpected character '@'.\n"
    );
    let stdout = text(&output.stdout);
    assert!(stdout.contains("Number 1 1\n"));
    assert_eq!(stdout.matches("Eof \n").count(), 2);
    assert_eq!(stdout.matches("> ").count(), 3);
}

#[test]
fn prompt_reports_each_line_as_line_one() {
    let output = run_prompt("1\n\"open\n");
    assert_eq!(
        text(&output.stderr),
        "[line 1] Error: Unterminated string.\n"
    );
}

#[test]
fn generate_ast_without_directory_prints_usage() {
    let output = command(GENERATE_AST).output().unwrap();
    assert_eq!(output.status.code(), Some(64));
    assert!(text(&output.stderr).contains("Usage: generate_ast <output directory>"));

    let output = command(GENERATE_AST).args(["a", "b"]).output().unwrap();
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn generate_ast_writes_expr_module() {
    let dir = scratch_dir("generate");
    let output = command(GENERATE_AST).arg(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let written = std::fs::read_to_string(dir.join("expr.rs")).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();
    assert!(written.contains("pub trait Visitor<R> {"));
    assert!(include_str!("../src/expr.rs").starts_with(&written));
}
