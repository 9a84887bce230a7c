use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_text-slides"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn run_command_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_text-slides"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("Missing stdin")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

#[test]
fn test_split_command_lists_slides() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("talk.txt");
    fs::write(&input_path, "A\n\n==SLIDE BREAK==\nB\nC").expect("Failed to write input");

    let output = run_command(&["split", "-i", input_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  1. A"));
    assert!(stdout.contains("  2. B C"));
}

#[test]
fn test_split_command_reads_stdin() {
    let output = run_command_with_stdin(&["split", "-i", "-"], "one\n\n\ntwo");
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  1. one"));
    assert!(stdout.contains("  2. two"));
}

#[test]
fn test_insert_break_command_edits_in_place() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("hello.txt");
    fs::write(&input_path, "Hello World").expect("Failed to write input");

    let output = run_command(&[
        "insert-break",
        "-i",
        input_path.to_str().unwrap(),
        "--cursor",
        "5",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let text = fs::read_to_string(&input_path).expect("Failed to read output");
    assert_eq!(text, "Hello\n==SLIDE BREAK==\n World");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cursor: 22"));
}

#[test]
fn test_present_command_clamps_navigation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("talk.txt");
    fs::write(&input_path, "first\n\nsecond\n\nthird").expect("Failed to write input");

    let output = run_command_with_stdin(
        &["present", "-i", input_path.to_str().unwrap()],
        "right\nright\nright\nleft\nesc\nright\n",
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[1/3]"));
    assert!(stdout.contains("[3/3]"));
    assert!(!stdout.contains("[4/3]"));
    // Last shown position before escape is the second slide
    assert!(stdout.trim_end().ends_with("[2/3]"));
}

#[test]
fn test_present_command_empty_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("empty.txt");
    fs::write(&input_path, "\n\n").expect("Failed to write input");

    let output = run_command_with_stdin(&["present", "-i", input_path.to_str().unwrap()], "");
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("Please add some text and split it into slides first."));
}

#[test]
fn test_export_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("talk.txt");
    fs::write(&input_path, "one\n\ntwo").expect("Failed to write input");
    let output_path = temp_dir.path().join("talk.pptx");

    let output = run_command(&[
        "export",
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--title",
        "Test Presentation",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "PPTX file was not created");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Exported 2 slides"));
}

#[test]
fn test_export_command_rejects_empty_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("empty.txt");
    fs::write(&input_path, "   ").expect("Failed to write input");
    let output_path = temp_dir.path().join("empty.pptx");

    let output = run_command(&[
        "export",
        "-i",
        input_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Please add some text and split it into slides first."));
    assert!(!output_path.exists());
}
