use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn stdin_batch() {
    let exe = env!("CARGO_BIN_EXE_xorseq");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"2\n0 5\n6 6\n")
        .unwrap();
    let output = child.wait_with_output().expect("wait failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "7\n7\n");
}

#[test]
fn file_input() {
    let exe = env!("CARGO_BIN_EXE_xorseq");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.txt");
    fs::write(&input, "1\n3 9\n").unwrap();

    let output = Command::new(exe)
        .arg(input.to_str().unwrap())
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "11\n");
}

#[test]
fn json_output() {
    let exe = env!("CARGO_BIN_EXE_xorseq");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.txt");
    fs::write(&input, "1\n3 9\n").unwrap();

    let output = Command::new(exe)
        .args([input.to_str().unwrap(), "--json"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid JSON output");
    assert_eq!(parsed[0]["start"], 3);
    assert_eq!(parsed[0]["end"], 9);
    assert_eq!(parsed[0]["xor"], 11);
}

#[test]
fn malformed_input_fails() {
    let exe = env!("CARGO_BIN_EXE_xorseq");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"2\n3 9\n")
        .unwrap();
    let output = child.wait_with_output().expect("wait failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unexpected EOF"), "stderr: {stderr}");
}
