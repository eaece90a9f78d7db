use std::io::Write;
use std::process::{Command, Stdio};

fn requal(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fastq-requal"))
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
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn converts_stdin_to_stdout() {
    let out = requal(&["--P33in", "--P64out"], "@read1\nACGT\n+read1\n!#$%\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"@read1\nACGT\n+read1\n@BCD\n");
}

#[test]
fn solexa_to_phred33() {
    let out = requal(&["--P64SOLin", "--P33out", "-"], "@s\nACG\n+\n;Jh\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"@s\nACG\n+\n\"+I\n");
}

#[test]
fn no_input_flag_passes_through() {
    let out = requal(&["--P64out"], "@r\nA\n+\nB\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"@r\nA\n+\nB\n");
}

#[test]
fn bad_symbol_fails() {
    let out = requal(&["--P33in", "--P64out"], "@r\nA\n+\n~\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("record 1"));
}

#[test]
fn output_flag_is_required() {
    let out = requal(&["--P33in"], "");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn conflicting_input_flags_rejected() {
    let out = requal(&["--P33in", "--P64in", "--P33out"], "");
    assert_eq!(out.status.code(), Some(2));
}
