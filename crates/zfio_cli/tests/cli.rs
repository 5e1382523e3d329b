//! End-to-end tests for the `zf` binary.

use std::io::Write;
use std::process::{Command, Stdio};
use zfio::ZfStream;
use zfio_testkit::{printable_bytes, ScratchDir};

fn zf() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zf"))
}

fn write_file(path: &str, data: &[u8]) {
    let mut out = ZfStream::open(path, "w").unwrap();
    assert_eq!(out.write(data), data.len());
    out.close().unwrap();
}

#[test]
fn cat_decodes_to_stdout() {
    let dir = ScratchDir::new();
    let data = printable_bytes(200_000, 11);
    let path = dir.path_str("sample.gz");
    write_file(&path, &data);

    let output = zf().args(["cat", &path]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout == data);
}

#[test]
fn cat_concatenates_mixed_formats() {
    let dir = ScratchDir::new();
    let gz = dir.path_str("a.gz");
    let bz = dir.path_str("b.bz2");
    let plain = dir.path_str("c.txt");
    write_file(&gz, b"one\n");
    write_file(&bz, b"two\n");
    write_file(&plain, b"three\n");

    let output = zf().args(["cat", &gz, &bz, &plain]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"one\ntwo\nthree\n");
}

#[test]
fn cat_reads_stdin_with_format() {
    let dir = ScratchDir::new();
    let path = dir.path_str("piped.bz2");
    write_file(&path, b"from a pipe\n");
    let compressed = dir.read_raw("piped.bz2");

    let mut child = zf()
        .args(["cat", "--format", "bz2", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&compressed).unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout, b"from a pipe\n");
}

#[test]
fn cat_missing_file_fails() {
    let dir = ScratchDir::new();
    let output = zf()
        .args(["cat", &dir.path_str("absent.gz")])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn convert_gzip_to_bzip2() {
    let dir = ScratchDir::new();
    let data = printable_bytes(100_000, 12);
    let src = dir.path_str("in.gz");
    let dst = dir.path_str("out.bz2");
    write_file(&src, &data);

    let status = zf().args(["convert", &src, &dst]).status().unwrap();
    assert!(status.success());
    assert_eq!(&dir.read_raw("out.bz2")[..3], b"BZh");

    let mut input = ZfStream::open(&dst, "r").unwrap();
    let mut back = vec![0u8; data.len()];
    assert_eq!(input.read(&mut back), data.len());
    assert!(back == data);
}

#[test]
fn convert_with_format_flag() {
    let dir = ScratchDir::new();
    let src = dir.path_str("plain.txt");
    let dst = dir.path_str("packed");
    write_file(&src, b"packed without a suffix\n");

    let status = zf()
        .args(["convert", &src, &dst, "--format", "gz", "--level", "9"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(&dir.read_raw("packed")[..2], &[0x1f, 0x8b]);
}

#[test]
fn convert_to_unsupported_format_fails() {
    let dir = ScratchDir::new();
    let src = dir.path_str("plain.txt");
    write_file(&src, b"data");

    let output = zf()
        .args(["convert", &src, &dir.path_str("out.xz")])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.join("out.xz").exists());
}

#[test]
fn info_json_reports_backend() {
    let output = zf()
        .args(["info", "reads.fq", "--mode", "w.bz2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["backend"], "bzip2");
    assert_eq!(info["effective_mode"], "w");
    assert_eq!(info["available"], true);
    assert_eq!(info["target"], "file");
}

#[test]
fn info_json_unsupported_suffix() {
    let output = zf()
        .args(["info", "archive.xz", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["backend"], "unsupported");
    assert_eq!(info["suffix"], ".xz");
    assert_eq!(info["available"], false);
}

#[test]
fn info_text_for_stdout() {
    let output = zf().args(["info", "-", "--mode", "w"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Backend:        raw"));
    assert!(text.contains("Target:         stdout"));
}

#[test]
fn version_prints_both_versions() {
    let output = zf().arg("version").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("zf CLI v"));
    assert!(text.contains("zfio v"));
}
