mod common;
use common::*;

#[test]
fn test_rejected_lines_printed() {
    let dir = log_dir(&[(
        "app.log",
        "[2025-08-12T10:00:00] [INFO] - ok
garbage line
[2025-08-12T25:00:00] [INFO] - bad hour
[2025-08-12T10:00:02] [FATAL] - unknown level

",
    )]);
    let (stdout, stderr, exit_code) = run_logsift_on(dir.path(), &[]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total entries collected: 1"));
    assert!(stderr.contains("app.log:2: line does not match expected log format: \"garbage line\""));
    assert!(stderr.contains("app.log:3: could not parse timestamp: \"2025-08-12T25:00:00\""));
    assert!(stderr.contains("app.log:4: invalid log level found: \"FATAL\""));
    assert!(!stderr.contains("blank line"));
}

#[test]
fn test_errors_summary_mode() {
    let garbage: String = (0..5).map(|i| format!("garbage {}\n", i)).collect();
    let dir = log_dir(&[("app.log", &garbage)]);
    let (_stdout, stderr, exit_code) = run_logsift_on(dir.path(), &["--errors", "summary"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("Diagnostics summary:"));
    assert!(stderr.contains("malformed_format: 5"));
    assert_eq!(stderr.matches("e.g.").count(), 3);
}

#[test]
fn test_errors_off_mode() {
    let dir = log_dir(&[("app.log", "garbage\n")]);
    let (stdout, stderr, exit_code) = run_logsift_on(dir.path(), &["--errors", "off"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total entries collected: 0"));
    assert!(!stderr.contains("garbage"));
}

#[test]
fn test_unreadable_file_does_not_abort_run() {
    let dir = log_dir(&[("good.log", "[2025-08-12T10:00:00] [ERROR] - still here\n")]);
    // gzip magic followed by junk fails while reading
    write_file(dir.path(), "broken.log", &[0x1F, 0x8B, 0x08, 0x00, 0xFF, 0xFF, 0xFF]);

    let (stdout, stderr, exit_code) = run_logsift_on(dir.path(), &["--stats"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[ERROR] - still here"));
    assert!(stderr.contains("broken.log after line 0:"));
    assert!(stderr.contains("1 failed"));
}

#[test]
fn test_zip_archive_reported() {
    let dir = log_dir(&[("bundle.zip", "PK")]);
    let file = dir.path().join("bundle.zip");

    let (stdout, stderr, exit_code) = run_logsift(&[file.to_str().unwrap()]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Total entries collected: 0"));
    assert!(stderr.contains("ZIP archives are not supported"));
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let dir = log_dir(&[]);
    write_file(
        dir.path(),
        "app.log",
        b"[2025-08-12T10:00:00] [ERROR] - bad \xFF byte\n",
    );

    let (stdout, _stderr, exit_code) = run_logsift_on(dir.path(), &[]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[ERROR] - bad \u{FFFD} byte"));
}
