mod common;
use common::*;

use std::collections::HashMap;

fn sorted_lines(stdout: &str) -> Vec<String> {
    let mut lines: Vec<String> = stdout.lines().map(str::to_string).collect();
    lines.sort();
    lines
}

#[test]
fn test_thread_count_does_not_change_report() {
    let files: Vec<(String, String)> = (0..6)
        .map(|i| (format!("part{}.log", i), generated_lines(&format!("p{}", i), 200)))
        .collect();
    let refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(name, content)| (name.as_str(), content.as_str()))
        .collect();
    let dir = log_dir(&refs);

    let (single, _, code_single) = run_logsift_on(dir.path(), &["-j", "1", "--file-order", "name"]);
    let (multi, _, code_multi) = run_logsift_on(dir.path(), &["-j", "4", "--file-order", "name"]);

    assert_eq!(code_single, 0);
    assert_eq!(code_multi, 0);
    assert!(single.contains("Total entries collected: 1200"));
    assert_eq!(sorted_lines(&single), sorted_lines(&multi));
}

#[test]
fn test_name_order_is_stable_across_thread_counts() {
    let dir = log_dir(&[
        ("b.log", "[2025-08-12T10:00:05] [ERROR] - from b\n"),
        ("a.log", "[2025-08-12T10:00:09] [ERROR] - from a\n"),
        ("c.log", "[2025-08-12T10:00:01] [ERROR] - from c\n"),
    ]);

    for threads in ["1", "3"] {
        let (stdout, _, exit_code) =
            run_logsift_on(dir.path(), &["-j", threads, "--file-order", "name"]);
        assert_eq!(exit_code, 0);

        let a = stdout.find("from a").unwrap();
        let b = stdout.find("from b").unwrap();
        let c = stdout.find("from c").unwrap();
        assert!(a < b && b < c, "unexpected order with {} threads", threads);
    }
}

#[test]
fn test_within_file_order_preserved() {
    let content: String = (0..50)
        .map(|i| format!("[2025-08-12T10:00:{:02}] [ERROR] - step {}\n", i, i))
        .collect();
    let dir = log_dir(&[("seq.log", &content), ("other.log", &generated_lines("o", 100))]);

    let (stdout, _, exit_code) = run_logsift_on(dir.path(), &["-j", "2"]);
    assert_eq!(exit_code, 0);

    let positions: Vec<usize> = (0..50)
        .map(|i| stdout.find(&format!("- step {}\n", i)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_json_counts_match_across_thread_counts() {
    let dir = log_dir(&[
        ("a.log", &generated_lines("a", 37)),
        ("b.log", &generated_lines("b", 41)),
    ]);

    let counts = |threads: &str| -> HashMap<String, u64> {
        let (stdout, _, exit_code) = run_logsift_on(dir.path(), &["-F", "json", "-j", threads]);
        assert_eq!(exit_code, 0);
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        value["counts"]
            .as_object()
            .unwrap()
            .iter()
            .map(|(level, count)| (level.clone(), count.as_u64().unwrap()))
            .collect()
    };

    let single = counts("1");
    assert_eq!(single.values().sum::<u64>(), 78);
    assert_eq!(single, counts("8"));
}
