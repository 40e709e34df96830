//! Integration tests for saving generated batches.

use std::fs;

use chrono::{Local, TimeZone};
use tempfile::TempDir;

use passgen::history::{append_batch, resolve_path};
use passgen::pass::{GenerationConfig, generate};

#[test]
fn test_generated_batches_accumulate() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("passwords.txt");

    let first = generate(&GenerationConfig::new(16, 3)).unwrap();
    let second = generate(&GenerationConfig::new(8, 2)).unwrap();

    let at = Local.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap();
    append_batch(&path, first.passwords(), &at).unwrap();
    append_batch(&path, second.passwords(), &at).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let blocks: Vec<&str> = content.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), 2);

    let lines: Vec<&str> = blocks[0].lines().collect();
    assert_eq!(lines[0], "--- Passwords generated on 2026-10-17 14:30:00 ---");
    assert_eq!(&lines[1..], first.passwords());

    let lines: Vec<&str> = blocks[1].lines().collect();
    assert_eq!(&lines[1..], second.passwords());
}

#[test]
fn test_resolved_directory_path_is_created() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let raw = format!("{}/keys/", dir.path().display());
    let path = resolve_path(&raw);

    let batch = generate(&GenerationConfig::default()).unwrap();
    append_batch(&path, batch.passwords(), &Local::now()).unwrap();

    assert!(dir.path().join("keys").join("passwords.txt").is_file());
}
