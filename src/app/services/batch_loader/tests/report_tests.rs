//! Tests for load report statistics

use crate::app::models::Assignment;
use crate::app::services::batch_loader::{LineError, LoadReport};
use chrono::NaiveDate;

fn sample_assignment() -> Assignment {
    Assignment::new(
        "Ivanov",
        "Intro",
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    )
}

#[test]
fn test_empty_report() {
    let report = LoadReport::new();
    assert!(report.is_clean());
    assert_eq!(report.success_rate(), 0.0);
    assert_eq!(report.lines_seen, 0);
}

#[test]
fn test_success_rate() {
    let mut report = LoadReport::new();
    report.lines_seen = 4;
    report.added.push(sample_assignment());
    report.added.push(sample_assignment());
    report.added.push(sample_assignment());
    report.errors.push(LineError {
        line: 2,
        message: "decode error: expected 5 fields, got 1".to_string(),
    });

    assert_eq!(report.success_rate(), 75.0);
    assert!(!report.is_clean());
}

#[test]
fn test_fully_successful_report() {
    let mut report = LoadReport::new();
    report.lines_seen = 2;
    report.added.push(sample_assignment());
    report.added.push(sample_assignment());

    assert_eq!(report.success_rate(), 100.0);
    assert!(report.is_clean());
}
