// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{TimeZone, Utc};
use chronomerge_error::MergeError;
use std::io;

#[test]
fn test_order_violation_display() {
    let newer = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 10).unwrap();
    let older = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 5).unwrap();

    let err = MergeError::order_violation(older, newer);
    let rendered = err.to_string();
    assert!(rendered.contains("older than last printed"));
    assert!(rendered.contains("2026-01-01 00:00:05"));
    assert!(rendered.contains("2026-01-01 00:00:10"));
}

#[test]
fn test_invalid_timestamp_display() {
    let err = MergeError::invalid_timestamp(chrono::DateTime::<Utc>::MAX_UTC);
    assert!(err.to_string().contains("is not a valid log timestamp"));
}

#[test]
fn test_source_failure_constructors() {
    let err = MergeError::source_failure("upstream closed");
    assert!(matches!(err, MergeError::SourceFailure { .. }));
    assert_eq!(err.to_string(), "log source failed: upstream closed");

    let err = MergeError::source_failure_from("read failed", io::Error::other("disk gone"));
    assert!(matches!(
        err,
        MergeError::SourceFailure {
            source: Some(_),
            ..
        }
    ));
}

#[test]
fn test_is_ordering_bug() {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    assert!(MergeError::order_violation(at, at).is_ordering_bug());
    assert!(MergeError::invalid_timestamp(at).is_ordering_bug());
    assert!(!MergeError::source_failure("test").is_ordering_bug());
}

#[test]
fn test_nothing_is_recoverable() {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    assert!(!MergeError::order_violation(at, at).is_recoverable());
    assert!(!MergeError::source_failure("test").is_recoverable());
}

#[test]
fn test_clone_folds_inner_error_into_context() {
    let err = MergeError::source_failure_from("read failed", io::Error::other("disk gone"));
    let cloned = err.clone();

    match cloned {
        MergeError::SourceFailure { context, source } => {
            assert!(context.contains("read failed"));
            assert!(context.contains("disk gone"));
            assert!(source.is_none());
        }
        other => panic!("expected SourceFailure, got {other:?}"),
    }
}
