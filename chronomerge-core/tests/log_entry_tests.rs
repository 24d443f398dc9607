// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{TimeZone, Utc};
use chronomerge_core::{HasTimestamp, LogEntry};

fn at(secs: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, secs).unwrap()
}

#[test]
fn test_ordering_compares_timestamps_only() {
    let early = LogEntry::new(at(1), "zzz");
    let late = LogEntry::new(at(2), "aaa");

    assert!(early < late);
    assert_eq!(
        LogEntry::new(at(1), "a").cmp(&LogEntry::new(at(1), "b")),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn test_equality_compares_both_fields() {
    assert_eq!(LogEntry::new(at(1), "a"), LogEntry::new(at(1), "a"));
    assert_ne!(LogEntry::new(at(1), "a"), LogEntry::new(at(1), "b"));
    assert_ne!(LogEntry::new(at(1), "a"), LogEntry::new(at(2), "a"));
}

#[test]
fn test_has_timestamp() {
    let entry = LogEntry::new(at(7), "checkpoint flushed");
    assert_eq!(entry.timestamp(), at(7));
}

#[test]
fn test_display_renders_timestamp_then_message() {
    let entry = LogEntry::new(at(0), "replica warmup");
    let rendered = entry.to_string();
    assert!(rendered.starts_with("2026-01-01 00:00:00 UTC"));
    assert!(rendered.ends_with("replica warmup"));
}
