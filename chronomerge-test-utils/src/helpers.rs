// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, TimeZone, Utc};
use chronomerge_core::LogEntry;
use futures::Stream;
use futures::stream::StreamExt;
use std::time::Duration;
use tokio::time::sleep;

/// Fixed reference instant for fixture timestamps.
#[must_use]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// Build an entry `secs` seconds after [`base_time`].
#[must_use]
pub fn entry_at(secs: i64, message: &str) -> LogEntry {
    LogEntry::new(base_time() + chrono::Duration::seconds(secs), message)
}

/// Assert that the stream emits nothing within the given window.
///
/// Used for the stall scenario: a withheld entry must stay withheld, so a
/// bounded wait is the best observable approximation of "indefinitely".
pub async fn assert_no_entry_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("unexpected entry emitted, expected the gate to hold");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}
