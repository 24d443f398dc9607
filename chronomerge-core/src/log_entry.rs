// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::HasTimestamp;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// One timestamped log record with a message payload.
///
/// Immutable once produced. Ordering compares timestamps only, so entries
/// with equal timestamps are treated as interchangeable by the merge
/// strategies (the sink requires non-decreasing order, not strict order).
/// Equality compares both fields.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    /// Creates a new log entry.
    pub fn new(timestamp: DateTime<Utc>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

impl HasTimestamp for LogEntry {
    type Timestamp = DateTime<Utc>;

    fn timestamp(&self) -> Self::Timestamp {
        self.timestamp
    }
}

impl PartialEq for LogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp && self.message == other.message
    }
}

impl Eq for LogEntry {}

impl PartialOrd for LogEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp, self.message)
    }
}
