// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, Utc};
use chronomerge_core::{LogEntry, LogSink, SinkSummary};
use chronomerge_error::{MergeError, Result};
use std::time::Instant;

/// A sink that records every entry it receives while enforcing the same
/// ordering contract as the console printer.
///
/// Doubles as the strict-order validator from the testable properties:
/// feeding a merge's output through it never fails if the merge is
/// correct.
pub struct CollectingSink {
    entries: Vec<LogEntry>,
    last: DateTime<Utc>,
    started: Option<Instant>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last: DateTime::UNIX_EPOCH,
            started: None,
        }
    }

    /// Entries received so far, in print order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Consume the sink, returning the recorded entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for CollectingSink {
    fn print(&mut self, entry: LogEntry) -> Result<()> {
        if entry.timestamp == DateTime::<Utc>::MAX_UTC {
            return Err(MergeError::invalid_timestamp(entry.timestamp));
        }
        if entry.timestamp < self.last {
            return Err(MergeError::order_violation(entry.timestamp, self.last));
        }

        self.last = entry.timestamp;
        if self.entries.is_empty() {
            self.started = Some(Instant::now());
        }
        self.entries.push(entry);
        Ok(())
    }

    fn done(&mut self) -> SinkSummary {
        SinkSummary {
            entries_printed: self.entries.len() as u64,
            elapsed: self.started.map(|at| at.elapsed()).unwrap_or_default(),
        }
    }
}
