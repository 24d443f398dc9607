// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{DateTime, Utc};
use chronomerge_core::{LogEntry, LogSink, SinkSummary};
use chronomerge_error::{MergeError, Result};
use std::time::Instant;
use tracing::debug;

/// A sink that renders entries to stdout and accumulates throughput
/// statistics.
///
/// Enforces the sink contract: an entry older than the previously printed
/// one is rejected with an `OrderViolation`, and the reserved sentinel
/// timestamp (`DateTime::<Utc>::MAX_UTC`) is rejected as invalid. The
/// throughput timer starts on the first successful print.
pub struct ConsolePrinter {
    last: DateTime<Utc>,
    printed: u64,
    started: Option<Instant>,
}

impl ConsolePrinter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: DateTime::UNIX_EPOCH,
            printed: 0,
            started: None,
        }
    }

    /// Timestamp of the most recently printed entry.
    #[must_use]
    pub const fn last_printed(&self) -> DateTime<Utc> {
        self.last
    }

    /// Number of entries printed so far.
    #[must_use]
    pub const fn entries_printed(&self) -> u64 {
        self.printed
    }
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsolePrinter {
    fn print(&mut self, entry: LogEntry) -> Result<()> {
        if entry.timestamp == DateTime::<Utc>::MAX_UTC {
            return Err(MergeError::invalid_timestamp(entry.timestamp));
        }
        if entry.timestamp < self.last {
            return Err(MergeError::order_violation(entry.timestamp, self.last));
        }

        println!("{entry}");

        self.last = entry.timestamp;
        self.printed += 1;
        if self.printed == 1 {
            self.started = Some(Instant::now());
        }
        Ok(())
    }

    fn done(&mut self) -> SinkSummary {
        let summary = SinkSummary {
            entries_printed: self.printed,
            elapsed: self.started.map(|at| at.elapsed()).unwrap_or_default(),
        };

        println!("\n***********************************");
        println!("Entries printed:\t{}", summary.entries_printed);
        println!("Time taken (s):\t\t{:.3}", summary.elapsed.as_secs_f64());
        println!("Entries/s:\t\t{:.0}", summary.throughput());
        println!("***********************************\n");

        debug!(entries = summary.entries_printed, "printer done");
        summary
    }
}
