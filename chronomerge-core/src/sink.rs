// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::LogEntry;
use chronomerge_error::Result;
use std::fmt;
use std::time::Duration;

/// A consumer of log entries in non-decreasing timestamp order.
///
/// The sink is the merge's correctness oracle at runtime: it rejects any
/// entry older than the previously printed one, so a merge strategy that
/// breaks global order fails loudly instead of producing silently
/// misordered output.
pub trait LogSink {
    /// Consume one entry.
    ///
    /// # Errors
    /// Returns [`OrderViolation`](chronomerge_error::MergeError::OrderViolation)
    /// if the entry's timestamp is strictly less than the previously printed
    /// one, or [`InvalidTimestamp`](chronomerge_error::MergeError::InvalidTimestamp)
    /// if the timestamp is not a renderable instant. The first successful
    /// print starts the throughput timer.
    fn print(&mut self, entry: LogEntry) -> Result<()>;

    /// Signal completion and report throughput statistics.
    fn done(&mut self) -> SinkSummary;
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn print(&mut self, entry: LogEntry) -> Result<()> {
        (**self).print(entry)
    }

    fn done(&mut self) -> SinkSummary {
        (**self).done()
    }
}

/// Throughput statistics reported by a sink on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkSummary {
    /// Number of entries successfully printed
    pub entries_printed: u64,
    /// Time between the first successful print and `done()`;
    /// `Duration::ZERO` when nothing was printed
    pub elapsed: Duration,
}

impl SinkSummary {
    /// Entries printed per second. Defined as `0.0` when the elapsed time
    /// is zero (e.g. an empty merge), so the zero-source boundary never
    /// divides by zero.
    #[must_use]
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.entries_printed as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for SinkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {:.3}s ({:.0} entries/s)",
            self.entries_printed,
            self.elapsed.as_secs_f64(),
            self.throughput()
        )
    }
}
