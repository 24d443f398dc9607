// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use chronomerge_core::{AsyncLogSource, LogEntry, LogSource};
use chronomerge_error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const BUZZWORDS_A: &[&str] = &[
    "proactive", "synchronised", "distributed", "adaptive", "resilient", "ephemeral",
    "monotonic", "quantized", "streamlined", "federated", "idempotent",
];

const BUZZWORDS_B: &[&str] = &[
    "bandwidth", "throughput", "frontier", "pipeline", "watermark", "checkpoint",
    "partition", "heartbeat", "payload", "replica", "backlog",
];

const BUZZWORDS_C: &[&str] = &[
    "migration", "rollout", "compaction", "handshake", "rebalance", "drain",
    "flush", "snapshot", "failover", "warmup", "audit",
];

/// A log source that fabricates pseudo-random entries on demand.
///
/// Starts 40 to 60 days in the past; every pop advances the timestamp by a
/// random 0–10 hours plus 0–60 seconds and fabricates a new message. The
/// source drains once its next timestamp would land in the future, and
/// keeps reporting exhaustion from then on (while still advancing its
/// internal clock, as a real feed tailing a live system would).
///
/// The suspending form resolves after a random 0–8 ms delay, simulating an
/// upstream that answers at unpredictable times.
pub struct SyntheticLogSource {
    rng: StdRng,
    last: LogEntry,
    drained: bool,
}

impl SyntheticLogSource {
    /// Create a source with operating-system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a deterministic source for reproducible runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let days_back = rng.random_range(40..=60);
        let start = Utc::now() - ChronoDuration::days(days_back);
        let message = fabricate_message(&mut rng);
        Self {
            rng,
            last: LogEntry::new(start, message),
            drained: false,
        }
    }

    fn next_pseudo_random_entry(&mut self) -> LogEntry {
        let hours = self.rng.random_range(0..=10);
        let millis = self.rng.random_range(0..60_000);
        let timestamp = self.last.timestamp
            + ChronoDuration::hours(hours)
            + ChronoDuration::milliseconds(millis);
        LogEntry::new(timestamp, fabricate_message(&mut self.rng))
    }

    fn advance(&mut self) -> Option<LogEntry> {
        self.last = self.next_pseudo_random_entry();
        if self.last.timestamp > Utc::now() {
            self.drained = true;
        }
        if self.drained {
            None
        } else {
            Some(self.last.clone())
        }
    }
}

impl Default for SyntheticLogSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSource for SyntheticLogSource {
    fn pop(&mut self) -> Result<Option<LogEntry>> {
        Ok(self.advance())
    }
}

#[async_trait]
impl AsyncLogSource for SyntheticLogSource {
    async fn pop(&mut self) -> Result<Option<LogEntry>> {
        let next = self.advance();
        let delay = self.rng.random_range(0..=8);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(next)
    }
}

fn fabricate_message(rng: &mut StdRng) -> String {
    format!(
        "{} {} {}",
        BUZZWORDS_A[rng.random_range(0..BUZZWORDS_A.len())],
        BUZZWORDS_B[rng.random_range(0..BUZZWORDS_B.len())],
        BUZZWORDS_C[rng.random_range(0..BUZZWORDS_C.len())],
    )
}
