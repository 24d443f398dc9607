// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use chronomerge_core::{AsyncLogSource, LogEntry, LogSource};
use chronomerge_error::{MergeError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;

/// A source that replays a fixed script of entries, then exhausts.
///
/// Implements both the blocking and the suspending contract. The suspending
/// form can add a random per-pop delay (`with_jitter`) so concurrent merges
/// observe arrivals in unpredictable wall-clock order.
pub struct ScriptedSource {
    entries: VecDeque<LogEntry>,
    jitter_ms: u64,
    rng: StdRng,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self {
            entries: entries.into(),
            jitter_ms: 0,
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Delay each suspending pop by a random 0..=`max_ms` milliseconds.
    #[must_use]
    pub fn with_jitter(mut self, max_ms: u64) -> Self {
        self.jitter_ms = max_ms;
        self
    }
}

impl LogSource for ScriptedSource {
    fn pop(&mut self) -> Result<Option<LogEntry>> {
        Ok(self.entries.pop_front())
    }
}

#[async_trait]
impl AsyncLogSource for ScriptedSource {
    async fn pop(&mut self) -> Result<Option<LogEntry>> {
        if self.jitter_ms > 0 {
            let delay = self.rng.random_range(0..=self.jitter_ms);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(self.entries.pop_front())
    }
}

/// A source that yields a prefix of entries and then never resolves.
///
/// Used to verify that the watermark gate withholds unsafe entries
/// indefinitely instead of guessing.
pub struct StallingSource {
    entries: VecDeque<LogEntry>,
}

impl StallingSource {
    #[must_use]
    pub fn new(entries: Vec<LogEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }
}

#[async_trait]
impl AsyncLogSource for StallingSource {
    async fn pop(&mut self) -> Result<Option<LogEntry>> {
        match self.entries.pop_front() {
            Some(entry) => Ok(Some(entry)),
            None => futures::future::pending().await,
        }
    }
}

/// A source that yields a prefix of entries and then fails.
pub struct FailingSource {
    entries: VecDeque<LogEntry>,
    context: String,
}

impl FailingSource {
    #[must_use]
    pub fn new(entries: Vec<LogEntry>, context: impl Into<String>) -> Self {
        Self {
            entries: entries.into(),
            context: context.into(),
        }
    }
}

impl LogSource for FailingSource {
    fn pop(&mut self) -> Result<Option<LogEntry>> {
        match self.entries.pop_front() {
            Some(entry) => Ok(Some(entry)),
            None => Err(MergeError::source_failure(self.context.clone())),
        }
    }
}

#[async_trait]
impl AsyncLogSource for FailingSource {
    async fn pop(&mut self) -> Result<Option<LogEntry>> {
        LogSource::pop(self)
    }
}
