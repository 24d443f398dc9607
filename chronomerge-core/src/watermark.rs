// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;

/// Per-source progress marker: the timestamp below which a source is
/// guaranteed to produce nothing further.
///
/// Because every source yields entries in non-decreasing timestamp order,
/// the timestamp of its most recently observed entry bounds everything it
/// can still produce. [`Watermark::Exhausted`] is the sentinel for a source
/// that has signaled exhaustion and is treated as greater than every real
/// timestamp; [`Watermark::Unstarted`] marks a source that has not yet
/// answered its first pop and is treated as less than every real timestamp,
/// so nothing can be flushed past it.
///
/// A watermark is monotonically non-decreasing across a merge: it mirrors
/// the source's own non-decreasing guarantee and never resurrects after
/// exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watermark<T> {
    /// No entry observed from this source yet
    Unstarted,
    /// Timestamp of the most recently observed entry
    Seen(T),
    /// Source exhausted; nothing further can arrive
    Exhausted,
}

impl<T: Ord + Copy> Watermark<T> {
    /// Record a newly observed entry timestamp.
    ///
    /// An exhausted watermark stays exhausted: a source must never
    /// resurrect after signaling exhaustion.
    pub fn advance_to(&mut self, timestamp: T) {
        match self {
            Self::Unstarted => *self = Self::Seen(timestamp),
            Self::Seen(current) => {
                debug_assert!(
                    timestamp >= *current,
                    "source violated its non-decreasing precondition"
                );
                *self = Self::Seen(timestamp);
            }
            Self::Exhausted => {}
        }
    }

    /// Mark the source as exhausted.
    pub fn exhaust(&mut self) {
        *self = Self::Exhausted;
    }

    /// Whether an entry with the given timestamp is safe to emit relative
    /// to this watermark: the source cannot later produce anything older.
    pub fn admits(&self, timestamp: T) -> bool {
        match self {
            Self::Unstarted => false,
            Self::Seen(current) => timestamp <= *current,
            Self::Exhausted => true,
        }
    }

    /// Whether this source has signaled exhaustion.
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl<T: Ord> PartialOrd for Watermark<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Watermark<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Unstarted, Self::Unstarted) | (Self::Exhausted, Self::Exhausted) => {
                Ordering::Equal
            }
            (Self::Unstarted, _) | (_, Self::Exhausted) => Ordering::Less,
            (_, Self::Unstarted) | (Self::Exhausted, _) => Ordering::Greater,
            (Self::Seen(a), Self::Seen(b)) => a.cmp(b),
        }
    }
}

/// The global frontier: the minimum watermark across all sources.
///
/// Any buffered entry with a timestamp at or below the frontier cannot be
/// beaten by a future arrival from any source. An empty source set has an
/// exhausted frontier (everything is safe).
pub fn frontier<T: Ord + Copy>(marks: &[Watermark<T>]) -> Watermark<T> {
    marks
        .iter()
        .min()
        .copied()
        .unwrap_or(Watermark::Exhausted)
}
