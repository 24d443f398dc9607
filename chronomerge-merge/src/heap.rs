// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomerge_core::{LogEntry, LogSink, LogSource, SinkSummary};
use chronomerge_error::Result;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A pending entry paired with the index of its originating source.
///
/// Ordered by timestamp, then by source index so the heap has a total
/// order; the index tie-break is arbitrary but deterministic, which is
/// enough since the sink only requires non-strict monotonicity.
#[derive(Debug)]
struct Pending {
    entry: LogEntry,
    source: usize,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.entry.timestamp == other.entry.timestamp && self.source == other.source
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entry
            .timestamp
            .cmp(&other.entry.timestamp)
            .then(self.source.cmp(&other.source))
    }
}

/// Synchronous bounded k-way heap merge.
///
/// Maintains at most one pending entry per source in a min-heap: seed with
/// one blocking pop per source (skipping sources that are immediately
/// exhausted), then repeatedly emit the minimum and refill from that
/// entry's originating source. O(N log K) time, O(K) space for K sources.
///
/// The heap minimum at any step is globally safe: every unseen entry is
/// greater than or equal to the last popped entry from its own source, and
/// every pending entry is in the heap.
///
/// # Errors
/// The first source or sink failure aborts the merge; no retries.
pub fn merge_heap<Src, Snk>(sources: &mut [Src], sink: &mut Snk) -> Result<SinkSummary>
where
    Src: LogSource,
    Snk: LogSink,
{
    let mut heap = BinaryHeap::with_capacity(sources.len());

    for (index, source) in sources.iter_mut().enumerate() {
        if let Some(entry) = source.pop()? {
            heap.push(Reverse(Pending {
                entry,
                source: index,
            }));
        }
    }

    while let Some(Reverse(Pending { entry, source })) = heap.pop() {
        sink.print(entry)?;

        if let Some(next) = sources[source].pop()? {
            heap.push(Reverse(Pending {
                entry: next,
                source,
            }));
        }
    }

    Ok(sink.done())
}
