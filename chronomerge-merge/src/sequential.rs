// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomerge_core::{LogSink, LogSource, SinkSummary};
use chronomerge_error::Result;

/// Drain-sort-replay merge: the baseline correctness reference.
///
/// Drains every source to exhaustion, sorts the concatenation by timestamp
/// (stable, so discovery order is preserved among equal timestamps), and
/// feeds the sink in order. O(N log N) time, O(N) space.
///
/// # Errors
/// The first source or sink failure aborts the merge; no retries.
pub fn merge_sequential<Src, Snk>(sources: &mut [Src], sink: &mut Snk) -> Result<SinkSummary>
where
    Src: LogSource,
    Snk: LogSink,
{
    let mut entries = Vec::new();

    for source in sources.iter_mut() {
        while let Some(entry) = source.pop()? {
            entries.push(entry);
        }
    }

    entries.sort_by_key(|entry| entry.timestamp);

    for entry in entries {
        sink.print(entry)?;
    }

    Ok(sink.done())
}
