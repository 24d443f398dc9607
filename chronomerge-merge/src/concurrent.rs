// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::WatermarkMergeExt;
use chronomerge_core::{entry_stream, AsyncLogSource, LogSink, SinkSummary};
use chronomerge_error::Result;
use futures::StreamExt;
use tracing::debug;

/// Asynchronous watermark-gated merge.
///
/// Sources are drained concurrently: every source has one suspending pop
/// outstanding at a time, and pops resolve in any order. Entries flow
/// through a [`WatermarkMerge`](crate::WatermarkMerge) that emits each one
/// as soon as the global frontier proves no source can still undercut it,
/// so output starts well before the slowest source finishes; memory stays
/// at one in-flight entry per source.
///
/// Completes once every source is exhausted and all buffered entries are
/// flushed, then signals `done()` to the sink. An empty source set
/// completes immediately with an empty summary.
///
/// # Errors
/// The first source or sink failure aborts the merge; partial output
/// already printed remains valid up to that point.
pub async fn merge_concurrent<Snk>(
    sources: Vec<Box<dyn AsyncLogSource>>,
    sink: &mut Snk,
) -> Result<SinkSummary>
where
    Snk: LogSink,
{
    let count = sources.len();
    let mut merged = sources
        .into_iter()
        .map(entry_stream)
        .collect::<Vec<_>>()
        .watermark_merge();

    while let Some(entry) = merged.next().await {
        sink.print(entry?)?;
    }

    let summary = sink.done();
    debug!(sources = count, entries = summary.entries_printed, "concurrent merge complete");
    Ok(summary)
}
