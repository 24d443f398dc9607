// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomerge_core::{frontier, HasTimestamp, Watermark};
use chronomerge_error::Result;
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::trace;

/// Watermark-gated merge of concurrently draining, individually ordered
/// streams.
///
/// Each inner stream yields items in non-decreasing timestamp order, but
/// the streams resolve at unpredictable real-world times relative to each
/// other. The combinator buffers at most one pending item per stream and
/// tracks a per-stream [`Watermark`]: the timestamp of the most recently
/// observed item (or the exhausted sentinel). The minimum buffered item is
/// emitted only once its timestamp is at or below the global frontier (the
/// minimum watermark across all streams), at which point no stream can
/// ever produce anything older.
///
/// All watermark and buffer mutations are serialized through `poll_next`,
/// so the "observe, recompute frontier, flush" step is atomic per stream
/// update. A stream that stops advancing its watermark correctly withholds
/// every item at or above it until the stream advances or ends.
///
/// Inner streams yield `Result` items; the first error is emitted and the
/// merge fuses, since retrying a pop could duplicate or reorder entries.
pub struct WatermarkMerge<T: HasTimestamp> {
    streams: Vec<Pin<Box<dyn Stream<Item = Result<T>> + Send>>>,
    slots: Vec<Option<T>>,
    marks: Vec<Watermark<T::Timestamp>>,
    done: bool,
}

// The inner streams are already boxed and pinned, and no other field is
// structurally pinned, so the combinator itself can move freely.
impl<T: HasTimestamp> Unpin for WatermarkMerge<T> {}

impl<T> WatermarkMerge<T>
where
    T: HasTimestamp + Send + 'static,
{
    #[must_use]
    pub fn new<S>(streams: Vec<S>) -> Self
    where
        S: Stream<Item = Result<T>> + Send + 'static,
    {
        let count = streams.len();
        let streams = streams
            .into_iter()
            .map(|stream| Box::pin(stream) as Pin<Box<dyn Stream<Item = Result<T>> + Send>>)
            .collect::<Vec<_>>();

        Self {
            streams,
            slots: (0..count).map(|_| None).collect(),
            marks: vec![Watermark::Unstarted; count],
            done: false,
        }
    }
}

impl<T> Stream for WatermarkMerge<T>
where
    T: HasTimestamp + Send + 'static,
{
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = Pin::into_inner(self);

        if this.done {
            return Poll::Ready(None);
        }

        // Issue the next pop on every stream whose slot is free. All
        // outstanding pops advance concurrently; a filled slot parks its
        // stream until the slot is flushed, keeping memory at one pending
        // item per stream.
        let mut any_pending = false;

        for i in 0..this.streams.len() {
            if this.slots[i].is_none() && !this.marks[i].is_exhausted() {
                match this.streams[i].as_mut().poll_next(cx) {
                    Poll::Ready(Some(Ok(item))) => {
                        this.marks[i].advance_to(item.timestamp());
                        this.slots[i] = Some(item);
                    }
                    Poll::Ready(Some(Err(err))) => {
                        this.done = true;
                        return Poll::Ready(Some(Err(err)));
                    }
                    Poll::Ready(None) => {
                        trace!(stream = i, "source exhausted");
                        this.marks[i].exhaust();
                    }
                    Poll::Pending => {
                        any_pending = true;
                    }
                }
            }
        }

        // Find the minimum buffered item.
        let mut min_idx = None;
        let mut min_ts: Option<T::Timestamp> = None;

        for (i, slot) in this.slots.iter().enumerate() {
            if let Some(item) = slot {
                let ts = item.timestamp();
                if min_ts.is_none_or(|current| ts < current) {
                    min_idx = Some(i);
                    min_ts = Some(ts);
                }
            }
        }

        let (Some(idx), Some(ts)) = (min_idx, min_ts) else {
            // No buffered items: end once every stream is exhausted.
            return if any_pending {
                Poll::Pending
            } else {
                this.done = true;
                Poll::Ready(None)
            };
        };

        // Flush rule: the minimum buffered item is safe once no stream's
        // next item can undercut it. Every stream with a filled slot
        // contributes that item's own timestamp to the frontier, so the
        // gate only bites while a slower stream still owes a response.
        if frontier(&this.marks).admits(ts) {
            Poll::Ready(this.slots[idx].take().map(Ok))
        } else {
            trace!(stream = idx, ?ts, "withholding entry below the frontier");
            debug_assert!(any_pending, "gated flush requires an outstanding pop");
            Poll::Pending
        }
    }
}

/// Extension trait for merging a vector of ordered streams behind a
/// watermark gate.
pub trait WatermarkMergeExt {
    type Item: HasTimestamp;

    /// Merges multiple individually ordered streams, emitting items in
    /// globally non-decreasing timestamp order as soon as the frontier
    /// proves them safe.
    fn watermark_merge(self) -> WatermarkMerge<Self::Item>;
}

impl<T, S> WatermarkMergeExt for Vec<S>
where
    S: Stream<Item = Result<T>> + Send + 'static,
    T: HasTimestamp + Send + 'static,
{
    type Item = T;

    fn watermark_merge(self) -> WatermarkMerge<Self::Item> {
        WatermarkMerge::new(self)
    }
}
