// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::LogEntry;
use async_stream::stream;
use async_trait::async_trait;
use chronomerge_error::Result;
use futures::Stream;

/// A blocking producer of a finite, non-decreasing sequence of log entries.
///
/// `Ok(None)` is the exhaustion marker. Calls after exhaustion must keep
/// returning `Ok(None)`; a source never resurrects, although it may still
/// advance internal state on each call.
///
/// # Contract
///
/// Successive `Ok(Some(entry))` results are non-decreasing in timestamp.
/// This is a hard precondition the merge strategies depend on; it is
/// trusted, not re-validated. A source that breaks it surfaces as an
/// [`OrderViolation`](chronomerge_error::MergeError::OrderViolation) at the
/// sink.
pub trait LogSource {
    /// Retrieve the next entry, or `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    /// Returns [`SourceFailure`](chronomerge_error::MergeError::SourceFailure)
    /// if the source cannot produce its next entry. The merge aborts on the
    /// first failure; there are no retries.
    fn pop(&mut self) -> Result<Option<LogEntry>>;
}

/// The suspending form of [`LogSource`].
///
/// Same contract, but the result is delivered asynchronously; the source
/// may introduce an arbitrary finite delay before resolving.
#[async_trait]
pub trait AsyncLogSource: Send {
    /// Retrieve the next entry, or `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    /// Returns [`SourceFailure`](chronomerge_error::MergeError::SourceFailure)
    /// if the source cannot produce its next entry.
    async fn pop(&mut self) -> Result<Option<LogEntry>>;
}

impl<S: LogSource + ?Sized> LogSource for Box<S> {
    fn pop(&mut self) -> Result<Option<LogEntry>> {
        (**self).pop()
    }
}

#[async_trait]
impl<S: AsyncLogSource + ?Sized> AsyncLogSource for Box<S> {
    async fn pop(&mut self) -> Result<Option<LogEntry>> {
        (**self).pop().await
    }
}

/// Adapts an [`AsyncLogSource`] into a `Stream` of entries.
///
/// The stream ends on exhaustion; on a pop failure it yields the error and
/// then ends, so a failure is observed exactly once.
pub fn entry_stream<S>(mut source: S) -> impl Stream<Item = Result<LogEntry>> + Send
where
    S: AsyncLogSource + 'static,
{
    stream! {
        loop {
            match source.pop().await {
                Ok(Some(entry)) => yield Ok(entry),
                Ok(None) => break,
                Err(err) => {
                    yield Err(err);
                    break;
                }
            }
        }
    }
}
