// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Chronomerge
//!
//! Merges an arbitrary number of independently time-ordered log streams
//! into one globally chronological output stream, printed as soon as
//! correctness permits.
//!
//! ## Overview
//!
//! Each source yields entries that are individually non-decreasing in
//! timestamp, but the streams interleave unpredictably and, in the
//! asynchronous case, entries become available at unpredictable real-world
//! times. Three strategies share the same source/sink contracts:
//!
//! - [`merge_sequential`]: drain, sort, replay (the correctness oracle)
//! - [`merge_heap`]: synchronous bounded k-way heap merge, O(K) memory
//! - [`merge_concurrent`]: asynchronous watermark-gated merge that emits
//!   each entry as soon as no source can still undercut it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chronomerge::{merge_concurrent, AsyncLogSource, ConsolePrinter, SyntheticLogSource};
//!
//! #[tokio::main]
//! async fn main() -> chronomerge::Result<()> {
//!     let sources: Vec<Box<dyn AsyncLogSource>> = (0..10)
//!         .map(|_| Box::new(SyntheticLogSource::new()) as Box<dyn AsyncLogSource>)
//!         .collect();
//!
//!     let mut printer = ConsolePrinter::new();
//!     let summary = merge_concurrent(sources, &mut printer).await?;
//!     eprintln!("{summary}");
//!     Ok(())
//! }
//! ```

// Re-export the core data model and capability contracts
pub use chronomerge_core::{
    entry_stream, frontier, AsyncLogSource, HasTimestamp, LogEntry, LogSink, LogSource,
    SinkSummary, Watermark,
};

// Re-export the error taxonomy
pub use chronomerge_error::{MergeError, Result};

// Re-export the merge strategies
pub use chronomerge_merge::{
    merge_concurrent, merge_heap, merge_sequential, WatermarkMerge, WatermarkMergeExt,
};

// Re-export the simulation collaborators
pub use chronomerge_sim::{ConsolePrinter, SyntheticLogSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        merge_concurrent, merge_heap, merge_sequential, AsyncLogSource, LogEntry, LogSink,
        LogSource, MergeError, Result, SinkSummary, WatermarkMergeExt,
    };
}
