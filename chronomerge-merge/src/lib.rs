// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chronological merge strategies for time-ordered log streams.
//!
//! Three strategies with identical output semantics and different cost
//! profiles:
//!
//! - [`merge_sequential`]: drain everything, sort, replay. O(N log N)
//!   time, O(N) space. The correctness oracle.
//! - [`merge_heap`]: synchronous bounded k-way heap merge. O(N log K)
//!   time, O(K) space.
//! - [`merge_concurrent`]: asynchronous watermark-gated merge: sources are
//!   drained concurrently and entries are emitted as soon as the global
//!   frontier proves them safe, without waiting for full drainage.

mod concurrent;
mod heap;
mod sequential;
mod watermark_merge;

pub use concurrent::merge_concurrent;
pub use heap::merge_heap;
pub use sequential::merge_sequential;
pub use watermark_merge::{WatermarkMerge, WatermarkMergeExt};
