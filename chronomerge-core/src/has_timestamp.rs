// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A minimal trait for types that carry an intrinsic timestamp.
///
/// Merge strategies use this to order items and to maintain per-source
/// watermarks without caring about the payload. The timestamp type is
/// generic so the same machinery works for wall-clock time
/// (`chrono::DateTime<Utc>`), monotonic counters (`u64`), or anything else
/// with a total order.
///
/// # Examples
///
/// ```
/// use chronomerge_core::HasTimestamp;
///
/// #[derive(Clone, Debug)]
/// struct Reading {
///     value: f64,
///     at: u64,
/// }
///
/// impl HasTimestamp for Reading {
///     type Timestamp = u64;
///
///     fn timestamp(&self) -> u64 {
///         self.at
///     }
/// }
/// ```
pub trait HasTimestamp {
    /// The type representing the timestamp
    type Timestamp: Ord + Copy + Send + Sync + std::fmt::Debug;

    /// Returns the timestamp value for this item.
    /// Merge strategies use this to determine the order of items.
    fn timestamp(&self) -> Self::Timestamp;
}
