// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types and capability contracts for chronological log merging.
//!
//! This crate defines the data model ([`LogEntry`], [`Watermark`]) and the
//! two capability contracts the merge strategies are written against:
//! [`LogSource`]/[`AsyncLogSource`] (producers of non-decreasing entry
//! sequences) and [`LogSink`] (an order-enforcing consumer). Any type
//! implementing these traits is substitutable; no inheritance hierarchy is
//! required.

pub mod has_timestamp;
pub mod log_entry;
pub mod sink;
pub mod source;
pub mod watermark;

pub use self::has_timestamp::HasTimestamp;
pub use self::log_entry::LogEntry;
pub use self::sink::{LogSink, SinkSummary};
pub use self::source::{entry_stream, AsyncLogSource, LogSource};
pub use self::watermark::{frontier, Watermark};

pub use chronomerge_error::{MergeError, Result};
