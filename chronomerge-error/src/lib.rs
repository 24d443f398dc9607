// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the chronomerge log-merge engine.
//!
//! This crate defines the root [`MergeError`] type with one variant per
//! failure mode of the merge contract, allowing callers to distinguish
//! bugs in the merge core (ordering violations) from failures of the
//! sources it consumes.
//!
//! # Examples
//!
//! ```
//! use chronomerge_error::{MergeError, Result};
//!
//! fn pull_next() -> Result<()> {
//!     Err(MergeError::source_failure("upstream closed the file"))
//! }
//! ```

use chrono::{DateTime, Utc};

/// Root error type for all chronomerge operations.
///
/// Ordering errors are raised by the sink when the merge core hands it an
/// entry that breaks chronological order; they always indicate a bug in the
/// merge strategy (or a source that violated its monotonicity precondition),
/// never a transient condition.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The sink received an entry older than the last printed one.
    ///
    /// The merge strategies guarantee this never happens for sources that
    /// honor their non-decreasing precondition, so this variant surfaces
    /// either a core bug or a misbehaving source.
    #[error("entry at {timestamp} is older than last printed entry at {last}")]
    OrderViolation {
        /// Timestamp of the rejected entry
        timestamp: DateTime<Utc>,
        /// Timestamp of the most recently printed entry
        last: DateTime<Utc>,
    },

    /// The sink received an entry whose timestamp is not a renderable
    /// instant.
    ///
    /// `DateTime::<Utc>::MAX_UTC` is reserved as the exhaustion sentinel and
    /// is therefore rejected.
    #[error("{timestamp} is not a valid log timestamp")]
    InvalidTimestamp {
        /// The offending timestamp
        timestamp: DateTime<Utc>,
    },

    /// A source's pop failed instead of yielding an entry or exhausting.
    ///
    /// Propagated immediately; the merge aborts rather than silently
    /// dropping the source, since continuing would hide missing data.
    #[error("log source failed: {context}")]
    SourceFailure {
        /// Description of the failing pop
        context: String,
        /// The underlying error, when the source supplied one
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MergeError {
    /// Create an `OrderViolation` for an entry rejected by the sink.
    #[must_use]
    pub const fn order_violation(timestamp: DateTime<Utc>, last: DateTime<Utc>) -> Self {
        Self::OrderViolation { timestamp, last }
    }

    /// Create an `InvalidTimestamp` for an unrenderable instant.
    #[must_use]
    pub const fn invalid_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self::InvalidTimestamp { timestamp }
    }

    /// Create a `SourceFailure` with a description only.
    pub fn source_failure(context: impl Into<String>) -> Self {
        Self::SourceFailure {
            context: context.into(),
            source: None,
        }
    }

    /// Wrap an underlying source error with context.
    pub fn source_failure_from(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SourceFailure {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check whether this error indicates a broken ordering contract.
    ///
    /// Ordering-contract errors are bugs, not runtime conditions; callers
    /// should surface them rather than retry.
    #[must_use]
    pub const fn is_ordering_bug(&self) -> bool {
        matches!(
            self,
            Self::OrderViolation { .. } | Self::InvalidTimestamp { .. }
        )
    }

    /// Check if this is a recoverable error.
    ///
    /// No merge error is recoverable: retrying a source pop could duplicate
    /// or reorder entries, violating the per-source monotonicity the merge
    /// strategies rely on.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }
}

impl Clone for MergeError {
    fn clone(&self) -> Self {
        match self {
            Self::OrderViolation { timestamp, last } => Self::OrderViolation {
                timestamp: *timestamp,
                last: *last,
            },
            Self::InvalidTimestamp { timestamp } => Self::InvalidTimestamp {
                timestamp: *timestamp,
            },
            // The boxed inner error is not Clone; fold it into the context.
            Self::SourceFailure { context, source } => Self::SourceFailure {
                context: match source {
                    Some(inner) => format!("{context}: {inner}"),
                    None => context.clone(),
                },
                source: None,
            },
        }
    }
}

/// Specialized `Result` type for chronomerge operations.
pub type Result<T> = std::result::Result<T, MergeError>;
