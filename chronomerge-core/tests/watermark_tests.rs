// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomerge_core::{frontier, Watermark};

#[test]
fn test_ordering_unstarted_below_seen_below_exhausted() {
    assert!(Watermark::Unstarted < Watermark::Seen(0u64));
    assert!(Watermark::Seen(u64::MAX) < Watermark::Exhausted);
    assert!(Watermark::Seen(3u64) < Watermark::Seen(7u64));
    assert_eq!(
        Watermark::<u64>::Exhausted.cmp(&Watermark::Exhausted),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn test_advance_is_monotonic() {
    let mut mark = Watermark::Unstarted;
    mark.advance_to(5u64);
    assert_eq!(mark, Watermark::Seen(5));

    mark.advance_to(5);
    assert_eq!(mark, Watermark::Seen(5));

    mark.advance_to(9);
    assert_eq!(mark, Watermark::Seen(9));
}

#[test]
fn test_exhausted_never_resurrects() {
    let mut mark = Watermark::Seen(5u64);
    mark.exhaust();
    assert!(mark.is_exhausted());

    mark.advance_to(10);
    assert!(mark.is_exhausted());
}

#[test]
fn test_admits() {
    assert!(!Watermark::Unstarted.admits(0u64));
    assert!(Watermark::Seen(5u64).admits(5));
    assert!(Watermark::Seen(5u64).admits(3));
    assert!(!Watermark::Seen(5u64).admits(6));
    assert!(Watermark::<u64>::Exhausted.admits(u64::MAX));
}

#[test]
fn test_frontier_is_minimum_watermark() {
    let marks = [
        Watermark::Seen(10u64),
        Watermark::Seen(4),
        Watermark::Exhausted,
    ];
    assert_eq!(frontier(&marks), Watermark::Seen(4));
}

#[test]
fn test_frontier_of_empty_set_is_exhausted() {
    // Zero sources: everything is trivially safe to flush.
    assert_eq!(frontier::<u64>(&[]), Watermark::Exhausted);
}

#[test]
fn test_frontier_with_unstarted_source_admits_nothing() {
    let marks = [Watermark::Seen(10u64), Watermark::Unstarted];
    assert!(!frontier(&marks).admits(0));
}

#[test]
fn test_frontier_all_exhausted_admits_everything() {
    let marks = [Watermark::<u64>::Exhausted, Watermark::Exhausted];
    assert!(frontier(&marks).admits(u64::MAX));
}
