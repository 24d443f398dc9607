// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chronomerge_core::MergeError;
use chronomerge_merge::{merge_heap, merge_sequential};
use chronomerge_test_utils::{entry_at, CollectingSink, FailingSource, ScriptedSource};

#[test]
fn test_three_source_scenario() {
    // S1: t=10 "a", t=20 "b"; S2: t=15 "c"; S3: exhausted on first pop.
    let mut sources = vec![
        ScriptedSource::new(vec![entry_at(10, "a"), entry_at(20, "b")]),
        ScriptedSource::new(vec![entry_at(15, "c")]),
        ScriptedSource::new(vec![]),
    ];
    let mut sink = CollectingSink::new();

    let summary = merge_heap(&mut sources, &mut sink).unwrap();

    assert_eq!(summary.entries_printed, 3);
    assert_eq!(
        sink.entries(),
        &[entry_at(10, "a"), entry_at(15, "c"), entry_at(20, "b")]
    );
}

#[test]
fn test_zero_sources_completes_immediately() {
    let mut sources: Vec<ScriptedSource> = Vec::new();
    let mut sink = CollectingSink::new();

    let summary = merge_heap(&mut sources, &mut sink).unwrap();
    assert_eq!(summary.entries_printed, 0);
}

#[test]
fn test_single_source_replays_verbatim() {
    let script = vec![entry_at(1, "x"), entry_at(5, "y"), entry_at(5, "z")];
    let mut sources = vec![ScriptedSource::new(script.clone())];
    let mut sink = CollectingSink::new();

    merge_heap(&mut sources, &mut sink).unwrap();
    assert_eq!(sink.entries(), script.as_slice());
}

#[test]
fn test_equal_timestamps_across_sources() {
    let mut sources = vec![
        ScriptedSource::new(vec![entry_at(10, "left"), entry_at(10, "left-again")]),
        ScriptedSource::new(vec![entry_at(10, "right")]),
    ];
    let mut sink = CollectingSink::new();

    // Any interleaving of equal timestamps is acceptable; the sink's
    // order check must not trip.
    let summary = merge_heap(&mut sources, &mut sink).unwrap();
    assert_eq!(summary.entries_printed, 3);
}

#[test]
fn test_matches_sequential_oracle() {
    let scripts = || {
        vec![
            vec![entry_at(1, "a"), entry_at(7, "e"), entry_at(7, "f")],
            vec![entry_at(2, "b"), entry_at(3, "c")],
            vec![],
            vec![entry_at(5, "d"), entry_at(11, "g")],
        ]
    };

    let mut heap_sources: Vec<ScriptedSource> =
        scripts().into_iter().map(ScriptedSource::new).collect();
    let mut heap_sink = CollectingSink::new();
    merge_heap(&mut heap_sources, &mut heap_sink).unwrap();

    let mut seq_sources: Vec<ScriptedSource> =
        scripts().into_iter().map(ScriptedSource::new).collect();
    let mut seq_sink = CollectingSink::new();
    merge_sequential(&mut seq_sources, &mut seq_sink).unwrap();

    let mut heap_entries = heap_sink.into_entries();
    let mut seq_entries = seq_sink.into_entries();
    heap_entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.message.cmp(&b.message)));
    seq_entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.message.cmp(&b.message)));
    assert_eq!(heap_entries, seq_entries);
}

#[test]
fn test_source_failure_on_refill_aborts() {
    let mut sources = vec![
        FailingSource::new(vec![entry_at(1, "a")], "backing file truncated"),
        FailingSource::new(vec![entry_at(2, "b"), entry_at(3, "c")], "unused"),
    ];
    let mut sink = CollectingSink::new();

    let err = merge_heap(&mut sources, &mut sink).unwrap_err();
    assert!(matches!(err, MergeError::SourceFailure { .. }));
    // The entry printed before the failure remains valid output.
    assert_eq!(sink.entries(), &[entry_at(1, "a")]);
}
