// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test fixtures and assertion helpers shared by the chronomerge crates.

pub mod collecting_sink;
pub mod helpers;
pub mod scripted;

pub use collecting_sink::CollectingSink;
pub use helpers::{assert_no_entry_emitted, base_time, entry_at};
pub use scripted::{FailingSource, ScriptedSource, StallingSource};
