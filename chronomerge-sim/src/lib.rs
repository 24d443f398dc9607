// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulation collaborators for the chronomerge merge strategies.
//!
//! [`SyntheticLogSource`] fabricates a finite, pseudo-random,
//! chronologically ordered entry sequence on demand; [`ConsolePrinter`]
//! renders merged entries to stdout while enforcing the sink ordering
//! contract. Both implement the capability traits from `chronomerge-core`,
//! so they are interchangeable with any other source or sink.

mod printer;
mod synthetic;

pub use printer::ConsolePrinter;
pub use synthetic::SyntheticLogSource;
