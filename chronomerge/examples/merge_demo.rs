// Copyright 2026 Chronomerge contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runs the three merge strategies over synthetic log sources.
//!
//! ```sh
//! cargo run --example merge_demo -- 25
//! ```

use chronomerge::{
    merge_concurrent, merge_heap, merge_sequential, AsyncLogSource, ConsolePrinter,
    SyntheticLogSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let count: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(10);

    eprintln!("==> sequential merge ({count} sources)");
    let mut sources: Vec<SyntheticLogSource> = (0..count)
        .map(|i| SyntheticLogSource::with_seed(i as u64))
        .collect();
    merge_sequential(&mut sources, &mut ConsolePrinter::new())?;

    eprintln!("==> bounded heap merge ({count} sources)");
    let mut sources: Vec<SyntheticLogSource> = (0..count)
        .map(|i| SyntheticLogSource::with_seed(i as u64))
        .collect();
    merge_heap(&mut sources, &mut ConsolePrinter::new())?;

    eprintln!("==> watermark-gated concurrent merge ({count} sources)");
    let sources: Vec<Box<dyn AsyncLogSource>> = (0..count)
        .map(|i| Box::new(SyntheticLogSource::with_seed(i as u64)) as Box<dyn AsyncLogSource>)
        .collect();
    merge_concurrent(sources, &mut ConsolePrinter::new()).await?;

    Ok(())
}
