mod cli;

use anyhow::Result;
use clap::Parser;
use docsplit::RecursiveSplitter;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, corpus, write_output};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let splitter = RecursiveSplitter::new(cli.splitter_config()?);
    info!(config = ?splitter.config(), "splitter configured");

    let documents = corpus::read_input(cli.input.as_deref(), &cli.extensions)?;

    let start = Instant::now();
    let mut total_chunks = 0;
    let mut total_warnings = 0;
    let mut results = Vec::with_capacity(documents.len());

    for document in documents {
        let output = splitter.split(&document.text);
        info!(
            path = %document.path,
            chunks = output.len(),
            oversized = output.warnings.len(),
            "split document"
        );

        total_chunks += output.len();
        total_warnings += output.warnings.len();
        results.push((document.path, output));
    }

    info!(
        documents = results.len(),
        chunks = total_chunks,
        oversized = total_warnings,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "split complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(&mut out, cli.format, &results)?;
    out.flush()?;

    Ok(())
}
