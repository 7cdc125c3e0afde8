use anyhow::{Context, Result};

use mstbench::io::{self, GraphDocument};
use mstbench::options::{BenchOptions, OutputFormat};
use mstbench::runner::run_benchmark;

fn main() -> Result<()> {
    mstbench::init_logger();

    let options = BenchOptions::parse_from_args(std::env::args_os().skip(1))
        .unwrap_or_else(|err| err.exit());
    log::debug!("mst-bench options: {:?}", options);

    let document: GraphDocument = match options.format {
        OutputFormat::Json => io::read_json(&options.input),
        OutputFormat::Ron => io::read_ron(&options.input),
    }
    .with_context(|| format!("Failed to read graphs from {}", options.input))?;
    log::info!("loaded {} graph(s) from {}", document.graphs.len(), options.input);

    let results = run_benchmark(&document, options.parallel)
        .with_context(|| format!("Failed to build a graph from {}", options.input))?;
    for report in &results.results {
        log::debug!("{}", report);
    }

    match options.format {
        OutputFormat::Json => io::write_json(&options.output, &results),
        OutputFormat::Ron => io::write_ron(&options.output, &results),
    }
    .with_context(|| format!("Failed to write results to {}", options.output))?;

    log::info!("benchmark completed, output written to {}", options.output);
    Ok(())
}
