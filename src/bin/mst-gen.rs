use anyhow::{Context, Result};

use mstbench::config::GeneratorConfig;
use mstbench::generator::GraphGenerator;
use mstbench::io;
use mstbench::options::GenOptions;

fn main() -> Result<()> {
    mstbench::init_logger();

    let options =
        GenOptions::parse_from_args(std::env::args_os().skip(1)).unwrap_or_else(|err| err.exit());
    log::debug!("mst-gen options: {:?}", options);

    let mut config = GeneratorConfig::load_from_file(&options.config)?;
    if let Some(seed) = options.seed {
        config.seed = seed;
    }

    let document = GraphGenerator::from_config(&config).generate_document(&config.categories);
    io::write_json(&options.output, &document)
        .with_context(|| format!("Failed to write graphs to {}", options.output))?;

    log::info!(
        "generated {} graph(s) and wrote them to {}",
        document.graphs.len(),
        options.output
    );
    Ok(())
}
