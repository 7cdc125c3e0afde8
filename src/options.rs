//! Command-line options for `mst-bench` and `mst-gen`.
//! Both parsers expect the arguments without the binary name.

use clap::{Arg, ArgAction, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Ron,
}

fn make_bench_parser() -> Command {
    Command::new("mst-bench")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Runs Prim and Kruskal on every graph of an input document")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Graph document to benchmark")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the results will be stored")
                .default_value("output.json"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Input and output document format")
                .default_value("json")
                .value_parser(["json", "ron"]),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .help("Benchmark distinct graphs concurrently")
                .action(ArgAction::SetTrue),
        )
}

fn make_gen_parser() -> Command {
    Command::new("mst-gen")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Writes a document of seeded random connected graphs")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .default_value("input.json"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML generator config, defaults apply when absent")
                .default_value("mstbench.toml"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Overrides the configured seed")
                .value_parser(clap::value_parser!(u64)),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchOptions {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
    pub parallel: bool,
}

impl BenchOptions {
    pub fn parse_from_args<I, T>(flags: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_bench_parser().try_get_matches_from(flags)?;
        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("ron") => OutputFormat::Ron,
            _ => OutputFormat::Json,
        };
        Ok(Self {
            input: required(&matches, "input"),
            output: required(&matches, "output"),
            format,
            parallel: matches.get_flag("parallel"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    pub output: String,
    pub config: String,
    pub seed: Option<u64>,
}

impl GenOptions {
    pub fn parse_from_args<I, T>(flags: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_gen_parser().try_get_matches_from(flags)?;
        Ok(Self {
            output: required(&matches, "output"),
            config: required(&matches, "config"),
            seed: matches.get_one::<u64>("seed").copied(),
        })
    }
}

// Only called for arguments that are required or carry a default.
fn required(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}
