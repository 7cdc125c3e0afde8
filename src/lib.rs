//! Minimum spanning trees by Kruskal's and Prim's algorithms, with per-run
//! operation counters for comparing the two.
//!
//! The core is [`graph`], [`mst`] and [`metrics`]. [`io`], [`generator`],
//! [`runner`], [`report`], [`config`] and [`options`] make up the benchmark
//! tooling behind the `mst-bench` and `mst-gen` binaries.

pub mod config;
pub mod generator;
pub mod graph;
pub mod io;
pub mod metrics;
pub mod mst;
pub mod options;
pub mod report;
pub mod runner;

/// Installs `env_logger`, filtered by `MST_LOG` and styled by `MST_LOG_STYLE`.
pub fn init_logger() {
    let env = env_logger::Env::new()
        .filter_or("MST_LOG", "info")
        .write_style("MST_LOG_STYLE");
    let _ = env_logger::try_init_from_env(env);
}
