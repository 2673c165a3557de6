//! Point-lookup benchmark over a synthetic record table.
//!
//! Runs binary search, B+tree and ART lookups for primary and secondary keys
//! against one shared workload and prints time, throughput and checksum for
//! each index. Logs go to stderr; set `RUST_LOG=debug` for per-index detail.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lookup_bench::config::{DEFAULT_DATASET_SEED, DEFAULT_LOOKUPS, DEFAULT_RECORDS, DEFAULT_SEED};
use lookup_bench::{harness, report, Config, Family, Result};

#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "lookup-bench")]
#[command(about = "Compare point-lookup throughput of binary search, B+tree and ART indexes")]
struct Args {
    /// Number of records in the table
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECORDS)]
    records: usize,

    /// Number of lookups replayed against each index
    #[arg(short = 'm', long, default_value_t = DEFAULT_LOOKUPS)]
    lookups: usize,

    /// Seed for the lookup targets
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Seed for the secondary key permutation
    #[arg(long, default_value_t = DEFAULT_DATASET_SEED)]
    dataset_seed: u64,

    /// Index families to run (repeatable; default all)
    #[arg(long = "index", value_enum)]
    families: Vec<Family>,

    /// Also print a summary table with build time and memory
    #[arg(long, default_value_t = false)]
    summary: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            records: self.records,
            lookups: self.lookups,
            seed: self.seed,
            dataset_seed: self.dataset_seed,
        }
    }

    fn families(&self) -> Vec<Family> {
        if self.families.is_empty() {
            Family::ALL.to_vec()
        } else {
            self.families.clone()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "benchmark failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();
    let measurements = harness::run(&config, &args.families())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &measurements)?;
    if args.summary {
        writeln!(out)?;
        report::write_summary(&mut out, &measurements)?;
    }
    out.flush()?;

    harness::verify_checksums(&measurements)?;
    info!(indexes = measurements.len(), "checksums agree");
    Ok(())
}
