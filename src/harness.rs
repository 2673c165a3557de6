//! Measurement protocol.
//!
//! Every index is driven by the same workload over the same table. A hit adds
//! the found record's key to a checksum, so all six indexes must report the
//! same sum for a run; [`verify_checksums`] enforces that.
//!
//! Indexes are built, measured and dropped one at a time so that no two
//! structures compete for cache or memory during a measurement.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dataset::{Dataset, Table};
use crate::error::{BenchError, Result};
use crate::index::{ArrayIndex, Family, IndexKind, PointIndex, TreeIndex, TrieIndex};
use crate::memory;
use crate::workload::Workload;

/// Cost of building one index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildStats {
    /// Wall-clock build time.
    pub elapsed: Duration,
    /// Heap growth while building, when the allocator reports it.
    pub bytes: Option<usize>,
}

/// Result of replaying a workload against one index.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Index that was measured.
    pub kind: IndexKind,
    /// Lookups performed.
    pub lookups: usize,
    /// Lookups that found a record.
    pub hits: usize,
    /// Wall-clock time of the lookup loop.
    pub elapsed: Duration,
    /// Wrapping sum of the found keys.
    pub checksum: u64,
    /// Build cost, if the index was built by the harness.
    pub build: Option<BuildStats>,
}

impl Measurement {
    /// Elapsed lookup time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Throughput in millions of lookups per second.
    pub fn mops(&self) -> f64 {
        self.lookups as f64 / self.seconds() / 1e6
    }
}

/// Replay `workload` against `index` and time it.
pub fn measure<I>(index: &I, table: &Table, workload: &[u64]) -> Measurement
where
    I: PointIndex + ?Sized,
{
    let kind = index.kind();
    let role = kind.role;

    let start = Instant::now();
    let mut checksum = 0u64;
    let mut hits = 0usize;
    for &target in workload {
        if let Some(row) = index.lookup(black_box(target)) {
            checksum = checksum.wrapping_add(table[row].key(role));
            hits += 1;
        }
    }
    let elapsed = start.elapsed();

    Measurement {
        kind,
        lookups: workload.len(),
        hits: black_box(hits),
        elapsed,
        checksum: black_box(checksum),
        build: None,
    }
}

/// Build the index for `kind`, measure it against `workload`, then drop it.
pub fn run_kind(kind: IndexKind, dataset: &Dataset, workload: &[u64]) -> Measurement {
    let table = dataset.table();
    match kind.family {
        Family::Array => build_and_measure(|| ArrayIndex::build(dataset, kind.role), table, workload),
        Family::Tree => build_and_measure(|| TreeIndex::build(table, kind.role), table, workload),
        Family::Trie => build_and_measure(|| TrieIndex::build(table, kind.role), table, workload),
    }
}

fn build_and_measure<I, F>(build: F, table: &Table, workload: &[u64]) -> Measurement
where
    I: PointIndex,
    F: FnOnce() -> I,
{
    let before = memory::allocated_bytes();
    let start = Instant::now();
    let index = build();
    let elapsed = start.elapsed();
    let bytes = memory::delta(before, memory::allocated_bytes());

    let kind = index.kind();
    info!(
        %kind,
        keys = index.len(),
        build_ms = elapsed.as_millis() as u64,
        bytes = bytes.unwrap_or(0),
        "built index"
    );

    let mut measurement = measure(&index, table, workload);
    measurement.build = Some(BuildStats { elapsed, bytes });
    debug!(
        %kind,
        hits = measurement.hits,
        lookups = measurement.lookups,
        mops = measurement.mops(),
        "measured index"
    );
    measurement
}

/// Measure each of `kinds` in order against the same dataset and workload.
pub fn run_kinds(kinds: &[IndexKind], dataset: &Dataset, workload: &[u64]) -> Vec<Measurement> {
    kinds
        .iter()
        .map(|&kind| run_kind(kind, dataset, workload))
        .collect()
}

/// Generate the dataset and workload described by `config` and measure every
/// index of `families`.
pub fn run(config: &Config, families: &[Family]) -> Result<Vec<Measurement>> {
    if !config.validate()? {
        warn!(
            records = config.records,
            lookups = config.lookups,
            "table does not dominate the workload; results will favour cache-resident indexes"
        );
    }

    info!(records = config.records, seed = config.dataset_seed, "generating dataset");
    let dataset = Dataset::generate(config.records, config.dataset_seed)?;

    info!(lookups = config.lookups, seed = config.seed, "generating workload");
    let workload = Workload::generate(config.seed, config.lookups, config.records as u64)?;

    Ok(run_kinds(&IndexKind::selected(families), &dataset, &workload))
}

/// Check that every measurement agrees with the first one.
pub fn verify_checksums(measurements: &[Measurement]) -> Result<()> {
    let Some(reference) = measurements.first() else {
        return Ok(());
    };
    for m in &measurements[1..] {
        if m.checksum != reference.checksum {
            return Err(BenchError::ChecksumMismatch {
                reference: reference.kind,
                expected: reference.checksum,
                kind: m.kind,
                got: m.checksum,
            });
        }
    }
    Ok(())
}
