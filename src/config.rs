//! Run configuration.

use crate::dataset::RowId;
use crate::error::{BenchError, Result};

/// Default table size N.
pub const DEFAULT_RECORDS: usize = 100_000_000;

/// Default workload size M.
pub const DEFAULT_LOOKUPS: usize = 10_000_000;

/// Default workload seed.
pub const DEFAULT_SEED: u64 = 2018;

/// Default seed for the secondary key shuffle.
pub const DEFAULT_DATASET_SEED: u64 = 42;

/// Parameters of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of records in the table (N).
    pub records: usize,
    /// Number of lookups per index (M).
    pub lookups: usize,
    /// Seed for the lookup targets.
    pub seed: u64,
    /// Seed for the secondary key permutation.
    pub dataset_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records: DEFAULT_RECORDS,
            lookups: DEFAULT_LOOKUPS,
            seed: DEFAULT_SEED,
            dataset_seed: DEFAULT_DATASET_SEED,
        }
    }
}

impl Config {
    /// Check that the parameters describe a runnable benchmark.
    ///
    /// Returns `Ok(true)` when the table dominates the workload, `Ok(false)`
    /// when it does not (the run is still valid, but cache residency skews it).
    pub fn validate(&self) -> Result<bool> {
        if self.records == 0 {
            return Err(BenchError::InvalidConfig("records must be at least 1".into()));
        }
        if self.lookups == 0 {
            return Err(BenchError::InvalidConfig("lookups must be at least 1".into()));
        }
        if self.records > RowId::MAX_ROWS {
            return Err(BenchError::InvalidConfig(format!(
                "records must not exceed {}",
                RowId::MAX_ROWS
            )));
        }
        Ok(self.records > self.lookups)
    }
}
