//! Reproducible lookup targets.

use std::ops::Deref;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dataset::try_with_capacity;
use crate::error::{BenchError, Result};

/// A materialized sequence of lookup targets, replayed once per index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    targets: Vec<u64>,
}

impl Workload {
    /// Draw `lookups` targets uniformly from `[0, domain)` with a fixed seed.
    ///
    /// The same `(seed, lookups, domain)` always yields the same sequence.
    pub fn generate(seed: u64, lookups: usize, domain: u64) -> Result<Self> {
        if lookups == 0 {
            return Ok(Self { targets: Vec::new() });
        }
        if domain == 0 {
            return Err(BenchError::EmptyDomain { lookups });
        }

        let mut targets: Vec<u64> = try_with_capacity(lookups, "workload")?;
        let mut rng = StdRng::seed_from_u64(seed);
        let dist = Uniform::new(0, domain);
        targets.extend(dist.sample_iter(&mut rng).take(lookups));
        Ok(Self { targets })
    }

    /// Use an explicit target sequence.
    pub fn from_targets(targets: Vec<u64>) -> Self {
        Self { targets }
    }

    /// The targets in replay order.
    pub fn targets(&self) -> &[u64] {
        &self.targets
    }
}

impl Deref for Workload {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.targets
    }
}
