//! # lookup-bench
//!
//! Point-lookup throughput of three index families over a synthetic record
//! table, each built for a primary and a secondary key:
//!
//! - binary search over the sorted table / secondary permutation
//! - `BTreeMap<u64, RowId>`
//! - `blart::TreeMap` adaptive radix trie over big-endian keys
//!
//! All six indexes replay the same seeded workload. Each hit adds the found
//! key to a checksum, and the checksums must agree across indexes.
//!
//! ## Example
//!
//! ```rust
//! use lookup_bench::{harness, Dataset, IndexKind, Workload};
//!
//! let dataset = Dataset::generate(1_000, 42).unwrap();
//! let workload = Workload::generate(2018, 100, 1_000).unwrap();
//!
//! let measurements = harness::run_kinds(&IndexKind::ALL, &dataset, &workload);
//! harness::verify_checksums(&measurements).unwrap();
//! assert!(measurements.iter().all(|m| m.hits == 100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod index;
pub mod memory;
pub mod report;
pub mod workload;

pub use config::Config;
pub use dataset::{Dataset, KeyRole, Record, RowId, SecondaryPermutation, Table};
pub use error::{BenchError, Result};
pub use harness::{BuildStats, Measurement};
pub use index::{Family, IndexKind, PointIndex};
pub use workload::Workload;

#[cfg(test)]
mod proptests;
