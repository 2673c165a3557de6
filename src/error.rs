//! Error type shared by the dataset, workload and harness layers.

use std::collections::TryReserveError;

use crate::index::IndexKind;

/// Errors returned while building or measuring a run.
///
/// A lookup miss is not an error; indexes report it as `None`.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The table, permutation or workload could not be allocated.
    #[error("failed to allocate {what}")]
    Allocation {
        /// Which buffer failed.
        what: &'static str,
        /// Allocator error.
        #[source]
        source: TryReserveError,
    },

    /// Startup parameters that cannot describe a run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lookups were requested over an empty key domain.
    #[error("cannot draw {lookups} lookups from an empty key domain")]
    EmptyDomain {
        /// Requested workload size.
        lookups: usize,
    },

    /// A secondary key assignment was not a bijection on `[0, len)`.
    #[error("secondary key {value} is out of range or repeated (table has {len} rows)")]
    NotAPermutation {
        /// Offending secondary key.
        value: u64,
        /// Table size.
        len: usize,
    },

    /// Two indexes disagreed on the same workload.
    #[error("{kind} checksum {got} does not match {reference} checksum {expected}")]
    ChecksumMismatch {
        /// Kind whose checksum serves as the reference.
        reference: IndexKind,
        /// Reference checksum.
        expected: u64,
        /// Kind that disagreed.
        kind: IndexKind,
        /// Its checksum.
        got: u64,
    },

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BenchError>;
