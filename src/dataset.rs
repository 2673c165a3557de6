//! Synthetic record table.
//!
//! Record `i` has primary key `i` and a secondary key drawn from a uniformly
//! random permutation of `0..n`. The inverse permutation maps a secondary key
//! back to its row and is what the array index binary-searches through.

use std::fmt;
use std::ops::Index;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{BenchError, Result};

/// Width of a record in 64-bit words.
pub const RECORD_WORDS: usize = 8;

const PAYLOAD_WORDS: usize = RECORD_WORDS - 2;

/// Which key of a record an index is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyRole {
    /// Record identifier, equal to the table offset.
    Primary,
    /// Independent permuted attribute.
    Secondary,
}

impl KeyRole {
    /// Both roles, primary first.
    pub const ALL: [KeyRole; 2] = [KeyRole::Primary, KeyRole::Secondary];

    /// Lower-case name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            KeyRole::Primary => "primary",
            KeyRole::Secondary => "secondary",
        }
    }
}

/// A fixed-width table row.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Primary key (the row's offset).
    pub primary: u64,
    /// Secondary key.
    pub secondary: u64,
    /// Pads the row to `RECORD_WORDS`.
    #[allow(dead_code)]
    payload: [u64; PAYLOAD_WORDS],
}

const _: () = assert!(std::mem::size_of::<Record>() == RECORD_WORDS * 8);

impl Record {
    /// Create a record with a zeroed payload.
    pub fn new(primary: u64, secondary: u64) -> Self {
        Self {
            primary,
            secondary,
            payload: [0; PAYLOAD_WORDS],
        }
    }

    /// The key this record is indexed under for `role`.
    #[inline]
    pub fn key(&self, role: KeyRole) -> u64 {
        match role {
            KeyRole::Primary => self.primary,
            KeyRole::Secondary => self.secondary,
        }
    }
}

/// Handle to a table row.
///
/// Indexes store these instead of references so that the table stays the
/// single owner of record data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u32);

impl RowId {
    /// Largest table size representable by row handles.
    pub const MAX_ROWS: usize = u32::MAX as usize;

    // Never a valid row: offsets stay below MAX_ROWS.
    const UNSET: RowId = RowId(u32::MAX);

    /// Handle for the row at `offset`.
    #[inline]
    pub fn new(offset: usize) -> Self {
        debug_assert!(offset < Self::MAX_ROWS);
        RowId(offset as u32)
    }

    /// Table offset of this row.
    #[inline]
    pub fn offset(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contiguous, immutable sequence of records ordered by primary key.
#[derive(Debug, Clone)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in primary key order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record for a handle, if it is in range.
    pub fn get(&self, row: RowId) -> Option<&Record> {
        self.records.get(row.offset())
    }

    /// Iterate `(row, record)` pairs in table order.
    pub fn rows(&self) -> impl Iterator<Item = (RowId, &Record)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (RowId::new(i), record))
    }
}

impl Index<RowId> for Table {
    type Output = Record;

    #[inline]
    fn index(&self, row: RowId) -> &Record {
        &self.records[row.offset()]
    }
}

/// Rows ordered by secondary key: `rows[s]` holds the record whose secondary key is `s`.
#[derive(Debug, Clone)]
pub struct SecondaryPermutation {
    rows: Vec<RowId>,
}

impl SecondaryPermutation {
    /// Row holding secondary key `key`.
    pub fn row_of(&self, key: u64) -> Option<RowId> {
        usize::try_from(key).ok().and_then(|k| self.rows.get(k).copied())
    }

    /// The permutation as a slice, sorted by secondary key.
    pub fn as_slice(&self) -> &[RowId] {
        &self.rows
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table together with its secondary permutation.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: Table,
    permutation: SecondaryPermutation,
}

impl Dataset {
    /// Generate `n` records with secondary keys shuffled by a seeded RNG.
    pub fn generate(n: usize, seed: u64) -> Result<Self> {
        check_rows(n)?;
        let mut secondary_keys: Vec<u64> = try_with_capacity(n, "secondary keys")?;
        secondary_keys.extend(0..n as u64);

        let mut rng = StdRng::seed_from_u64(seed);
        secondary_keys.shuffle(&mut rng);
        debug!(records = n, seed, "shuffled secondary keys");

        Self::assemble(&secondary_keys)
    }

    /// Build a dataset where record `i` gets `secondary_keys[i]`.
    ///
    /// The keys must be a permutation of `0..secondary_keys.len()`.
    pub fn from_secondary_keys(secondary_keys: &[u64]) -> Result<Self> {
        check_rows(secondary_keys.len())?;
        Self::assemble(secondary_keys)
    }

    fn assemble(secondary_keys: &[u64]) -> Result<Self> {
        let n = secondary_keys.len();

        let mut records: Vec<Record> = try_with_capacity(n, "record table")?;
        records.extend(
            secondary_keys
                .iter()
                .enumerate()
                .map(|(i, &secondary)| Record::new(i as u64, secondary)),
        );

        let mut rows: Vec<RowId> = try_with_capacity(n, "secondary permutation")?;
        rows.resize(n, RowId::UNSET);
        for (i, &secondary) in secondary_keys.iter().enumerate() {
            let slot = usize::try_from(secondary)
                .ok()
                .and_then(|s| rows.get_mut(s))
                .filter(|slot| **slot == RowId::UNSET)
                .ok_or(BenchError::NotAPermutation { value: secondary, len: n })?;
            *slot = RowId::new(i);
        }

        Ok(Self {
            table: Table { records },
            permutation: SecondaryPermutation { rows },
        })
    }

    /// The record table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The secondary key permutation.
    pub fn permutation(&self) -> &SecondaryPermutation {
        &self.permutation
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn check_rows(n: usize) -> Result<()> {
    if n > RowId::MAX_ROWS {
        return Err(BenchError::InvalidConfig(format!(
            "{n} records exceed the {} row limit",
            RowId::MAX_ROWS
        )));
    }
    Ok(())
}

/// Allocate an empty vector with room for exactly `len` items, reporting failure.
pub(crate) fn try_with_capacity<T>(len: usize, what: &'static str) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|source| BenchError::Allocation { what, source })?;
    Ok(v)
}
