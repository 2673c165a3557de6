//! Binary search over the record table.
//!
//! The primary column is sorted by construction, so primary lookups search the
//! table directly. The secondary column is not sorted; secondary lookups
//! search the permutation, which lists rows in secondary key order, and
//! compare through `table[perm[m]].secondary`.

use super::{Family, IndexKind, KeyRole, PointIndex};
use crate::dataset::{Dataset, Record, RowId, Table};

/// Value returned by the raw searches when the target is absent.
///
/// Always out of range for a table of `len` rows.
#[inline]
pub fn miss_sentinel(len: usize) -> usize {
    len + 1
}

/// Search the primary key column for `target`.
///
/// Returns the table offset, or [`miss_sentinel`] if no record matches.
pub fn primary_search(records: &[Record], target: u64) -> usize {
    let mut l = 0;
    let mut r = records.len();
    while l < r {
        let m = l + (r - l) / 2;
        let key = records[m].primary;
        if target < key {
            r = m;
        } else if target == key {
            return m;
        } else {
            l = m + 1;
        }
    }
    miss_sentinel(records.len())
}

/// Search the secondary keys through `permutation`, which must list rows in
/// ascending secondary key order.
///
/// Returns the table offset of the matching record, or [`miss_sentinel`].
pub fn secondary_search(records: &[Record], permutation: &[RowId], target: u64) -> usize {
    let mut l = 0;
    let mut r = permutation.len();
    while l < r {
        let m = l + (r - l) / 2;
        let row = permutation[m].offset();
        let key = records[row].secondary;
        if target < key {
            r = m;
        } else if target == key {
            return row;
        } else {
            l = m + 1;
        }
    }
    miss_sentinel(records.len())
}

/// Binary search index. Borrows the dataset; builds nothing.
pub struct ArrayIndex<'t> {
    table: &'t Table,
    permutation: &'t [RowId],
    role: KeyRole,
}

impl<'t> ArrayIndex<'t> {
    /// Index `dataset` by `role`.
    pub fn build(dataset: &'t Dataset, role: KeyRole) -> Self {
        Self {
            table: dataset.table(),
            permutation: dataset.permutation().as_slice(),
            role,
        }
    }
}

impl PointIndex for ArrayIndex<'_> {
    fn kind(&self) -> IndexKind {
        IndexKind::new(Family::Array, self.role)
    }

    #[inline]
    fn lookup(&self, key: u64) -> Option<RowId> {
        let records = self.table.records();
        let found = match self.role {
            KeyRole::Primary => primary_search(records, key),
            KeyRole::Secondary => secondary_search(records, self.permutation, key),
        };
        (found < records.len()).then(|| RowId::new(found))
    }

    fn len(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(keys: &[(u64, u64)]) -> Vec<Record> {
        keys.iter().map(|&(p, s)| Record::new(p, s)).collect()
    }

    #[test]
    fn test_empty_table_returns_sentinel() {
        assert_eq!(primary_search(&[], 0), miss_sentinel(0));
        assert_eq!(secondary_search(&[], &[], 0), miss_sentinel(0));
    }

    #[test]
    fn test_single_key() {
        let table = records(&[(0, 0)]);
        let perm = [RowId::new(0)];
        assert_eq!(primary_search(&table, 0), 0);
        assert_eq!(primary_search(&table, 1), miss_sentinel(1));
        assert_eq!(secondary_search(&table, &perm, 0), 0);
        assert_eq!(secondary_search(&table, &perm, 1), miss_sentinel(1));
    }

    #[test]
    fn test_primary_search_with_gaps() {
        let table = records(&[(1, 0), (3, 0), (5, 0), (7, 0), (9, 0)]);
        for (i, key) in [1u64, 3, 5, 7, 9].iter().enumerate() {
            assert_eq!(primary_search(&table, *key), i);
        }
        for key in [0u64, 2, 4, 6, 8, 10, u64::MAX] {
            assert_eq!(primary_search(&table, key), miss_sentinel(5), "key {}", key);
        }
    }

    #[test]
    fn test_secondary_search_returns_table_offset() {
        // Record i has secondary key table[i].1; perm lists rows by secondary key.
        let table = records(&[(0, 20), (1, 0), (2, 30), (3, 10)]);
        let perm = [1, 3, 0, 2].map(RowId::new);
        assert_eq!(secondary_search(&table, &perm, 0), 1);
        assert_eq!(secondary_search(&table, &perm, 10), 3);
        assert_eq!(secondary_search(&table, &perm, 20), 0);
        assert_eq!(secondary_search(&table, &perm, 30), 2);
        assert_eq!(secondary_search(&table, &perm, 15), miss_sentinel(4));
    }

    #[test]
    fn test_miss_is_not_row_zero() {
        let dataset = Dataset::from_secondary_keys(&[0]).unwrap();
        let index = ArrayIndex::build(&dataset, KeyRole::Primary);
        assert_eq!(index.lookup(0), Some(RowId::new(0)));
        assert_eq!(index.lookup(1), None);
    }
}
