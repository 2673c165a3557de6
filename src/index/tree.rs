//! Ordered tree index.
//!
//! Integer keys already order the way the tree needs, so they are inserted
//! as-is.

use std::collections::BTreeMap;

use super::{Family, IndexKind, KeyRole, PointIndex};
use crate::dataset::{RowId, Table};

/// `BTreeMap` from one record key to its row.
pub struct TreeIndex {
    map: BTreeMap<u64, RowId>,
    role: KeyRole,
}

impl TreeIndex {
    /// Insert every record of `table` once under its `role` key.
    pub fn build(table: &Table, role: KeyRole) -> Self {
        let mut map: BTreeMap<u64, RowId> = BTreeMap::new();
        for (row, record) in table.rows() {
            let old = map.insert(record.key(role), row);
            debug_assert!(old.is_none(), "duplicate {} key", role.name());
        }
        Self { map, role }
    }
}

impl PointIndex for TreeIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::new(Family::Tree, self.role)
    }

    #[inline]
    fn lookup(&self, key: u64) -> Option<RowId> {
        self.map.get(&key).copied()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
