//! Adaptive radix trie index.
//!
//! `blart` orders keys by their raw bytes. Keys are run through
//! [`encode_key`] on insert and on lookup so that byte order matches integer
//! order.

use blart::TreeMap;

use super::{Family, IndexKind, KeyRole, PointIndex};
use crate::codec::{encode_key, EncodedKey};
use crate::dataset::{RowId, Table};

/// Trie from one encoded record key to its row.
pub struct TrieIndex {
    tree: TreeMap<EncodedKey, RowId>,
    role: KeyRole,
}

impl TrieIndex {
    /// Insert every record of `table` once under its encoded `role` key.
    pub fn build(table: &Table, role: KeyRole) -> Self {
        let mut tree: TreeMap<EncodedKey, RowId> = TreeMap::new();
        for (row, record) in table.rows() {
            let old = tree.insert(encode_key(record.key(role)), row);
            debug_assert!(old.is_none(), "duplicate {} key", role.name());
        }
        Self { tree, role }
    }
}

impl PointIndex for TrieIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::new(Family::Trie, self.role)
    }

    #[inline]
    fn lookup(&self, key: u64) -> Option<RowId> {
        self.tree.get(&encode_key(key)).copied()
    }

    fn len(&self) -> usize {
        self.tree.len()
    }
}
