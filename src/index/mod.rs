//! Index adapters.
//!
//! Every structure under test is wrapped behind [`PointIndex`], which answers
//! a point lookup with the matching row or `None`. Each family is built twice,
//! once over primary keys and once over secondary keys.
//!
//! - [`ArrayIndex`]: binary search over the table (primary) or the secondary
//!   permutation. Nothing is built beyond what the dataset already holds.
//! - [`TreeIndex`]: `BTreeMap<u64, RowId>`.
//! - [`TrieIndex`]: `blart::TreeMap` over big-endian encoded keys.

pub mod array;
pub mod tree;
pub mod trie;

use std::fmt;

pub use array::ArrayIndex;
pub use tree::TreeIndex;
pub use trie::TrieIndex;

pub use crate::dataset::KeyRole;
use crate::dataset::RowId;

/// Structure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Family {
    /// Binary search over a sorted array.
    Array,
    /// Balanced ordered tree.
    Tree,
    /// Adaptive radix trie.
    Trie,
}

impl Family {
    /// All families in report order.
    pub const ALL: [Family; 3] = [Family::Array, Family::Tree, Family::Trie];

    /// Name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Array => "binary search",
            Family::Tree => "B+tree",
            Family::Trie => "ART",
        }
    }
}

/// One (family, role) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexKind {
    /// Structure family.
    pub family: Family,
    /// Key the structure is built over.
    pub role: KeyRole,
}

impl IndexKind {
    /// The six kinds in report order.
    pub const ALL: [IndexKind; 6] = [
        IndexKind::new(Family::Array, KeyRole::Primary),
        IndexKind::new(Family::Array, KeyRole::Secondary),
        IndexKind::new(Family::Tree, KeyRole::Primary),
        IndexKind::new(Family::Tree, KeyRole::Secondary),
        IndexKind::new(Family::Trie, KeyRole::Primary),
        IndexKind::new(Family::Trie, KeyRole::Secondary),
    ];

    /// Create a kind.
    pub const fn new(family: Family, role: KeyRole) -> Self {
        Self { family, role }
    }

    /// Kinds belonging to `families`, in report order.
    pub fn selected(families: &[Family]) -> Vec<IndexKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| families.contains(&kind.family))
            .collect()
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family.name(), self.role.name())
    }
}

/// Read-only point lookup over one key of the table.
pub trait PointIndex {
    /// Which family and role this index implements.
    fn kind(&self) -> IndexKind;

    /// Row whose key equals `key`, or `None` if no record has it.
    fn lookup(&self, key: u64) -> Option<RowId>;

    /// Number of keys reachable through the index.
    fn len(&self) -> usize;

    /// Check if the index holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
