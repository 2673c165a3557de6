use super::*;

use proptest::prelude::*;

use crate::codec::{decode_key, encode_key};
use crate::index::{ArrayIndex, TreeIndex, TrieIndex};

fn key_strategy() -> impl Strategy<Value = u64> + Clone {
    // Bias toward byte boundaries, where a wrong byte order shows up first.
    prop_oneof![
        4 => any::<u64>(),
        1 => (0u32..64).prop_map(|shift| 1u64 << shift),
        1 => (1u32..64).prop_map(|shift| (1u64 << shift) - 1),
        1 => 0u64..1024,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_codec_preserves_order(a in key_strategy(), b in key_strategy()) {
        let (ea, eb) = (encode_key(a), encode_key(b));
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
        prop_assert_eq!(a == b, ea == eb);
        prop_assert_eq!(decode_key(ea), a);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_secondary_keys_are_bijection(n in 0usize..2000, seed in any::<u64>()) {
        let dataset = Dataset::generate(n, seed).unwrap();
        let mut keys: Vec<u64> = dataset.table().records().iter().map(|r| r.secondary).collect();
        keys.sort_unstable();
        prop_assert_eq!(keys, (0..n as u64).collect::<Vec<_>>());
    }

    #[test]
    fn prop_families_resolve_every_key(n in 0usize..600, seed in any::<u64>()) {
        let dataset = Dataset::generate(n, seed).unwrap();
        let table = dataset.table();
        for role in KeyRole::ALL {
            let array = ArrayIndex::build(&dataset, role);
            let tree = TreeIndex::build(table, role);
            let trie = TrieIndex::build(table, role);
            for (row, record) in table.rows() {
                let key = record.key(role);
                prop_assert_eq!(array.lookup(key), Some(row));
                prop_assert_eq!(tree.lookup(key), Some(row));
                prop_assert_eq!(trie.lookup(key), Some(row));
            }
            let absent = n as u64;
            prop_assert_eq!(array.lookup(absent), None);
            prop_assert_eq!(tree.lookup(absent), None);
            prop_assert_eq!(trie.lookup(absent), None);
        }
    }

    #[test]
    fn prop_checksums_agree(
        n in 1usize..800,
        lookups in 0usize..400,
        dataset_seed in any::<u64>(),
        seed in any::<u64>(),
    ) {
        let dataset = Dataset::generate(n, dataset_seed).unwrap();
        let workload = Workload::generate(seed, lookups, n as u64).unwrap();
        let measurements = harness::run_kinds(&IndexKind::ALL, &dataset, &workload);
        prop_assert!(harness::verify_checksums(&measurements).is_ok());
        for m in &measurements {
            prop_assert_eq!(m.hits, lookups);
        }
    }
}
