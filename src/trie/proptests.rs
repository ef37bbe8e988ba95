use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn validate_trie<V>(trie: &Trie<V>) {
    let mut stack = vec![&trie.root];
    let mut nodes = 0usize;
    let mut terminals = 0usize;
    while let Some(node) = stack.pop() {
        nodes += 1;
        terminals += usize::from(node.is_terminal());
        if nodes > 1 {
            assert!(
                node.is_terminal() || node.has_children(),
                "empty path node left behind"
            );
        }
        let mut from = 0;
        while let Some((byte, child)) = node.next_child(from) {
            stack.push(child);
            from = u16::from(byte) + 1;
        }
    }
    assert_eq!(nodes, trie.node_count(), "node count must match the tree");
    assert_eq!(terminals, trie.len(), "terminal count must match Trie::len");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(Vec<u8>, u64),
    Delete(Vec<u8>),
    Find(Vec<u8>),
    Scan(usize),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A narrow alphabet so keys share prefixes, with both byte extremes.
    let byte = prop_oneof![Just(0u8), Just(b'a'), Just(b'b'), Just(255u8)];
    prop::collection::vec(byte, 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        45 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Delete),
        20 => key.prop_map(Op::Find),
        5 => (0usize..8).prop_map(Op::Scan),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut trie: Trie<u64> = Trie::new();
        let mut model: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(trie.insert(&key, value), model.insert(key, value));
                }
                Op::Delete(key) => {
                    prop_assert_eq!(trie.delete(&key), model.remove(&key).is_some());
                }
                Op::Find(key) => {
                    prop_assert_eq!(trie.find(&key), model.get(&key));
                }
                Op::Scan(steps) => {
                    trie.reset_cursor();
                    let mut expected = model.iter();
                    for _ in 0..steps {
                        let found = trie.scan();
                        match expected.next() {
                            Some((key, value)) => {
                                prop_assert!(found);
                                prop_assert_eq!(trie.current_pair(), Some((key.clone(), value)));
                            }
                            None => {
                                prop_assert!(!found);
                                break;
                            }
                        }
                    }
                }
            }
            prop_assert_eq!(trie.len(), model.len());
        }

        validate_trie(&trie);
        let got: Vec<(Vec<u8>, u64)> = trie.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = model.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_delete_all_prunes_to_root(keys in prop::collection::btree_set(key_strategy(), 0..64)) {
        let mut trie: Trie<()> = keys.iter().map(|key| (key.clone(), ())).collect();
        prop_assert_eq!(trie.keys().collect::<Vec<_>>(), keys.iter().cloned().collect::<Vec<_>>());

        for key in &keys {
            prop_assert!(trie.delete(key));
            validate_trie(&trie);
        }
        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 1);
    }
}
