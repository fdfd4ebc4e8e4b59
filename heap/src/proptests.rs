use super::*;

use proptest::prelude::*;

fn validate_heap(h: &DHeap<i32>) {
    let keys = h.as_slice();
    assert!(h.len() <= h.capacity(), "size past capacity");
    for i in 1..keys.len() {
        let p = h.parent(i);
        assert!(
            keys[p] >= keys[i],
            "heap order broken at {i}: parent {} < child {}",
            keys[p],
            keys[i]
        );
    }
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    ExtractMax,
    IncreaseKey(usize, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-1000i32..1000).prop_map(Op::Insert),
        3 => Just(Op::ExtractMax),
        1 => (0usize..64, -1000i32..1000).prop_map(|(i, k)| Op::IncreaseKey(i, k)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn extraction_is_sorted_and_complete(keys in prop::collection::vec(any::<i32>(), 0..200), d in 2usize..9) {
        let mut h = DHeap::new(keys.len(), d);
        for &k in &keys {
            h.insert(k).unwrap();
        }
        validate_heap(&h);
        prop_assert_eq!(h.len(), keys.len());

        let drained: Vec<i32> = h.collect();
        let mut expected = keys.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn random_ops_keep_invariants(ops in prop::collection::vec(op_strategy(), 0..300), d in 2usize..7, cap in 0usize..48) {
        let mut h = DHeap::new(cap, d);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    let before = h.as_slice().to_vec();
                    match h.insert(k) {
                        Ok(()) => model.push(k),
                        Err(e) => {
                            prop_assert_eq!(e, HeapError::CapacityExceeded { capacity: cap });
                            prop_assert_eq!(h.as_slice(), &before[..]);
                        }
                    }
                }
                Op::ExtractMax => {
                    model.sort_unstable();
                    match model.pop() {
                        Some(max) => prop_assert_eq!(h.extract_max(), Ok(max)),
                        None => prop_assert_eq!(h.extract_max(), Err(HeapError::EmptyHeap)),
                    }
                }
                Op::IncreaseKey(i, k) => {
                    let before = h.as_slice().to_vec();
                    match h.increase_key(i, k) {
                        Ok(()) => {
                            if k <= before[i] {
                                // raising to a lower or equal key is observably a no-op
                                prop_assert_eq!(h.as_slice(), &before[..]);
                            } else {
                                let pos = model.iter().position(|&m| m == before[i]).unwrap();
                                model[pos] = k;
                            }
                        }
                        Err(e) => {
                            prop_assert!(i >= before.len());
                            prop_assert_eq!(e, HeapError::IndexOutOfRange { index: i, size: before.len() });
                            prop_assert_eq!(h.as_slice(), &before[..]);
                        }
                    }
                }
            }
            validate_heap(&h);
            prop_assert_eq!(h.len(), model.len());
        }
    }

    #[test]
    fn from_vec_builds_heap(keys in prop::collection::vec(-50i32..50, 0..150), d in 2usize..9) {
        let h = DHeap::from_vec(keys.clone(), d);
        validate_heap(&h);
        prop_assert_eq!(h.len(), keys.len());
        prop_assert_eq!(h.peek().copied(), keys.iter().max().copied());
    }

    #[test]
    fn levels_cover_valid_region(keys in prop::collection::vec(any::<i32>(), 1..120), d in 2usize..6) {
        let h = DHeap::from_vec(keys, d);
        let levels: Vec<&[i32]> = h.levels().collect();
        prop_assert_eq!(Some(levels.len() - 1), h.height());
        for (depth, level) in levels.iter().enumerate() {
            let full = d.pow(depth as u32);
            prop_assert!(level.len() <= full);
            if depth + 1 < levels.len() {
                prop_assert_eq!(level.len(), full);
            }
        }
        prop_assert_eq!(levels.concat(), h.as_slice());
    }
}
