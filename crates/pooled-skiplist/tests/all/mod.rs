/// Generates the tests shared by every list configuration.
///
/// `$list` is a `SkipList<u32, _, _, _>` type whose comparator implements `Default`, and
/// `$sort` is a `fn(&mut Vec<u32>)` which sorts values into the order `$list` should keep.
macro_rules! tests_for_list_config {
    ($list:ty, $sort:expr $(,)?) => {
        fn expected_order(values: &[u32]) -> Vec<u32> {
            let sort: fn(&mut Vec<u32>) = $sort;
            let mut values = values.to_vec();
            sort(&mut values);
            values
        }

        /// Expand a multiset of counts into the sequence a list should iterate over.
        fn expected_from_counts(counts: &BTreeMap<u32, usize>) -> Vec<u32> {
            let values: Vec<u32> = counts
                .iter()
                .flat_map(|(&value, &count)| iter::repeat_n(value, count))
                .collect();
            expected_order(&values)
        }

        // ================================
        //  Empty List
        // ================================

        #[test]
        fn empty_list() {
            let list = <$list>::new_seeded(1);

            assert_eq!(list.len(), 0);
            assert!(list.is_empty());
            assert!(!list.find(&0));
            assert!(!list.find(&u32::MAX));
            assert!(list.iter().next().is_none());
            assert!(list.first().is_none());
            assert!(list.last().is_none());
            assert_eq!(list.layer_hint(), 0);
            assert_eq!(list.pool_stats().blocks, 0);

            let _check_that_debug_works = format!("{list:?}");
        }

        #[test]
        fn remove_from_empty_list() {
            let mut list = <$list>::new_seeded(1);

            assert!(!list.remove(&7));
            assert!(list.take(&7).is_none());
            assert!(list.pop_first().is_none());
            assert!(list.is_empty());
        }

        // ================================
        //  Small lists
        // ================================

        #[test]
        fn insert_find_remove() {
            let mut list = <$list>::new_seeded(2);

            list.insert(5);
            list.insert(42);

            assert!(list.iter().copied().eq(expected_order(&[5, 42])));
            assert!(list.find(&42));
            assert_eq!(list.get(&42), Some(&42));
            assert_eq!(list.len(), 2);

            assert!(list.remove(&42));
            assert!(list.iter().copied().eq([5]));
            assert!(!list.find(&42));
            assert_eq!(list.len(), 1);
        }

        #[test]
        fn removing_absent_value_changes_nothing() {
            let mut list = <$list>::new_seeded(3);
            list.extend([10, 20, 30]);
            let before: Vec<u32> = list.iter().copied().collect();

            assert!(!list.remove(&15));
            assert!(!list.remove(&0));
            assert!(!list.remove(&31));

            assert_eq!(list.len(), 3);
            assert!(list.iter().copied().eq(before));
        }

        #[test]
        fn duplicates_are_kept() {
            let mut list = <$list>::new_seeded(4);
            list.extend([3, 1, 3, 3, 2]);

            assert_eq!(list.len(), 5);
            assert!(list.iter().copied().eq(expected_order(&[1, 2, 3, 3, 3])));

            assert_eq!(list.take(&3), Some(3));
            assert_eq!(list.len(), 4);
            assert!(list.find(&3));
            assert!(list.iter().copied().eq(expected_order(&[1, 2, 3, 3])));
        }

        #[test]
        fn ends_of_list() {
            let mut list = <$list>::new_seeded(5);
            let values = [8, 2, 9, 4, 6];
            list.extend(values);
            let expected = expected_order(&values);

            assert_eq!(list.first(), expected.first());
            assert_eq!(list.last(), expected.last());

            let mut popped = Vec::new();
            while let Some(value) = list.pop_first() {
                popped.push(value);
            }
            assert_eq!(popped, expected);
            assert!(list.is_empty());
            assert!(list.last().is_none());
        }

        #[test]
        fn insert_then_remove_everything() {
            let mut list = <$list>::new_seeded(6);
            let values: Vec<u32> = (0..300).map(|value| (value * 7919) % 257).collect();

            for &value in &values {
                list.insert(value);
            }
            assert_eq!(list.len(), values.len());

            for value in values.iter().rev() {
                assert!(list.remove(value));
            }

            assert_eq!(list.len(), 0);
            assert!(list.iter().next().is_none());
            // The hint is allowed to stay high after removals.
            assert!(list.layer_hint() >= 1);
            assert_eq!(list.pool_stats().live_chunks, 0);
        }

        #[test]
        fn clear_and_assign() {
            let mut list = <$list>::new_seeded(7);
            list.extend(0..100);
            let blocks = list.pool_stats().blocks;

            list.clear();
            assert!(list.is_empty());
            assert_eq!(list.layer_hint(), 0);
            assert_eq!(list.pool_stats().blocks, blocks);

            list.assign([3, 1, 2]);
            assert!(list.iter().copied().eq(expected_order(&[1, 2, 3])));
            list.assign([9]);
            assert!(list.iter().copied().eq([9]));
        }

        #[test]
        fn insert_with_constructs_value() {
            let mut list = <$list>::new_seeded(8);
            list.insert_with(|| 6 * 7);
            list.try_insert(1).unwrap();

            assert!(list.find(&42));
            assert!(list.find(&1));
            assert_eq!(list.len(), 2);
        }

        // ================================
        //  Copies and moves
        // ================================

        #[test]
        fn independent_list_clone() {
            let mut list = <$list>::new_seeded(42);
            list.extend([1, 5, 3]);

            let mut other_list = list.clone();
            assert_eq!(list, other_list);
            assert!(list.iter().eq(other_list.iter()));

            list.insert(2);
            other_list.insert(4);
            assert!(other_list.remove(&1));

            assert!(list.iter().copied().eq(expected_order(&[1, 2, 3, 5])));
            assert!(other_list.iter().copied().eq(expected_order(&[3, 4, 5])));
            assert_ne!(list, other_list);
        }

        #[test]
        fn clone_of_empty_list() {
            let list = <$list>::new_seeded(43);
            let copy = list.clone();

            assert!(copy.is_empty());
            assert_eq!(list, copy);
        }

        #[test]
        fn moved_from_list_is_reusable() {
            let mut list = <$list>::new_seeded(44);
            list.extend([7, 8]);

            let moved = mem::take(&mut list);
            assert!(moved.iter().copied().eq(expected_order(&[7, 8])));

            assert!(list.is_empty());
            assert!(!list.find(&7));

            list.insert(1);
            assert!(list.iter().copied().eq([1]));
            assert_eq!(moved.len(), 2);
        }

        #[test]
        fn same_seed_same_shape() {
            let mut first = <$list>::new_seeded(45);
            let mut second = <$list>::new_seeded(45);

            for value in 0..500 {
                first.insert(value);
                second.insert(value);
                assert_eq!(first.layer_hint(), second.layer_hint());
            }
        }

        // ================================
        //  Large List
        // ================================

        #[cfg_attr(miri, ignore)]
        #[test]
        fn many_random_operations() {
            let mut prng = Rand32::new(0x_1234_5678);
            let mut list = <$list>::new_seeded(0x_dead_beef);
            // The multiset the list should hold: value to number of copies.
            let mut counts: BTreeMap<u32, usize> = BTreeMap::new();

            for round in 0..4000 {
                let value = prng.rand_u32() % 200;

                if prng.rand_u32() % 3 == 0 {
                    let expected_removal = if let Some(count) = counts.get_mut(&value) {
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(&value);
                        }
                        true
                    } else {
                        false
                    };
                    assert_eq!(list.remove(&value), expected_removal);
                } else {
                    list.insert(value);
                    *counts.entry(value).or_insert(0) += 1;
                }

                assert_eq!(list.find(&value), counts.contains_key(&value));

                if round % 500 == 0 {
                    assert!(list.iter().copied().eq(expected_from_counts(&counts)));
                }
            }

            let expected = expected_from_counts(&counts);
            assert_eq!(list.len(), expected.len());
            assert_eq!(list.iter().len(), expected.len());
            assert!(list.iter().copied().eq(expected.iter().copied()));
            assert!(list.into_iter().eq(expected));
        }
    };
}

pub(crate) use tests_for_list_config;
