use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use redblack_index::{Error, RbMap, Reverse};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Generates keys from a range small enough to cause collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -20_000i64..20_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Upper bound on the height of a red-black tree holding `len` nodes.
fn height_bound(len: usize) -> f64 {
    2.0 * ((len + 1) as f64).log2()
}

/// Collects the keys reached by stepping forward from `begin` until the end cursor.
fn walk_forward<K: Copy, V, C>(map: &RbMap<K, V, C>) -> Result<Vec<K>, Error> {
    let mut keys = Vec::new();
    let mut cursor = map.begin();
    while !cursor.is_end() {
        keys.push(*map.get_at(cursor)?.0);
        cursor = map.successor(cursor)?;
    }
    Ok(keys)
}

/// Collects the keys reached by stepping backward from the end cursor until it comes round again.
fn walk_backward<K: Copy, V, C>(map: &RbMap<K, V, C>) -> Result<Vec<K>, Error> {
    let mut keys = Vec::new();
    let mut cursor = map.predecessor(map.end())?;
    while !cursor.is_end() {
        keys.push(*map.get_at(cursor)?.0);
        cursor = map.predecessor(cursor)?;
    }
    Ok(keys)
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    EraseAt(i64),
    Get(i64),
    ContainsKey(i64),
    GetKeyValue(i64),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        2 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::EraseAt),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::GetKeyValue),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
    ]
}

// ─── Core operations ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both RbMap and BTreeMap and asserts identical
    /// results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut rb_map: RbMap<i64, i64> = RbMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let rb_result = rb_map.insert(*k, *v);
                    let bt_result = bt_map.insert(*k, *v);
                    prop_assert_eq!(rb_result, bt_result, "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    let rb_result = rb_map.remove(k);
                    let bt_result = bt_map.remove(k);
                    prop_assert_eq!(rb_result, bt_result, "remove({})", k);
                }
                MapOp::EraseAt(k) => {
                    let cursor = rb_map.find(k);
                    if bt_map.remove(k).is_some() {
                        let before = rb_map.erase(cursor).unwrap();
                        let expected = bt_map.range(..*k).next_back().map(|(&k, &v)| (k, v));
                        let actual = rb_map.get_at(before).ok().map(|(&k, &v)| (k, v));
                        prop_assert_eq!(actual, expected, "erase({}) returned the wrong cursor", k);
                    } else {
                        prop_assert!(cursor.is_end());
                        prop_assert_eq!(rb_map.erase(cursor), Err(Error::EndCursor));
                    }
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(rb_map.get(k), bt_map.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(rb_map.contains_key(k), bt_map.contains_key(k), "contains_key({})", k);
                }
                MapOp::GetKeyValue(k) => {
                    prop_assert_eq!(rb_map.get_key_value(k), bt_map.get_key_value(k), "get_key_value({})", k);
                }
                MapOp::FirstKeyValue => {
                    prop_assert_eq!(rb_map.first_key_value(), bt_map.first_key_value(), "first_key_value");
                }
                MapOp::LastKeyValue => {
                    prop_assert_eq!(rb_map.last_key_value(), bt_map.last_key_value(), "last_key_value");
                }
                MapOp::PopFirst => {
                    prop_assert_eq!(rb_map.pop_first(), bt_map.pop_first(), "pop_first");
                }
                MapOp::PopLast => {
                    prop_assert_eq!(rb_map.pop_last(), bt_map.pop_last(), "pop_last");
                }
            }
            prop_assert_eq!(rb_map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(rb_map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
        }

        prop_assert!(rb_map.is_rb_tree());
        prop_assert!(rb_map.height() as f64 <= height_bound(rb_map.len()));
    }

    /// Tests that iteration order matches BTreeMap after random insertions.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RbMap<i64, i64> = RbMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            rb_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        // Forward iteration
        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_items, &bt_items, "iter() mismatch");

        // Reverse iteration
        let rb_rev: Vec<_> = rb_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let bt_rev: Vec<_> = bt_map.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&rb_rev, &bt_rev, "iter().rev() mismatch");

        let rb_keys: Vec<_> = rb_map.keys().copied().collect();
        let bt_keys: Vec<_> = bt_map.keys().copied().collect();
        prop_assert_eq!(&rb_keys, &bt_keys, "keys() mismatch");

        let rb_vals: Vec<_> = rb_map.values().copied().collect();
        let bt_vals: Vec<_> = bt_map.values().copied().collect();
        prop_assert_eq!(&rb_vals, &bt_vals, "values() mismatch");

        let rb_into: Vec<_> = rb_map.clone().into_iter().collect();
        let bt_into: Vec<_> = bt_map.clone().into_iter().collect();
        prop_assert_eq!(&rb_into, &bt_into, "into_iter() mismatch");

        let rb_into_keys: Vec<_> = rb_map.clone().into_keys().collect();
        let bt_into_keys: Vec<_> = bt_map.clone().into_keys().collect();
        prop_assert_eq!(&rb_into_keys, &bt_into_keys, "into_keys() mismatch");

        let rb_into_vals: Vec<_> = rb_map.clone().into_values().collect();
        let bt_into_vals: Vec<_> = bt_map.clone().into_values().collect();
        prop_assert_eq!(&rb_into_vals, &bt_into_vals, "into_values() mismatch");

        let rb_into_rev: Vec<_> = rb_map.into_iter().rev().collect();
        let bt_into_rev: Vec<_> = bt_map.into_iter().rev().collect();
        prop_assert_eq!(&rb_into_rev, &bt_into_rev, "into_iter().rev() mismatch");
    }

    /// Tests ExactSizeIterator and DoubleEndedIterator behavior.
    #[test]
    fn iter_size_and_double_ended(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let rb_map: RbMap<i64, i64> = entries.iter().copied().collect();

        let iter = rb_map.iter();
        prop_assert_eq!(iter.len(), rb_map.len(), "ExactSizeIterator len mismatch");

        // Alternating front/back should yield all elements exactly once.
        let mut from_front = Vec::new();
        let mut from_back = Vec::new();
        let mut iter = rb_map.iter();
        let mut toggle = true;
        loop {
            if toggle {
                if let Some(item) = iter.next() {
                    from_front.push(item);
                } else {
                    break;
                }
            } else if let Some(item) = iter.next_back() {
                from_back.push(item);
            } else {
                break;
            }
            toggle = !toggle;
        }
        prop_assert_eq!(iter.next(), None, "iterator is not fused");
        prop_assert_eq!(from_front.len() + from_back.len(), rb_map.len());

        from_back.reverse();
        from_front.extend(from_back);
        let expected: Vec<_> = rb_map.iter().collect();
        prop_assert_eq!(from_front, expected);
    }

    /// Tests that cursor walks in both directions visit the same keys as BTreeMap iteration.
    #[test]
    fn cursor_walks_match_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000)) {
        let rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        let forward = walk_forward(&rb_map).unwrap();
        let expected: Vec<_> = bt_map.keys().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let backward = walk_backward(&rb_map).unwrap();
        let expected: Vec<_> = bt_map.keys().rev().copied().collect();
        prop_assert_eq!(&backward, &expected);
    }

    /// Tests that advancing by a count lands on the same entry as indexing BTreeMap's keys,
    /// with the end cursor as the position after the last key.
    #[test]
    fn advance_matches_btreemap_positions(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..500),
        start in any::<usize>(),
        steps in -1_000isize..1_000,
    ) {
        let rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let keys: Vec<i64> = rb_map.keys().copied().collect();
        let positions = keys.len() as isize + 1;

        let start = (start % keys.len()) as isize;
        let cursor = rb_map.find(&keys[start as usize]);
        let target = (start + steps).rem_euclid(positions) as usize;

        let landed = rb_map.advance(cursor, steps).unwrap();
        prop_assert_eq!(rb_map.get_at(landed).ok().map(|(k, _)| *k), keys.get(target).copied());
    }

    /// Erasing through cursors while walking forward removes exactly the chosen entries.
    #[test]
    fn erase_while_walking_matches_retain(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..2_000),
        modulus in 2i64..7,
    ) {
        let mut rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        let mut cursor = rb_map.begin();
        while !cursor.is_end() {
            let (&key, _) = rb_map.get_at(cursor).unwrap();
            if key % modulus == 0 {
                cursor = rb_map.erase(cursor).unwrap();
                prop_assert!(rb_map.is_rb_tree());
            }
            cursor = rb_map.successor(cursor).unwrap();
        }
        bt_map.retain(|k, _| k % modulus != 0);

        let rb_items: Vec<_> = rb_map.iter().map(|(&k, &v)| (k, v)).collect();
        let bt_items: Vec<_> = bt_map.into_iter().collect();
        prop_assert_eq!(rb_items, bt_items);
    }

    #[test]
    fn get_mut_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        probes in proptest::collection::vec(key_strategy(), 100),
    ) {
        let mut rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for k in &probes {
            if let Some(v) = rb_map.get_mut(k) {
                *v = v.wrapping_add(1);
            }
            if let Some(v) = bt_map.get_mut(k) {
                *v = v.wrapping_add(1);
            }
        }
        prop_assert!(rb_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn iter_mut_matches(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (k, v) in &mut rb_map {
            *v = v.wrapping_mul(3).wrapping_add(*k);
        }
        for (k, v) in &mut bt_map {
            *v = v.wrapping_mul(3).wrapping_add(*k);
        }
        prop_assert!(rb_map.iter().eq(bt_map.iter()));

        for v in rb_map.values_mut().rev() {
            *v = v.wrapping_sub(1);
        }
        for v in bt_map.values_mut().rev() {
            *v = v.wrapping_sub(1);
        }
        prop_assert!(rb_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn retain_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        rb_map.retain(|k, v| {
            *v = v.wrapping_add(1);
            k % 3 != 0
        });
        bt_map.retain(|k, v| {
            *v = v.wrapping_add(1);
            k % 3 != 0
        });

        prop_assert!(rb_map.is_rb_tree());
        prop_assert!(rb_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn clear_empties_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        rb_map.clear();
        prop_assert!(rb_map.is_empty());
        prop_assert_eq!(rb_map.iter().next(), None);
        prop_assert!(rb_map.begin().is_end());
    }

    #[test]
    fn clone_eq_and_hash_agree(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let cloned = rb_map.clone();
        prop_assert_eq!(&rb_map, &cloned);
        prop_assert!(cloned.is_rb_tree());

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        rb_map.hash(&mut h1);
        cloned.hash(&mut h2);
        prop_assert_eq!(h1.finish(), h2.finish(), "equal maps should have equal hashes");
    }

    #[test]
    fn ord_matches_btreemap(
        a in proptest::collection::vec((key_strategy(), value_strategy()), 0..200),
        b in proptest::collection::vec((key_strategy(), value_strategy()), 0..200),
    ) {
        let rb_a: RbMap<i64, i64> = a.iter().copied().collect();
        let rb_b: RbMap<i64, i64> = b.iter().copied().collect();
        let bt_a: BTreeMap<i64, i64> = a.iter().copied().collect();
        let bt_b: BTreeMap<i64, i64> = b.iter().copied().collect();

        prop_assert_eq!(rb_a == rb_b, bt_a == bt_b);
        prop_assert_eq!(rb_a.cmp(&rb_b), bt_a.cmp(&bt_b));
    }

    #[test]
    fn index_by_key_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let rb_map: RbMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for k in bt_map.keys() {
            prop_assert_eq!(rb_map[k], bt_map[k]);
        }
    }

    #[test]
    fn extend_matches_btreemap(
        first in proptest::collection::vec((key_strategy(), value_strategy()), 0..1_000),
        second in proptest::collection::vec((key_strategy(), value_strategy()), 0..1_000),
    ) {
        let mut rb_map: RbMap<i64, i64> = first.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = first.iter().copied().collect();

        rb_map.extend(second.iter().map(|(k, v)| (k, v)));
        bt_map.extend(second.iter().map(|(k, v)| (k, v)));
        prop_assert!(rb_map.iter().eq(bt_map.iter()));
    }

    /// Any insertion order keeps the height within the red-black bound.
    #[test]
    fn height_stays_logarithmic(keys in proptest::collection::vec(any::<u32>(), 0..TEST_SIZE)) {
        let rb_map: RbMap<u32, ()> = keys.iter().map(|&k| (k, ())).collect();
        prop_assert!(rb_map.is_rb_tree());
        prop_assert!(rb_map.height() as f64 <= height_bound(rb_map.len()));
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

fn sample_map() -> RbMap<i32, &'static str> {
    let mut map = RbMap::new();
    for (key, value) in [(10, "ten"), (20, "twenty"), (5, "five"), (15, "fifteen"), (25, "twenty-five"), (3, "three")] {
        assert_eq!(map.insert(key, value), None);
        assert!(map.is_rb_tree());
    }
    map
}

#[test]
fn sample_insertions_iterate_in_order() {
    let map = sample_map();
    assert_eq!(map.len(), 6);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 5, 10, 15, 20, 25]);
    assert_eq!(map.first_key_value(), Some((&3, &"three")));
    assert_eq!(map.last_key_value(), Some((&25, &"twenty-five")));
    assert_eq!(map.get_at(map.find(&15)), Ok((&15, &"fifteen")));
    assert!(map.find(&7).is_end());
}

#[test]
fn erasing_root_keeps_tree_valid() {
    let mut map = sample_map();

    let before = map.erase(map.find(&10)).unwrap();
    assert_eq!(map.get_at(before), Ok((&5, &"five")));
    assert_eq!(map.len(), 5);
    assert!(map.is_rb_tree());
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 5, 15, 20, 25]);
    assert_eq!(walk_forward(&map), Ok(vec![3, 5, 15, 20, 25]));
    assert_eq!(walk_backward(&map), Ok(vec![25, 20, 15, 5, 3]));
}

#[test]
fn erasing_an_inner_node_moves_the_next_entry_under_its_cursor() {
    let mut map = sample_map();
    let ten = map.find(&10);
    let fifteen = map.find(&15);

    map.erase(ten).unwrap();

    assert_eq!(map.get_at(ten), Ok((&15, &"fifteen")));
    assert_eq!(map.get_at(fifteen), Err(Error::StaleCursor));
}

#[test]
fn erasing_the_first_entry_returns_end() {
    let mut map = sample_map();

    let before = map.erase(map.begin()).unwrap();
    assert!(before.is_end());
    assert_eq!(map.successor(before), Ok(map.begin()));
    assert_eq!(map.first_key_value(), Some((&5, &"five")));
}

#[test]
fn erasing_the_last_entry_updates_the_maximum() {
    let mut map = sample_map();

    let last = map.predecessor(map.end()).unwrap();
    let before = map.erase(last).unwrap();
    assert_eq!(map.get_at(before), Ok((&20, &"twenty")));
    assert_eq!(map.last_key_value(), Some((&20, &"twenty")));
    assert_eq!(map.predecessor(map.end()), Ok(before));
}

#[test]
fn min_and_max_track_every_erase() {
    let mut map: RbMap<i32, ()> = (1..=50).map(|k| (k, ())).collect();
    let mut model: BTreeMap<i32, ()> = (1..=50).map(|k| (k, ())).collect();

    for k in [1, 50, 2, 49, 25, 3, 48, 26, 24] {
        map.erase(map.find(&k)).unwrap();
        model.remove(&k);
        assert_eq!(map.first_key_value(), model.first_key_value());
        assert_eq!(map.last_key_value(), model.last_key_value());
        assert!(map.is_rb_tree());
    }
}

#[test]
fn insert_existing_key_updates_in_place() {
    let mut map = sample_map();
    let cursor = map.find(&15);

    assert_eq!(map.insert(15, "FIFTEEN"), Some("fifteen"));
    assert_eq!(map.len(), 6);
    assert_eq!(map.get_at(cursor), Ok((&15, &"FIFTEEN")));
    assert!(map.is_rb_tree());
}

#[test]
fn end_cursor_is_rejected_where_an_entry_is_needed() {
    let mut map = sample_map();

    assert_eq!(map.get_at(map.end()), Err(Error::EndCursor));
    assert_eq!(map.get_at_mut(map.end()), Err(Error::EndCursor));
    assert_eq!(map.erase(map.end()), Err(Error::EndCursor));
    assert_eq!(map.len(), 6);
}

#[test]
fn stale_cursor_is_rejected() {
    let mut map = sample_map();
    let three = map.find(&3);
    map.erase(three).unwrap();

    assert_eq!(map.get_at(three), Err(Error::StaleCursor));
    assert_eq!(map.successor(three), Err(Error::StaleCursor));
    assert_eq!(map.predecessor(three), Err(Error::StaleCursor));
    assert_eq!(map.erase(three), Err(Error::StaleCursor));
    assert_eq!(map.len(), 5);

    // The freed slot is reused by the next insertion; the old cursor must not see it.
    map.insert(1, "one");
    assert_eq!(map.get_at(three), Err(Error::StaleCursor));
}

#[test]
fn advance_rejects_stale_cursor() {
    let mut map = sample_map();
    let three = map.find(&3);
    map.erase(three).unwrap();
    assert_eq!(map.advance(three, 0), Err(Error::StaleCursor));
    assert_eq!(map.advance(three, 1), Err(Error::StaleCursor));
    assert_eq!(map.advance(map.end(), 0), Ok(map.end()));
}

#[test]
fn cursors_wrap_through_end() {
    let map = sample_map();

    assert_eq!(map.successor(map.end()), Ok(map.begin()));
    assert!(map.predecessor(map.begin()).unwrap().is_end());
    assert_eq!(map.get_at(map.predecessor(map.end()).unwrap()), Ok((&25, &"twenty-five")));

    let empty: RbMap<i32, i32> = RbMap::new();
    assert_eq!(empty.begin(), empty.end());
    assert_eq!(empty.successor(empty.end()), Ok(empty.end()));
    assert_eq!(empty.predecessor(empty.end()), Ok(empty.end()));
}

#[test]
fn ascending_and_descending_inserts_stay_balanced() {
    let ascending: RbMap<i32, i32> = (1..1000).map(|k| (k, k)).collect();
    assert!(ascending.is_rb_tree());
    assert!(ascending.height() as f64 <= height_bound(ascending.len()));

    let descending: RbMap<i32, i32> = (1..1000).rev().map(|k| (k, k)).collect();
    assert!(descending.is_rb_tree());
    assert!(descending.height() as f64 <= height_bound(descending.len()));

    assert_eq!(ascending, descending);
}

#[test]
fn clear_then_reinsert_round_trips() {
    let mut map = sample_map();
    let old = map.find(&20);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.first_key_value(), None);
    assert_eq!(map.get_at(old), Err(Error::StaleCursor));

    for (key, value) in [(10, "ten"), (20, "twenty"), (5, "five"), (15, "fifteen"), (25, "twenty-five"), (3, "three")] {
        map.insert(key, value);
    }
    assert_eq!(map, sample_map());
    assert!(map.is_rb_tree());
    assert_eq!(map.get_at(old), Err(Error::StaleCursor));
}

#[test]
fn get_at_mut_updates_the_value() {
    let mut map = sample_map();
    let cursor = map.find(&5);

    let (key, value) = map.get_at_mut(cursor).unwrap();
    assert_eq!(*key, 5);
    *value = "FIVE";
    assert_eq!(map[&5], "FIVE");
}

#[test]
fn custom_comparators_order_the_map() {
    let mut reversed = RbMap::with_comparator(Reverse);
    reversed.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    assert_eq!(reversed.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(reversed.get(&2), Some(&'b'));

    // Case-insensitive keys: equivalent keys replace the stored key as well as the value.
    let mut folded = RbMap::with_comparator(|a: &String, b: &String| a.to_lowercase() < b.to_lowercase());
    folded.insert(String::from("Apple"), 1);
    folded.insert(String::from("banana"), 2);
    assert_eq!(folded.insert(String::from("APPLE"), 3), Some(1));
    assert_eq!(folded.len(), 2);
    assert_eq!(folded.first_key_value(), Some((&String::from("APPLE"), &3)));
    assert!(folded.is_rb_tree());
}

#[test]
fn borrowed_lookups() {
    let mut map: RbMap<String, usize> = RbMap::new();
    for word in ["delta", "alpha", "charlie", "bravo"] {
        map.insert(word.to_owned(), word.len());
    }

    assert_eq!(map.get("charlie"), Some(&7));
    assert!(map.contains_key("alpha"));
    assert_eq!(map.remove_entry("bravo"), Some((String::from("bravo"), 5)));
    assert!(map.find("bravo").is_end());
    assert_eq!(map["delta"], 5);
}

#[test]
fn debug_lists_entries_in_order() {
    let map = RbMap::from([(2, "b"), (1, "a")]);
    assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
}

#[test]
fn capacity_is_reserved_up_front() {
    let mut map: RbMap<u32, u32> = RbMap::with_capacity(64);
    let capacity = map.capacity();
    assert!(capacity >= 64);

    map.extend((0..64).map(|k| (k, k)));
    assert_eq!(map.capacity(), capacity);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_panics_on_missing_key() {
    let map = sample_map();
    let _value: &str = map[&7];
}
