//! Randomized workloads re-checking the container invariants after every
//! batch of mutations:
//!
//! - sortedness: no entry's value is less than an earlier entry's value
//! - permutation: the order sequence is exactly the index's key set
//! - range correctness: bounded queries agree with the bound predicate

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use urchin_core::{SortedMap, asc};

fn check_invariants(map: &SortedMap<u64, i64>) {
    let keys = map.keys();

    // Permutation: same cardinality, no duplicates, full membership.
    assert_eq!(map.len(), map.map().len());
    let distinct: HashSet<_> = keys.iter().collect();
    assert_eq!(distinct.len(), keys.len());
    for key in keys {
        assert!(map.has(key), "order holds a key missing from the index");
    }

    // Sortedness: non-decreasing under the comparator.
    let values: Vec<i64> = keys.iter().map(|k| *map.get(k).unwrap()).collect();
    for pair in values.windows(2) {
        assert!(
            !asc::<i64>(&pair[1], &pair[0]),
            "order regressed: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_random_mutation_sequences_keep_invariants() {
    let mut rng = rand::rng();
    let mut map = SortedMap::new(Some(asc::<i64>));

    for round in 0..200 {
        for _ in 0..50 {
            let key = rng.random_range(0..500u64);
            // Narrow value domain on purpose, to force tie clusters.
            let val = rng.random_range(0..25i64);

            match rng.random_range(0..3u8) {
                0 => {
                    let existed = map.has(&key);
                    assert_eq!(!existed, map.insert(key, val));
                }
                1 => {
                    let existed = map.has(&key);
                    assert_eq!(existed, map.delete(&key));
                }
                _ => {
                    map.replace(key, val);
                    assert_eq!(Some(&val), map.get(&key));
                }
            }
        }

        if round % 10 == 0 {
            check_invariants(&map);
        }
    }

    check_invariants(&map);
}

#[test]
fn test_random_bounds_agree_with_predicate() {
    let mut rng = rand::rng();
    let mut map = SortedMap::new(Some(asc::<i64>));

    for key in 0..300u64 {
        map.insert(key, rng.random_range(0..40i64));
    }

    let choices = [None, Some(-5i64), Some(0), Some(13), Some(20), Some(39), Some(80)];
    for _ in 0..500 {
        let lower = *choices.choose(&mut rng).unwrap();
        let upper = *choices.choose(&mut rng).unwrap();

        let yielded: HashSet<u64> = map
            .range(lower.as_ref(), upper.as_ref())
            .map(|(k, _)| *k)
            .collect();

        let expected: HashSet<u64> = map
            .iter()
            .filter(|&(_, v)| {
                lower.as_ref().is_none_or(|lo| !asc::<i64>(v, lo))
                    && upper.as_ref().is_none_or(|hi| !asc::<i64>(hi, v))
            })
            .map(|(k, _)| *k)
            .collect();

        assert_eq!(expected, yielded, "lower={lower:?} upper={upper:?}");
    }
}

#[test]
fn test_reverse_symmetry_after_random_churn() {
    let mut rng = rand::rng();
    let mut map = SortedMap::new(Some(asc::<i64>));

    for _ in 0..1000 {
        let key = rng.random_range(0..200u64);
        if rng.random_bool(0.3) {
            map.delete(&key);
        } else {
            map.replace(key, rng.random_range(0..10i64));
        }
    }

    let forward: Vec<u64> = map.iter().map(|(k, _)| *k).collect();
    let mut backward: Vec<u64> = map.iter().rev().map(|(k, _)| *k).collect();
    backward.reverse();
    assert_eq!(forward, backward);
}
