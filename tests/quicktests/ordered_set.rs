use bstset::{Error, OrderedSet};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to an `OrderedSet` and a `BTreeSet`, checking
/// after every step that they agree. This way we can ensure that after a random
/// smattering of inserts, rebuilds and clears we still have the same keys.
fn do_ops<K>(ops: &[Op<K>], set: &mut OrderedSet<K>, model: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => {
                let expected = if model.insert(k.clone()) {
                    Ok(())
                } else {
                    Err(Error::DuplicateKey)
                };
                set.insert(k.clone()) == expected
            }
            Op::Contains(k) => set.contains(k) == model.contains(k),
            Op::Range(min, max) => match set.range(min, max) {
                Ok(keys) => {
                    min <= max && keys.into_iter().eq(model.range(min.clone()..max.clone()))
                }
                Err(Error::InvalidArgument(_)) => min > max,
                Err(_) => false,
            },
            Op::Rebalance => {
                set.rebalance();
                true
            }
            Op::Clear => {
                set.clear();
                model.clear();
                true
            }
            Op::Iter => set.iter().eq(model.iter()),
        };

        if !agrees || set.len() != model.len() {
            return false;
        }
        // The whole-tree checks live here rather than in `insert` so inserts
        // stay proportional to the tree's height.
        if !within_threshold(set) || !set.iter().eq(model.iter()) {
            return false;
        }
    }

    true
}

/// Every balance factor is below the threshold, or the threshold is off.
fn within_threshold<K>(set: &OrderedSet<K>) -> bool {
    set.threshold() <= 1
        || set
            .walk(usize::MAX)
            .all(|node| node.balance_factor.abs() < set.threshold())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>, threshold: i8) -> bool {
    let mut set = OrderedSet::with_threshold(threshold as isize);
    let mut model = BTreeSet::new();

    do_ops(&ops, &mut set, &mut model) && set.iter().eq(model.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut set = OrderedSet::new();
    for x in &xs {
        let _ = set.insert(*x);
    }

    xs.iter().all(|x| set.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut set = OrderedSet::with_threshold(3);
    for x in &xs {
        let _ = set.insert(*x);
    }
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !set.contains(x))
}

#[quickcheck]
fn iteration_is_ascending(xs: Vec<i16>, threshold: i8) -> bool {
    let mut set = OrderedSet::with_threshold(threshold as isize);
    for x in &xs {
        let _ = set.insert(*x);
    }

    let keys: Vec<_> = set.iter().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1]) && keys.len() == set.len()
}

#[quickcheck]
fn len_counts_successful_inserts(xs: Vec<i8>, threshold: i8) -> bool {
    let mut set = OrderedSet::with_threshold(threshold as isize);
    let successes = xs.iter().filter(|x| set.insert(**x).is_ok()).count();

    set.len() == successes
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>, threshold: i8) -> bool {
    let mut set = OrderedSet::with_threshold(threshold as isize);
    for x in &xs {
        let _ = set.insert(*x);
    }
    let before: Vec<_> = set
        .walk(usize::MAX)
        .map(|n| (*n.key, n.height, n.balance_factor))
        .collect();

    let all_rejected = xs.iter().all(|x| set.insert(*x) == Err(Error::DuplicateKey));
    let after: Vec<_> = set
        .walk(usize::MAX)
        .map(|n| (*n.key, n.height, n.balance_factor))
        .collect();

    all_rejected && before == after
}

#[quickcheck]
fn balanced_after_every_insert(xs: Vec<i16>, threshold: u8) -> bool {
    let mut set = OrderedSet::with_threshold(threshold as isize);
    xs.iter().all(|x| {
        let _ = set.insert(*x);
        within_threshold(&set)
    })
}

#[quickcheck]
fn plain_shape_follows_insertion_order(xs: Vec<i8>) -> bool {
    let mut plain = OrderedSet::with_threshold(0);
    let mut negative = OrderedSet::with_threshold(-5);
    for x in &xs {
        let _ = plain.insert(*x);
        let _ = negative.insert(*x);
    }

    // A plain BST has a unique shape per insertion order, so two plain sets fed
    // the same keys must agree node for node.
    plain.walk(usize::MAX).eq(negative.walk(usize::MAX))
}

#[quickcheck]
fn rebalance_is_stable(xs: Vec<i16>) -> bool {
    let mut set = OrderedSet::new();
    for x in &xs {
        let _ = set.insert(*x);
    }

    set.rebalance();
    let first: Vec<_> = set.iter().copied().collect();
    let first_height = set.height();

    set.rebalance();
    let second: Vec<_> = set.iter().copied().collect();

    // A perfectly balanced tree of n keys has floor(log2(n)) + 1 levels.
    let minimum = (usize::BITS - set.len().leading_zeros()) as usize;
    first == second && first_height == set.height() && first_height == minimum
}

#[quickcheck]
fn range_matches_filter(xs: Vec<i8>, a: i8, b: i8) -> bool {
    let mut set = OrderedSet::with_threshold(2);
    for x in &xs {
        let _ = set.insert(*x);
    }
    let (min, max) = (a.min(b), a.max(b));

    let expected: Vec<_> = set.iter().filter(|k| min <= **k && **k < max).collect();
    set.range(&min, &max) == Ok(expected) && set.range(&a, &a) == Ok(vec![])
}
