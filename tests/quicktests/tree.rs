use int_bst::{Key, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// A multiset of keys: how many copies of each key should be in the tree.
type Model = BTreeMap<Key, usize>;

/// The keys a tree built from `model` yields when iterated.
fn sorted_keys(model: &Model) -> Vec<Key> {
    model
        .iter()
        .flat_map(|(&key, &copies)| std::iter::repeat(key).take(copies))
        .collect()
}

fn is_sorted(keys: &[Key]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Applies a set of operations to a tree and a multiset model.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both. Returns `false` as soon as
/// they disagree.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree, model: &mut Model) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                tree.insert(Key::from(k)).unwrap();
                *model.entry(Key::from(k)).or_default() += 1;
            }
            Op::Remove(k) => {
                let expected = match model.get_mut(&Key::from(k)) {
                    Some(copies) => {
                        *copies -= 1;
                        if *copies == 0 {
                            model.remove(&Key::from(k));
                        }
                        true
                    }
                    None => false,
                };
                if tree.remove(Key::from(k)) != expected {
                    return false;
                }
            }
            Op::Iter => {
                if tree.iter().collect::<Vec<_>>() != sorted_keys(model) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Model::new();

    do_ops(&ops, &mut tree, &mut model)
        && tree.count() == model.values().sum::<usize>()
        && model.keys().all(|&key| tree.exists(key))
        && ops.iter().all(|op| match *op {
            Op::Insert(k) | Op::Remove(k) => {
                tree.exists(Key::from(k)) == model.contains_key(&Key::from(k))
            }
            Op::Iter => true,
        })
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();
    for delete in &deletes {
        tree.remove(Key::from(*delete));
    }

    is_sorted(&tree.iter().collect::<Vec<_>>())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();

    xs.iter().all(|x| tree.exists(Key::from(*x))) && tree.count() == xs.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.exists(Key::from(*x)))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(Key::from(*delete)) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.exists(Key::from(*x)))
        && still_present.iter().all(|x| tree.exists(Key::from(*x)))
        && tree.count() == still_present.len()
}

#[quickcheck]
fn count_tracks_actual_removals(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();
    let removed = deletes
        .iter()
        .filter(|x| tree.remove(Key::from(**x)))
        .count();

    tree.count() == xs.len() - removed
}

#[quickcheck]
fn second_removal_changes_nothing(xs: Vec<i8>, key: i8) -> bool {
    let unique: HashSet<_> = xs.into_iter().collect();
    let mut tree = Tree::from_keys(unique.into_iter().map(Key::from)).unwrap();

    tree.remove(Key::from(key));
    let (shape, count) = (tree.to_string(), tree.count());

    !tree.remove(Key::from(key)) && tree.to_string() == shape && tree.count() == count
}

/// Removes every key in turn from a fresh tree, which hits every removal case (including nodes
/// with two children) somewhere along the way.
#[quickcheck]
fn each_removal_takes_exactly_one_node(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();
    let expected = tree.iter().collect::<Vec<_>>();

    expected.iter().enumerate().all(|(i, &key)| {
        let mut tree = Tree::from_keys(xs.iter().copied().map(Key::from)).unwrap();
        let mut remaining = expected.clone();
        remaining.remove(i);

        tree.remove(key)
            && tree.count() == expected.len() - 1
            && tree.iter().collect::<Vec<_>>() == remaining
    })
}
