mod tree;

use quickcheck::{Arbitrary, Gen};

/// One step of a randomly generated workload. The tree holds a multiset of
/// keys, so the model it's checked against counts copies per key.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K> {
    /// Add another copy of the key
    Insert(K),
    /// Take away one copy of the key, if there is one
    Remove(K),
    /// Check that walking the tree in order yields the model's keys, copies included
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    /// Picks each kind of step with equal odds.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
