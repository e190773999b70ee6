use quickcheck::{Arbitrary, Gen};

/// One step of a randomized run against a [`Tree`](crate::Tree) and a `HashMap` kept
/// alongside it as the model.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<K, V> {
    /// Insert the pair. Skipped when the model already holds the key so the tree stays valid.
    Insert(K, V),
    /// Remove the key from both. The tree must return what the model held.
    Remove(K),
    Find(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::Find(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
