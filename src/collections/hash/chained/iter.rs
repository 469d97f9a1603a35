use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice::Iter as SlotsIter;

use super::{Bucket, ChainedHashTable};
use crate::collections::linked::singly::Iter as ChainIter;

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a ChainedHashTable<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len(),
        }
    }
}

/// An iterator over the entries of a [`ChainedHashTable`], bucket by bucket and then in chain
/// order.
pub struct Iter<'a, K, V> {
    pub(crate) buckets: SlotsIter<'a, Bucket<K, V>>,
    pub(crate) chain: Option<ChainIter<'a, (K, V)>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.chain.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some((key, value));
            }
            // The current chain is exhausted, move on to the next bucket.
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

/// An iterator over every value associated with one key, created by
/// [`ChainedHashTable::get_all`].
pub struct GetAll<'a, K, V, Q: ?Sized> {
    pub(crate) inner: ChainIter<'a, (K, V)>,
    pub(crate) key: &'a Q,
}

impl<'a, K, V, Q> Iterator for GetAll<'a, K, V, Q>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.key;
        self.inner
            .find(|entry| entry.0.borrow() == key)
            .map(|(_, value)| value)
    }
}

impl<K, V, Q> FusedIterator for GetAll<'_, K, V, Q>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
}
