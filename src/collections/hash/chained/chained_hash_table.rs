use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use super::{GetAll, Iter};
use crate::collections::contiguous::Slots;
use crate::collections::linked::SinglyLinkedList;
use crate::util::error::{InsertError, NoBuckets, TableError};
use crate::util::result::InsertResultExtension;

/// A map of keys to values with a fixed number of buckets, each of which chains its entries in a
/// [`SinglyLinkedList`].
///
/// The bucket for a key is `hash(key) % bucket_count`, where the hash comes from the provided
/// [`BuildHasher`]. Keys are compared with [`Eq`] within a bucket. The bucket count is chosen at
/// creation and never changes, so chains simply grow as entries are added.
///
/// Two insertion policies are supported: [`insert`](Self::insert) replaces the value of an
/// existing key, while [`insert_duplicate`](Self::insert_duplicate) always appends a new entry,
/// allowing one key to map to several values.
///
/// It is a logic error for keys to be manipulated in a way that changes their hash. Because of
/// this, the API prevents mutable access to keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `c`: The length of the chain in the key's bucket.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)` |
/// | `insert_duplicate` | `O(c)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `clear` | `O(b + n)` |
pub struct ChainedHashTable<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Slots<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = SinglyLinkedList<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> ChainedHashTable<K, V, B> {
    /// Creates a new ChainedHashTable with `bucket_count` empty buckets and the default hasher.
    ///
    /// # Panics
    /// Panics if `bucket_count` is 0.
    pub fn with_buckets(bucket_count: usize) -> ChainedHashTable<K, V, B> {
        Self::with_buckets_and_hasher(bucket_count, B::default())
    }

    /// Creates a new ChainedHashTable with `bucket_count` empty buckets and the default hasher.
    ///
    /// # Errors
    /// Returns [`TableError::NoBuckets`] if `bucket_count` is 0, or [`TableError::Reserve`] if the
    /// buckets couldn't be allocated.
    pub fn try_with_buckets(bucket_count: usize) -> Result<ChainedHashTable<K, V, B>, TableError> {
        Self::try_with_buckets_and_hasher(bucket_count, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashTable<K, V, B> {
    /// Creates a new ChainedHashTable with `bucket_count` empty buckets and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if `bucket_count` is 0.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: B) -> ChainedHashTable<K, V, B> {
        match Self::try_with_buckets_and_hasher(bucket_count, hasher) {
            Ok(table) => table,
            Err(error) => error.raise(),
        }
    }

    /// Creates a new ChainedHashTable with `bucket_count` empty buckets and the provided `hasher`.
    ///
    /// # Errors
    /// See [`try_with_buckets`](Self::try_with_buckets).
    pub fn try_with_buckets_and_hasher(
        bucket_count: usize,
        hasher: B,
    ) -> Result<ChainedHashTable<K, V, B>, TableError> {
        if bucket_count == 0 {
            return Err(NoBuckets.into());
        }

        Ok(ChainedHashTable {
            buckets: Slots::try_repeat_with(bucket_count, SinglyLinkedList::new)?,
            len: 0,
            hasher,
        })
    }

    /// Returns the number of entries across all buckets.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets, which is fixed at creation and never 0.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the index of the bucket that `key` belongs in.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // The bucket count is non-zero, and the remainder is below it, so it fits in a usize.
        (self.hasher.hash_one(key) % self.bucket_count() as u64) as usize
    }

    /// Returns the chain of entries in the bucket at `index`, or None if `index` is out of range.
    pub fn bucket(&self, index: usize) -> Option<&SinglyLinkedList<(K, V)>> {
        self.buckets.get(index)
    }

    /// Inserts the provided `key`-`value` pair. If the key was already associated with a value,
    /// that value is replaced and returned. As with the standard library, the key itself isn't
    /// changed in that case.
    ///
    /// If allocation fails, the process is aborted.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value).or_raise()
    }

    /// Inserts the provided `key`-`value` pair, replacing the value of an existing key. If a new
    /// entry can't be allocated, the pair is returned inside the error and the table is unchanged.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, InsertError<(K, V)>> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        if let Some((_, existing)) = bucket.iter_mut().find(|entry| entry.0 == key) {
            return Ok(Some(mem::replace(existing, value)));
        }

        bucket.try_insert(usize::MAX, (key, value))?;
        self.len += 1;
        Ok(None)
    }

    /// Appends the provided `key`-`value` pair to the end of its bucket, even if the key is already
    /// present. Lookups find the earliest entry for a key, see [`get_all`](Self::get_all) to
    /// visit every one.
    ///
    /// If allocation fails, the process is aborted.
    pub fn insert_duplicate(&mut self, key: K, value: V) {
        self.try_insert_duplicate(key, value).or_raise()
    }

    pub fn try_insert_duplicate(&mut self, key: K, value: V) -> Result<(), InsertError<(K, V)>> {
        let index = self.bucket_index(&key);
        self.buckets[index].try_insert(usize::MAX, (key, value))?;
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the value associated with the provided `key` or None if the table
    /// contains no values for `key`. With duplicates, this is the earliest inserted entry.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.0.borrow() == key)
            .map(|(key, value)| (key, value))
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// table contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.0.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Returns an iterator over every value associated with `key`, in insertion order.
    pub fn get_all<'a, Q>(&'a self, key: &'a Q) -> GetAll<'a, K, V, Q>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        GetAll {
            inner: self.buckets[self.bucket_index(key)].iter(),
            key,
        }
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the earliest entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let removed = self.buckets[index].remove_first(|entry| entry.0.borrow() == key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Removes the earliest entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Drops every entry, keeping the buckets themselves.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all entries, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for ChainedHashTable<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for ChainedHashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("buckets", &DebugBuckets(&self.buckets))
            .field("len", &self.len)
            .finish()
    }
}

struct DebugBuckets<'a, K, V>(&'a Slots<Bucket<K, V>>);

impl<K: Debug, V: Debug> Debug for DebugBuckets<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(DebugChain))
            .finish()
    }
}

struct DebugChain<'a, K, V>(&'a Bucket<K, V>);

impl<K: Debug, V: Debug> Debug for DebugChain<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}
