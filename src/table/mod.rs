mod raw;

pub use self::raw::{Iter as TableIter, SlotTable, TableFlags};

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem;

use crate::config::{RawId, Realloc, SystemRealloc};
use crate::error::Result;

// FxHash as the default, most keys tend to be small.
pub type DefaultHashBuilder = fxhash::FxBuildHasher;

#[inline]
pub(crate) fn make_hash<K: Hash + ?Sized>(hash_builder: &impl BuildHasher, val: &K) -> u32 {
    let mut state = hash_builder.build_hasher();
    val.hash(&mut state);
    state.finish() as u32
}

/// An insertion-ordered map from keys to values.
///
/// Entries iterate in the order they were first inserted; replacing a value
/// keeps the key's original position. Built on [`SlotTable`] with the
/// `ORDERED` modifier.
pub struct HashTable<K, V, R = SystemRealloc>
where
    R: Realloc,
{
    hash_builder: DefaultHashBuilder,
    table: SlotTable<(K, V), R>,
}

impl<K, V> HashTable<K, V, SystemRealloc>
where
    K: Eq + Hash,
{
    /// Creates an empty insertion-ordered map.
    #[inline]
    pub fn new() -> Self {
        Self::with_flags(TableFlags::ORDERED)
    }

    /// Creates an empty map with explicit table modifiers.
    #[inline]
    pub fn with_flags(flags: TableFlags) -> Self {
        Self {
            hash_builder: DefaultHashBuilder::default(),
            table: SlotTable::with_flags(flags),
        }
    }
}

impl<K, V> Default for HashTable<K, V, SystemRealloc>
where
    K: Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, R> HashTable<K, V, R>
where
    K: Eq + Hash,
    R: Realloc,
{
    /// Creates an empty map growing through the given primitive.
    #[inline]
    pub fn new_in(realloc: R) -> Self {
        Self {
            hash_builder: DefaultHashBuilder::default(),
            table: SlotTable::with_flags_in(TableFlags::ORDERED, realloc),
        }
    }

    /// Inserts a key/value pair, replacing and returning the previous
    /// value of an equal key.
    pub fn insert(&mut self, k: K, v: V) -> Result<Option<V>> {
        let hash = make_hash(&self.hash_builder, &k);
        if let Some((_, entry)) = self.table.find_mut(hash, |(ek, _)| *ek == k) {
            return Ok(Some(mem::replace(&mut entry.1, v)));
        }
        self.table.insert(hash, (k, v)).map(|_| None)
    }

    #[inline]
    pub fn get<Q: ?Sized>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        self.get_key_value(k).map(|(_, v)| v)
    }

    #[inline]
    pub fn get_mut<Q: ?Sized>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let hash = make_hash(&self.hash_builder, k);
        self.table
            .find_mut(hash, |(ek, _)| k.eq(ek.borrow()))
            .map(|(_, entry)| &mut entry.1)
    }

    #[inline]
    pub fn get_key_value<Q: ?Sized>(&self, k: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let hash = make_hash(&self.hash_builder, k);
        self.table
            .find(hash, |(ek, _)| k.eq(ek.borrow()))
            .map(|(_, &(ref key, ref value))| (key, value))
    }

    /// Removes a key and returns its value.
    pub fn remove<Q: ?Sized>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let hash = make_hash(&self.hash_builder, k);
        self.table
            .remove(hash, |(ek, _)| k.eq(ek.borrow()))
            .map(|(_, v)| v)
    }

    /// The dense entry id of a key, usable with
    /// [`get_at`](HashTable::get_at) until the table grows (or forever
    /// under `FIXED_ID`).
    #[inline]
    pub fn id_of<Q: ?Sized>(&self, k: &Q) -> Option<RawId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq,
    {
        let hash = make_hash(&self.hash_builder, k);
        self.table.find(hash, |(ek, _)| k.eq(ek.borrow())).map(|(id, _)| id)
    }

    /// Direct access by dense entry id.
    #[inline]
    pub fn get_at(&self, id: RawId) -> Option<(&K, &V)> {
        self.table.get(id).map(|&(ref k, ref v)| (k, v))
    }

    /// Iterates entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V, R> {
        Iter {
            inner: self.table.iter(),
        }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.table.count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.table.allocated()
    }

    #[inline]
    pub fn mem_usage(&self) -> usize {
        self.table.mem_usage()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

/// Insertion-ordered iterator over a [`HashTable`].
pub struct Iter<'a, K, V, R = SystemRealloc>
where
    R: Realloc,
{
    inner: raw::Iter<'a, (K, V), R>,
}

impl<'a, K, V, R> Iterator for Iter<'a, K, V, R>
where
    R: Realloc,
{
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, &(ref k, ref v))| (k, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, R> ExactSizeIterator for Iter<'a, K, V, R> where R: Realloc {}
