//! The ChunkedHashSet

use std::{fmt, iter, mem};

use tracing::{debug, error};

use super::primes;
use super::slot::{Slot, LOWER_31_BIT_MASK};

use crate::comparer::{Comparer, DefaultComparer};
use crate::config::Config;
use crate::failure::{panic_from_failure, Failure, Result};
use crate::list::ChunkedList;

//
//  Public Interface
//

/// An add-only hash set, chaining its elements within two `ChunkedList`s.
///
/// The head table maps each bucket to the first slot of its chain, and the slot table holds
/// the elements with their 31-bit hash and the link to the next slot. Both tables have the
/// same prime size, and are rebuilt at the next prime of about twice the number of elements
/// once all slots are in use.
///
/// Hashing and equality are provided by the comparer `C`.
pub struct ChunkedHashSet<T, C = DefaultComparer> {
    //  Comparer of the elements, for both hashing and equality.
    comparer: C,
    //  Configuration of the tables.
    config: Config,
    //  None until the first insertion, unless created with a capacity.
    tables: Option<Tables<T>>,
    count: usize,
    //  Incremented on every structural modification.
    version: u64,
}

impl<T, C: Default> ChunkedHashSet<T, C> {
    /// Creates a new instance of the `ChunkedHashSet`.
    ///
    /// No memory is allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::hashset::ChunkedHashSet;
    /// let set: ChunkedHashSet<i32> = ChunkedHashSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(0, set.capacity());
    /// ```
    pub fn new() -> Self { Self::with_capacity(0) }

    /// Creates a new instance of the `ChunkedHashSet` with room for at least `capacity` elements.
    ///
    /// If `capacity` is not a prime, it is rounded up. If `capacity` is 0, no memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` exceeds the largest prime table size.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::hashset::ChunkedHashSet;
    /// let set: ChunkedHashSet<i32> = ChunkedHashSet::with_capacity(100);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(107, set.capacity());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparer(capacity, C::default())
    }
}

impl<T, C> ChunkedHashSet<T, C> {
    /// Creates a new instance of the `ChunkedHashSet` with a custom comparer.
    ///
    /// No memory is allocated.
    pub fn with_comparer(comparer: C) -> Self { Self::with_capacity_and_comparer(0, comparer) }

    /// Creates a new instance of the `ChunkedHashSet` with room for at least `capacity` elements, and a custom
    /// comparer.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` exceeds the largest prime table size.
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self::with_config(Config::default().with_capacity(capacity), comparer)
    }

    /// Creates a new instance of the `ChunkedHashSet` from a `Config`.
    ///
    /// #   Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(config: Config, comparer: C) -> Self {
        Self::try_with_config(config, comparer).unwrap_or_else(|f| panic_from_failure(f))
    }

    /// Creates a new instance of the `ChunkedHashSet` from a `Config`.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if the segment budget cannot accomodate a slot, and `CapacityExhausted` if the
    /// capacity exceeds the largest prime table size.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::comparer::DefaultComparer;
    /// #   use chunked::config::Config;
    /// #   use chunked::failure::Failure;
    /// #   use chunked::hashset::ChunkedHashSet;
    /// let config = Config::default().with_segment_bytes(1);
    /// let set = ChunkedHashSet::<u64>::try_with_config(config, DefaultComparer::default());
    ///
    /// assert_eq!(Some(Failure::InvalidArgument { name: "segment_bytes" }), set.err());
    /// ```
    pub fn try_with_config(config: Config, comparer: C) -> Result<Self> {
        config.max_segment_items::<Slot<T>>()?;
        config.max_segment_items::<usize>()?;

        let tables = if config.capacity > 0 {
            Some(Tables::with_size(primes::get_prime(config.capacity)?, &config)?)
        } else {
            None
        };

        Ok(Self { comparer, config, tables, count: 0, version: 0 })
    }
}

impl<T, C> ChunkedHashSet<T, C> {
    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::hashset::ChunkedHashSet;
    /// let mut set: ChunkedHashSet<_> = ChunkedHashSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.add(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.count }

    /// Returns `true`: elements can be added, but never removed.
    pub fn is_read_only(&self) -> bool { true }

    /// Returns the size of the tables, that is the number of elements which can be added before growing.
    pub fn capacity(&self) -> usize { self.tables.as_ref().map_or(0, |t| t.size()) }

    /// Returns the number of structural modifications so far.
    pub fn version(&self) -> u64 { self.version }

    /// Returns the comparer.
    pub fn comparer(&self) -> &C { &self.comparer }
}

impl<T: Default, C: Comparer<T>> ChunkedHashSet<T, C> {
    /// Adds the value to the set, unless an equal value is already present.
    ///
    /// Returns whether the value was added.
    ///
    /// #   Errors
    ///
    /// Returns `CapacityExhausted` if the set needs to grow beyond the largest prime table size.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::hashset::ChunkedHashSet;
    /// let mut set: ChunkedHashSet<_> = ChunkedHashSet::new();
    ///
    /// assert_eq!(Ok(true), set.try_add("Hello"));
    /// assert_eq!(Ok(false), set.try_add("Hello"));
    /// ```
    pub fn try_add(&mut self, value: T) -> Result<bool> {
        let comparer = &self.comparer;
        let hash_code = hash_code_of(comparer, &value);

        let tables = initialized(&mut self.tables, &self.config)?;

        if tables.find(hash_code, |v| comparer.equals(v, &value)) {
            return Ok(false);
        }

        let index = match tables.acquire() {
            Some(index) => index,
            None => {
                let new_size = primes::expand_prime(self.count)?;

                if new_size <= self.count {
                    error!(count = self.count, new_size, "hash set cannot grow");
                    return Err(Failure::CapacityExhausted);
                }

                debug!(count = self.count, old_size = tables.size(), new_size, "growing hash set");

                let rehash = |v: &T| hash_code_of(comparer, v);
                let rehash: Option<&dyn Fn(&T) -> u32> = if self.config.rehash_on_growth { Some(&rehash) } else { None };

                tables.resize(new_size, &self.config, rehash)?;
                tables.acquire().ok_or(Failure::CapacityExhausted)?
            },
        };

        tables.link(index, hash_code, value);

        self.count += 1;
        self.version += 1;

        Ok(true)
    }

    /// Adds the value to the set, unless an equal value is already present.
    ///
    /// Calling this method is equivalent to calling `try_add` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the set cannot grow.
    pub fn add(&mut self, value: T) -> bool {
        self.try_add(value).unwrap_or_else(|f| panic_from_failure(f))
    }

    /// Rebuilds the tables with `new_size`, re-chaining every element.
    ///
    /// Hashes are recomputed if the set was configured to rehash on growth.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `new_size` is not a prime, exceeds `MAX_PRIME`, or is less than the number of
    /// slots in use.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::hashset::ChunkedHashSet;
    /// let mut set: ChunkedHashSet<_> = ChunkedHashSet::new();
    /// set.extend(0..3);
    ///
    /// assert!(set.try_resize(8).is_err());
    /// assert_eq!(Ok(()), set.try_resize(101));
    /// assert_eq!(101, set.capacity());
    /// assert!(!set.add(2));
    /// ```
    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        if new_size > primes::MAX_PRIME || !primes::is_prime(new_size) {
            return Err(Failure::InvalidArgument { name: "new_size" });
        }

        if self.tables.is_none() {
            self.tables = Some(Tables::with_size(new_size, &self.config)?);
            self.version += 1;
            return Ok(());
        }

        let tables = initialized(&mut self.tables, &self.config)?;

        if new_size < tables.last_index {
            return Err(Failure::InvalidArgument { name: "new_size" });
        }

        let comparer = &self.comparer;
        let rehash = |v: &T| hash_code_of(comparer, v);
        let rehash: Option<&dyn Fn(&T) -> u32> = if self.config.rehash_on_growth { Some(&rehash) } else { None };

        tables.resize(new_size, &self.config, rehash)?;

        self.version += 1;

        Ok(())
    }
}

//  The operations which are not supported, yet.
impl<T, C> ChunkedHashSet<T, C> {
    /// Not supported.
    pub fn remove(&mut self, _value: &T) -> Result<bool> { unsupported("remove") }

    /// Not supported.
    pub fn contains(&self, _value: &T) -> Result<bool> { unsupported("contains") }

    /// Not supported.
    pub fn clear(&mut self) -> Result<()> { unsupported("clear") }

    /// Not supported.
    pub fn copy_to(&self, _target: &mut [T], _offset: usize) -> Result<()> { unsupported("copy_to") }

    /// Not supported.
    pub fn iter(&self) -> Result<iter::Empty<&T>> { unsupported("iter") }

    /// Not supported.
    pub fn union_with<I: IntoIterator<Item = T>>(&mut self, _other: I) -> Result<()> { unsupported("union_with") }

    /// Not supported.
    pub fn intersect_with<I: IntoIterator<Item = T>>(&mut self, _other: I) -> Result<()> {
        unsupported("intersect_with")
    }

    /// Not supported.
    pub fn except_with<I: IntoIterator<Item = T>>(&mut self, _other: I) -> Result<()> { unsupported("except_with") }

    /// Not supported.
    pub fn symmetric_except_with<I: IntoIterator<Item = T>>(&mut self, _other: I) -> Result<()> {
        unsupported("symmetric_except_with")
    }

    /// Not supported.
    pub fn is_subset_of<I: IntoIterator<Item = T>>(&self, _other: I) -> Result<bool> { unsupported("is_subset_of") }

    /// Not supported.
    pub fn is_superset_of<I: IntoIterator<Item = T>>(&self, _other: I) -> Result<bool> {
        unsupported("is_superset_of")
    }

    /// Not supported.
    pub fn is_proper_subset_of<I: IntoIterator<Item = T>>(&self, _other: I) -> Result<bool> {
        unsupported("is_proper_subset_of")
    }

    /// Not supported.
    pub fn is_proper_superset_of<I: IntoIterator<Item = T>>(&self, _other: I) -> Result<bool> {
        unsupported("is_proper_superset_of")
    }

    /// Not supported.
    pub fn overlaps<I: IntoIterator<Item = T>>(&self, _other: I) -> Result<bool> { unsupported("overlaps") }

    /// Not supported.
    pub fn set_equals<I: IntoIterator<Item = T>>(&self, _other: I) -> Result<bool> { unsupported("set_equals") }
}

impl<T, C: Default> Default for ChunkedHashSet<T, C> {
    fn default() -> Self { Self::new() }
}

impl<T, C> fmt::Debug for ChunkedHashSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ChunkedHashSet")
            .field("len", &self.count)
            .field("capacity", &self.capacity())
            .field("version", &self.version)
            .finish()
    }
}

impl<T: Default, C: Comparer<T>> iter::Extend<T> for ChunkedHashSet<T, C> {
    fn extend<I>(&mut self, collection: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in collection {
            self.add(value);
        }
    }
}

impl<T: Default, C: Comparer<T> + Default> iter::FromIterator<T> for ChunkedHashSet<T, C> {
    fn from_iter<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = Self::new();
        result.extend(collection);
        result
    }
}

//
//  Implementation
//

//  The head and slot tables, always of the same size.
struct Tables<T> {
    //  Index of the first slot of each chain, plus 1; 0 for an empty chain.
    heads: ChunkedList<usize, ()>,
    slots: ChunkedList<Slot<T>, ()>,
    //  Number of slots used so far, reclaimed or not.
    last_index: usize,
    //  Head of the list of reclaimed slots.
    free_list: Option<usize>,
}

impl<T> Tables<T> {
    //  Creates tables of `size` empty chains and vacant slots.
    fn with_size(size: usize, config: &Config) -> Result<Self> {
        debug!(size, "allocating hash set tables");

        //  The capacity hint of the set is meaningless for the segments of its tables.
        let config = config.with_capacity(0);

        let mut heads = ChunkedList::try_with_config(config, ())?;
        heads.extend(iter::repeat(0).take(size));

        let mut slots = ChunkedList::try_with_config(config, ())?;
        slots.extend(iter::repeat_with(Slot::vacant).take(size));

        Ok(Self { heads, slots, last_index: 0, free_list: None })
    }

    fn size(&self) -> usize { self.heads.len() }

    fn bucket(&self, hash_code: u32) -> usize { hash_code as usize % self.size() }

    //  Returns whether the chain of `hash_code` contains a matching value.
    fn find<F>(&self, hash_code: u32, matches: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut current = self.heads[self.bucket(hash_code)].checked_sub(1);

        while let Some(index) = current {
            let slot = &self.slots[index];

            if slot.hash_code == hash_code && slot.value.as_ref().map_or(false, &matches) {
                return true;
            }

            current = slot.next;
        }

        false
    }

    //  Acquires a slot, reclaimed if possible, or None if all slots are in use.
    fn acquire(&mut self) -> Option<usize> {
        if let Some(index) = self.free_list {
            self.free_list = self.slots[index].next;
            return Some(index);
        }

        if self.last_index == self.slots.len() {
            return None;
        }

        self.last_index += 1;
        Some(self.last_index - 1)
    }

    //  Writes the value in the slot at index, and links it at the head of its chain.
    fn link(&mut self, index: usize, hash_code: u32, value: T) {
        let bucket = self.bucket(hash_code);
        let next = self.heads[bucket].checked_sub(1);

        self.slots[index] = Slot { hash_code, next, value: Some(value) };
        self.heads[bucket] = index + 1;
    }

    //  Rebuilds the tables with `new_size`, then swaps them in.
    //
    //  Vacant slots are moved as is, preserving the free list.
    fn resize(&mut self, new_size: usize, config: &Config, rehash: Option<&dyn Fn(&T) -> u32>) -> Result<()> {
        debug_assert!(new_size >= self.last_index);

        let mut resized = Tables::with_size(new_size, config)?;

        for index in 0..self.last_index {
            let mut slot = mem::replace(&mut self.slots[index], Slot::vacant());

            if let Some(value) = &slot.value {
                if let Some(rehash) = rehash {
                    slot.hash_code = rehash(value);
                }

                let bucket = resized.bucket(slot.hash_code);
                slot.next = resized.heads[bucket].checked_sub(1);
                resized.heads[bucket] = index + 1;
            }

            resized.slots[index] = slot;
        }

        resized.last_index = self.last_index;
        resized.free_list = self.free_list;

        *self = resized;

        Ok(())
    }
}

//  Returns the tables, allocating them at the smallest prime size if necessary.
fn initialized<'a, T>(tables: &'a mut Option<Tables<T>>, config: &Config) -> Result<&'a mut Tables<T>> {
    let initialized = match tables.take() {
        Some(tables) => tables,
        None => Tables::with_size(primes::get_prime(0)?, config)?,
    };

    Ok(tables.insert(initialized))
}

//  Returns the 31-bit hash code of the value, 0 for the default value.
fn hash_code_of<T: Default, C: Comparer<T>>(comparer: &C, value: &T) -> u32 {
    if comparer.equals(value, &T::default()) {
        return 0;
    }

    (comparer.hash(value) & LOWER_31_BIT_MASK) as u32
}

#[cold]
#[inline(never)]
fn unsupported<R>(operation: &'static str) -> Result<R> {
    Err(Failure::Unsupported { operation })
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::utils::tester::*;

    fn values<C>(set: &ChunkedHashSet<u32, C>) -> Vec<u32> {
        let tables = set.tables.as_ref().unwrap();

        let mut values: Vec<u32> = tables.slots.iter().filter_map(|s| s.value).collect();
        values.sort_unstable();
        values
    }

    #[test]
    fn add_twice() {
        let mut set: ChunkedHashSet<i32> = ChunkedHashSet::new();

        assert!(set.add(1));
        assert_eq!(1, set.len());

        assert!(!set.add(1));
        assert_eq!(1, set.len());
    }

    #[test]
    fn add_default_value() {
        let mut set: ChunkedHashSet<String> = ChunkedHashSet::new();

        assert!(set.add(String::new()));
        assert!(!set.add(String::new()));
        assert!(set.add("a".to_string()));

        assert_eq!(2, set.len());
        assert_eq!(0, set.tables.as_ref().unwrap().slots[0].hash_code);
    }

    #[test]
    fn lazy_initialization() {
        let mut set: ChunkedHashSet<i32> = ChunkedHashSet::new();

        assert!(set.tables.is_none());
        assert_eq!(0, set.capacity());

        set.add(3);

        assert_eq!(3, set.capacity());
    }

    #[test]
    fn eager_initialization() {
        let set: ChunkedHashSet<i32> = ChunkedHashSet::with_capacity(3);

        assert!(set.tables.is_some());
        assert_eq!(3, set.capacity());
    }

    #[test]
    fn grow_preserves_values() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::with_capacity(3);

        for i in 0..10 {
            assert!(set.add(i));
        }

        assert_eq!(10, set.len());
        assert_eq!(17, set.capacity());
        assert_eq!((0..10).collect::<Vec<_>>(), values(&set));

        for i in 0..10 {
            assert!(!set.add(i));
        }

        assert_eq!(10, set.len());
    }

    #[test]
    fn grow_many() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();

        for i in 0..5_000 {
            assert!(set.add(i * 7));
        }

        for i in 0..5_000 {
            assert!(!set.add(i * 7));
        }

        assert_eq!(5_000, set.len());
        assert!(primes::is_prime(set.capacity()));
    }

    #[test]
    fn grow_with_small_segments() {
        let config = Config::default().with_segment_bytes(64);
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::with_config(config, Default::default());

        set.extend(0..500);

        let tables = set.tables.as_ref().unwrap();
        assert!(tables.slots.number_segments() > 1);
        assert!(tables.heads.number_segments() > 1);

        assert_eq!((0..500).collect::<Vec<_>>(), values(&set));
        assert_eq!(500, set.len());
    }

    #[test]
    fn colliding_chain() {
        let mut set: ChunkedHashSet<u32, Colliding> = ChunkedHashSet::with_comparer(Colliding);

        for i in 1..=50 {
            assert!(set.add(i));
        }

        for i in 1..=50 {
            assert!(!set.add(i));
        }

        assert_eq!(50, set.len());

        //  All in the chain of 42.
        let tables = set.tables.as_ref().unwrap();
        let mut chain = 0;
        let mut current = tables.heads[tables.bucket(42)].checked_sub(1);
        while let Some(index) = current {
            chain += 1;
            current = tables.slots[index].next;
        }

        assert_eq!(50, chain);
    }

    #[test]
    fn high_bits_masked() {
        let mut set: ChunkedHashSet<u32, HighBits> = ChunkedHashSet::with_comparer(HighBits);

        set.extend(1..20);

        let tables = set.tables.as_ref().unwrap();
        assert!(tables.slots.iter().filter(|s| s.value.is_some()).all(|s| s.hash_code <= 0x7FFF_FFFF));
        assert_eq!(19, set.len());
    }

    #[test]
    fn comparer_custom() {
        let mut set: ChunkedHashSet<String, CaseInsensitive> = ChunkedHashSet::with_comparer(CaseInsensitive);

        assert!(set.add("Hello".to_string()));
        assert!(!set.add("HELLO".to_string()));
        assert!(set.add("World".to_string()));

        assert_eq!(2, set.len());
    }

    #[test]
    fn rehash_on_growth() {
        fn hashes(rehash: bool) -> usize {
            let config = Config::default().with_capacity(3).with_rehash_on_growth(rehash);
            let mut set: ChunkedHashSet<u32, Counting> = ChunkedHashSet::with_config(config, Counting::default());

            set.extend(1..=4);

            assert_eq!(7, set.capacity());
            set.comparer().hashes()
        }

        assert_eq!(4, hashes(false));
        assert_eq!(7, hashes(true));
    }

    #[test]
    fn version_counts_modifications() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();

        set.add(1);
        set.add(1);
        set.add(2);

        assert_eq!(2, set.version());
    }

    #[test]
    fn free_list_reused() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::with_capacity(7);
        set.extend(1..=3);

        //  Reclaim the slot of 3, by hand; being the last added, it heads its chain.
        {
            let tables = set.tables.as_mut().unwrap();
            let index = 2;
            let bucket = tables.bucket(tables.slots[index].hash_code);

            assert_eq!(index + 1, tables.heads[bucket]);
            tables.heads[bucket] = tables.slots[index].next.map_or(0, |n| n + 1);
            tables.slots[index] = Slot::vacant();
            tables.free_list = Some(index);
        }

        assert!(set.add(3));

        let tables = set.tables.as_ref().unwrap();
        assert_eq!(None, tables.free_list);
        assert_eq!(3, tables.last_index);
        assert_eq!(Some(3), tables.slots[2].value);
    }

    #[test]
    fn free_list_survives_resize() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::with_capacity(3);
        set.extend(1..=3);

        {
            let tables = set.tables.as_mut().unwrap();
            let bucket = tables.bucket(tables.slots[2].hash_code);

            tables.heads[bucket] = tables.slots[2].next.map_or(0, |n| n + 1);
            tables.slots[2] = Slot::vacant();
            tables.free_list = Some(2);
        }

        assert_eq!(Ok(()), set.try_resize(11));

        assert!(set.add(4));
        assert!(!set.add(1));
        assert!(!set.add(2));

        let tables = set.tables.as_ref().unwrap();
        assert_eq!(Some(4), tables.slots[2].value);
        assert_eq!(3, tables.last_index);
    }

    #[test]
    fn try_resize_invalid() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::with_capacity(7);
        set.extend(0..7);

        let invalid = Err(Failure::InvalidArgument { name: "new_size" });

        assert_eq!(invalid, set.try_resize(9));
        assert_eq!(invalid, set.try_resize(5));
        assert_eq!(7, set.capacity());
    }

    #[test]
    fn try_resize_uninitialized() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();

        assert_eq!(Ok(()), set.try_resize(13));
        assert_eq!(13, set.capacity());
        assert_eq!(1, set.version());

        assert!(set.add(1));
        assert_eq!(2, set.version());
    }

    #[test]
    fn try_resize_bumps_version() {
        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();
        set.extend(0..3);
        assert_eq!(3, set.version());

        assert_eq!(Ok(()), set.try_resize(11));
        assert_eq!(4, set.version());
    }

    #[test]
    fn try_resize_beyond_max_prime() {
        let invalid = Err(Failure::InvalidArgument { name: "new_size" });

        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();
        assert_eq!(invalid, set.try_resize(2_147_483_659));
        assert_eq!(invalid, set.try_resize(usize::MAX));
        assert!(set.tables.is_none());

        set.extend(0..3);
        assert_eq!(invalid, set.try_resize(2_147_483_659));
        assert_eq!(3, set.capacity());
        assert_eq!(3, set.version());
    }

    #[test]
    fn construct_invalid() {
        let config = Config::default().with_segment_bytes(4);
        let set = ChunkedHashSet::<u64>::try_with_config(config, DefaultComparer::default());

        assert_eq!(Some(Failure::InvalidArgument { name: "segment_bytes" }), set.err());
    }

    #[test]
    fn is_read_only() {
        let set: ChunkedHashSet<u32> = ChunkedHashSet::new();

        assert!(set.is_read_only());
        assert!(set.is_empty());
    }

    #[test]
    fn unsupported_operations() {
        fn unsupported(operation: &'static str) -> Failure { Failure::Unsupported { operation } }

        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();
        set.add(1);

        assert_eq!(Err(unsupported("remove")), set.remove(&1));
        assert_eq!(Err(unsupported("contains")), set.contains(&1));
        assert_eq!(Err(unsupported("clear")), set.clear());
        assert_eq!(Err(unsupported("copy_to")), set.copy_to(&mut [0; 4], 0));
        assert_eq!(Some(unsupported("iter")), set.iter().err());

        assert_eq!(Err(unsupported("union_with")), set.union_with([1]));
        assert_eq!(Err(unsupported("intersect_with")), set.intersect_with([1]));
        assert_eq!(Err(unsupported("except_with")), set.except_with([1]));
        assert_eq!(Err(unsupported("symmetric_except_with")), set.symmetric_except_with([1]));

        assert_eq!(Err(unsupported("is_subset_of")), set.is_subset_of([1]));
        assert_eq!(Err(unsupported("is_superset_of")), set.is_superset_of([1]));
        assert_eq!(Err(unsupported("is_proper_subset_of")), set.is_proper_subset_of([1]));
        assert_eq!(Err(unsupported("is_proper_superset_of")), set.is_proper_superset_of([1]));
        assert_eq!(Err(unsupported("overlaps")), set.overlaps([1]));
        assert_eq!(Err(unsupported("set_equals")), set.set_equals([1]));

        //  Nothing changed.
        assert_eq!(1, set.len());
        assert_eq!(1, set.version());
    }

    #[test]
    fn trait_debug() {
        let set: ChunkedHashSet<u32> = (0..5).collect();

        assert_eq!("ChunkedHashSet { len: 5, capacity: 7, version: 5 }", format!("{:?}", set));
    }

    #[test]
    fn random_values_match_std() {
        let mut rng = fastrand::Rng::with_seed(0xc4a1);

        let mut set: ChunkedHashSet<u32> = ChunkedHashSet::new();
        let mut model = std::collections::HashSet::new();

        for _ in 0..3_000 {
            let value = rng.u32(0..1_000);
            assert_eq!(model.insert(value), set.add(value));
        }

        assert_eq!(model.len(), set.len());

        let mut expected: Vec<u32> = model.into_iter().collect();
        expected.sort_unstable();
        assert_eq!(expected, values(&set));
    }
} //  mod tests
