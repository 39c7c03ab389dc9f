//! The ChunkedList

use std::{fmt, iter, mem, ops};

use tracing::trace;

use super::fanout;
use super::Cursor;

use crate::capacity::{Capacity, ElementIndex, InnerIndex, NumberSegments, SegmentIndex};
use crate::comparer::{Comparer, DefaultComparer};
use crate::config::Config;
use crate::failure::{panic_from_failure, Failure, Result};

//
//  Public Interface
//

/// A list whose elements are spread across segments of bounded capacity.
///
/// The maximum number of elements of a segment derives from the segment budget, in bytes,
/// and the size of `T`. Elements are appended to the first segment with spare room, so that
/// no single allocation ever exceeds the budget.
///
/// Removals leave holes behind: segments are not compacted, and addressing by index skips
/// over the holes. Look-ups by value rely on the comparer `C`.
pub struct ChunkedList<T, C = DefaultComparer> {
    //  Comparer of the elements, used by the look-up methods.
    comparer: C,
    //  Capacity of each segment.
    capacity: Capacity,
    //  Only `add` guarantees that all segments but the last are full.
    segments: Vec<Vec<T>>,
}

impl<T, C: Default> ChunkedList<T, C> {
    /// Creates a new instance of the `ChunkedList` with the default segment budget.
    ///
    /// No memory is allocated.
    ///
    /// #   Panics
    ///
    /// Panics if a single `T` does not fit within the default segment budget.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let list: ChunkedList<i32> = ChunkedList::new();
    ///
    /// assert_eq!(0, list.len());
    /// assert_eq!(21_000, list.max_segment_items());
    /// ```
    pub fn new() -> Self { Self::with_comparer(C::default()) }

    /// Creates a new instance of the `ChunkedList` with segments of at most `segment_bytes`.
    ///
    /// #   Panics
    ///
    /// Panics if `segment_bytes` is 0, or too small for a single `T`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let list: ChunkedList<u64> = ChunkedList::with_segment_bytes(80);
    ///
    /// assert_eq!(10, list.max_segment_items());
    /// ```
    pub fn with_segment_bytes(segment_bytes: usize) -> Self {
        Self::try_with_segment_bytes(segment_bytes).unwrap_or_else(|f| panic_from_failure(f))
    }

    /// Creates a new instance of the `ChunkedList` with segments of at most `segment_bytes`.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `segment_bytes` is 0, or too small for a single `T`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::failure::Failure;
    /// #   use chunked::list::ChunkedList;
    /// let list = ChunkedList::<u64>::try_with_segment_bytes(4);
    ///
    /// assert_eq!(Some(Failure::InvalidArgument { name: "segment_bytes" }), list.err());
    /// ```
    pub fn try_with_segment_bytes(segment_bytes: usize) -> Result<Self> {
        Self::try_with_config(Config::default().with_segment_bytes(segment_bytes), C::default())
    }
}

impl<T, C> ChunkedList<T, C> {
    /// Creates a new instance of the `ChunkedList` with the default segment budget, and a custom comparer.
    ///
    /// #   Panics
    ///
    /// Panics if a single `T` does not fit within the default segment budget.
    pub fn with_comparer(comparer: C) -> Self {
        Self::with_config(Config::default(), comparer)
    }

    /// Creates a new instance of the `ChunkedList` from a `Config`.
    ///
    /// #   Panics
    ///
    /// Panics if the configuration is invalid for `T`.
    pub fn with_config(config: Config, comparer: C) -> Self {
        Self::try_with_config(config, comparer).unwrap_or_else(|f| panic_from_failure(f))
    }

    /// Creates a new instance of the `ChunkedList` from a `Config`.
    ///
    /// The capacity of the configuration is the number of segments to reserve room for; no
    /// segment is allocated.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if the configuration is invalid for `T`.
    pub fn try_with_config(config: Config, comparer: C) -> Result<Self> {
        let max_segment_items = config.max_segment_items::<T>()?;

        Ok(Self {
            comparer,
            capacity: Capacity::new(max_segment_items),
            segments: Vec::with_capacity(config.capacity),
        })
    }
}

impl<T, C> ChunkedList<T, C> {
    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<_> = ChunkedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.add(1);
    /// assert!(!list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// The length is computed assuming all segments but the last are full, which does not hold
    /// after removing from any other segment.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<_> = ChunkedList::new();
    /// assert_eq!(0, list.len());
    ///
    /// list.add(1);
    /// assert_eq!(1, list.len());
    /// ```
    pub fn len(&self) -> usize {
        let last = self.segments.last().map_or(0, |s| s.len());
        self.capacity.len(NumberSegments(self.segments.len()), last)
    }

    /// Returns the maximum number of elements of a segment.
    pub fn max_segment_items(&self) -> usize { self.capacity.of_segment() }

    /// Returns the number of segments currently allocated.
    pub fn number_segments(&self) -> usize { self.segments.len() }

    /// Returns the ith segment, if allocated, or an empty segment otherwise.
    pub fn segment(&self, i: usize) -> &[T] {
        self.segments.get(i).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// Returns a reference to the ith element.
    ///
    /// If the position of the ith element is a hole left by a removal, the next position is used
    /// instead, and so on.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `i` is not less than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::failure::Failure;
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<i32> = ChunkedList::new();
    /// list.add(1);
    ///
    /// assert_eq!(Ok(&1), list.get(0));
    /// assert_eq!(Err(Failure::OutOfRange { index: 1, len: 1 }), list.get(1));
    /// ```
    pub fn get(&self, i: usize) -> Result<&T> {
        let (segment, inner) = self.locate(ElementIndex(i))?;
        Ok(&self.segments[segment.0][inner.0])
    }

    /// Returns a mutable reference to the ith element.
    ///
    /// Addresses elements as `get` does.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `i` is not less than `len`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        let (segment, inner) = self.locate(ElementIndex(i))?;
        Ok(&mut self.segments[segment.0][inner.0])
    }

    /// Overwrites the ith element.
    ///
    /// Addresses elements as `get` does.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `i` is not less than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<_> = (0..3).collect();
    ///
    /// assert_eq!(Ok(()), list.set(1, 7));
    /// assert_eq!(vec![0, 7, 2], list.iter().copied().collect::<Vec<_>>());
    /// assert!(list.set(3, 7).is_err());
    /// ```
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        *self.get_mut(i)? = value;
        Ok(())
    }

    /// Appends an element to the first segment with spare room, or to a new segment.
    ///
    /// As long as no element was removed, this is the back of the list.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<u32> = ChunkedList::with_segment_bytes(8);
    /// list.add(1);
    /// list.add(2);
    /// list.add(3);
    ///
    /// assert_eq!(2, list.number_segments());
    /// assert_eq!(3, list[2]);
    /// ```
    pub fn add(&mut self, value: T) {
        self.place(value);
    }

    /// Inserts an element at the ith position, shifting all subsequent elements.
    ///
    /// All elements are re-added, compacting the segments in the process.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `i` is greater than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<_> = [24, 100, 84].iter().copied().collect();
    ///
    /// assert_eq!(Ok(()), list.insert(3, 19));
    /// assert_eq!(Ok(()), list.insert(0, 1));
    /// assert_eq!(vec![1, 24, 100, 84, 19], list.iter().copied().collect::<Vec<_>>());
    /// ```
    pub fn insert(&mut self, i: usize, value: T) -> Result<()> {
        let len = self.len();
        let stored: usize = self.segments.iter().map(|s| s.len()).sum();

        if i > len || i > stored {
            return Err(Failure::OutOfRange { index: i, len });
        }

        let mut elements: Vec<T> = mem::take(&mut self.segments).into_iter().flatten().collect();
        elements.insert(i, value);

        for element in elements {
            self.add(element);
        }

        Ok(())
    }

    /// Removes the ith element, and returns it.
    ///
    /// Addresses elements as `get` does. The segments are not compacted.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `i` is not less than `len`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<_> = (0..3).collect();
    ///
    /// assert_eq!(Ok(2), list.remove_at(2));
    /// assert_eq!(2, list.len());
    /// ```
    pub fn remove_at(&mut self, i: usize) -> Result<T> {
        let (segment, inner) = self.locate(ElementIndex(i))?;
        Ok(self.segments[segment.0].remove(inner.0))
    }

    /// Removes all elements, and releases all segments.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Returns a `Cursor`, positioned before the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&self.segments, self.capacity)
    }

    /// Returns an iterator over the elements, in order.
    ///
    /// The iteration stops at the first hole left by a removal, if any.
    pub fn iter(&self) -> Cursor<'_, T> { self.cursor() }

    /// Appends all elements, in order, to `other`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let list: ChunkedList<_> = (0..3).collect();
    /// let mut other: ChunkedList<_> = (7..8).collect();
    ///
    /// list.copy_into(&mut other);
    /// assert_eq!(vec![7, 0, 1, 2], other.iter().copied().collect::<Vec<_>>());
    /// ```
    pub fn copy_into<D>(&self, other: &mut ChunkedList<T, D>)
    where
        T: Clone,
    {
        for element in self.iter() {
            other.add(element.clone());
        }
    }

    /// Copies all elements, in order, into `target` starting at `offset`.
    ///
    /// #   Errors
    ///
    /// Returns `OutOfRange` if `offset` is past the end of `target`, or if there is not room for `len` elements
    /// after `offset`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let list: ChunkedList<_> = (1..4).collect();
    /// let mut target = [0; 5];
    ///
    /// assert_eq!(Ok(()), list.copy_to(&mut target, 1));
    /// assert_eq!([0, 1, 2, 3, 0], target);
    ///
    /// assert!(list.copy_to(&mut target, 3).is_err());
    /// ```
    pub fn copy_to(&self, target: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        if offset > target.len() {
            return Err(Failure::OutOfRange { index: offset, len: target.len() });
        }

        let len = self.len();

        if target.len() - offset < len {
            return Err(Failure::OutOfRange { index: offset + len, len: target.len() });
        }

        for (slot, element) in target[offset..].iter_mut().zip(self.iter()) {
            *slot = element.clone();
        }

        Ok(())
    }

    //  Returns the location of the element at index, skipping over holes.
    fn locate(&self, index: ElementIndex) -> Result<(SegmentIndex, InnerIndex)> {
        let len = self.len();
        let mut current = index;

        //  The retry chain is bounded by `len`, holes cannot mask an invalid index.
        loop {
            if current.0 >= len {
                return Err(Failure::OutOfRange { index: index.0, len });
            }

            let (segment, inner) = self.capacity.indexes(current);

            if self.segments.get(segment.0).map_or(false, |s| inner.0 < s.len()) {
                return Ok((segment, inner));
            }

            trace!(index = current.0, segment = segment.0, "hole in segment, retrying at next index");

            current.0 += 1;
        }
    }

    //  Places the element, returning where.
    fn place(&mut self, value: T) -> (SegmentIndex, InnerIndex) {
        let max = self.capacity.of_segment();

        if let Some(segment) = self.segments.iter().position(|s| s.len() != max) {
            let elements = &mut self.segments[segment];
            elements.push(value);
            return (SegmentIndex(segment), InnerIndex(elements.len() - 1));
        }

        trace!(segment = self.segments.len(), max_segment_items = max, "allocating segment");

        let mut elements = Vec::with_capacity(max);
        elements.push(value);
        self.segments.push(elements);

        (SegmentIndex(self.segments.len() - 1), InnerIndex(0))
    }
}

impl<T, C: Comparer<T>> ChunkedList<T, C> {
    /// Returns `true` if the list contains the value, as per the comparer.
    ///
    /// Only elements up to the first hole, if any, are considered.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let list: ChunkedList<_> = (0..3).collect();
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&3));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|e| self.comparer.equals(e, value))
    }
}

impl<T: Sync, C: Comparer<T> + Sync> ChunkedList<T, C> {
    /// Removes one element equal to the value, as per the comparer.
    ///
    /// All segments are scanned in parallel; if several elements match, the one in the first segment is removed.
    ///
    /// Returns whether an element was removed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let mut list: ChunkedList<_> = [25].iter().copied().collect();
    ///
    /// assert!(list.remove(&25));
    /// assert!(!list.remove(&25));
    /// assert_eq!(0, list.len());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some((segment, inner)) => {
                self.segments[segment.0].remove(inner.0);
                true
            },
            None => false,
        }
    }

    /// Returns the index of an element equal to the value, as per the comparer, if any.
    ///
    /// All segments are scanned in parallel; if several elements match, the one in the first segment is reported.
    ///
    /// #   Warning
    ///
    /// For any match beyond the first segment, the index reported is that of the match, minus `max_segment_items`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chunked::list::ChunkedList;
    /// let list: ChunkedList<u32> = {
    ///     let mut list = ChunkedList::with_segment_bytes(40);
    ///     list.extend(0..30);
    ///     list
    /// };
    ///
    /// assert_eq!(Some(3), list.index_of(&3));
    /// assert_eq!(Some(3), list.index_of(&13));
    /// assert_eq!(Some(13), list.index_of(&23));
    /// assert_eq!(None, list.index_of(&30));
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let (segment, inner) = self.find(value)?;

        let segment = SegmentIndex(segment.0.saturating_sub(1));

        Some(self.capacity.element(segment, inner).0)
    }

    /// Appends the element, as `add` does, then returns `index_of` the element.
    pub fn add_and_index_of(&mut self, value: T) -> Option<usize> {
        let (segment, inner) = self.place(value);

        self.index_of(&self.segments[segment.0][inner.0])
    }

    fn find(&self, value: &T) -> Option<(SegmentIndex, InnerIndex)> {
        let comparer = &self.comparer;
        fanout::first_match(&self.segments, |e| comparer.equals(e, value))
    }
}

impl<T, C: Default> Default for ChunkedList<T, C> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug, C> fmt::Debug for ChunkedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ChunkedList {{ max_segment_items: {}, len: {}, segments: [",
            self.max_segment_items(),
            self.len()
        )?;

        for (index, segment) in self.segments.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", segment)?;
        }

        write!(f, "] }}")
    }
}

impl<T, C> iter::Extend<T> for ChunkedList<T, C> {
    fn extend<I>(&mut self, collection: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in collection {
            self.add(element);
        }
    }
}

impl<T, C: Default> iter::FromIterator<T> for ChunkedList<T, C> {
    fn from_iter<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut result = Self::new();
        result.extend(collection);
        result
    }
}

impl<'a, T, C> IntoIterator for &'a ChunkedList<T, C> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.cursor() }
}

impl<T, C> ops::Index<usize> for ChunkedList<T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|f| panic_from_failure(f))
    }
}

impl<T, C> ops::IndexMut<usize> for ChunkedList<T, C> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).unwrap_or_else(|f| panic_from_failure(f))
    }
}

//  mod tests
