//! Capacity of the segments.
//!
//! Apart from holding the capacity itself, assembles the index arithmetic based off the
//! capacity.

//  Capacity.
//
//  A building block for computations related to the capacity of segments.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity {
    max_segment_items: usize,
}

impl Capacity {
    //  Creates an instance.
    //
    //  #   Panics
    //
    //  Panics (in Debug) if `max_segment_items` is 0.
    pub fn new(max_segment_items: usize) -> Self {
        debug_assert!(max_segment_items > 0);

        Self { max_segment_items }
    }

    //  Returns the maximum number of elements of a segment.
    pub fn of_segment(self) -> usize { self.max_segment_items }

    //  Returns the nominal length of a sequence of segments.
    //
    //  Every segment but the last is assumed full, which only holds as long as no
    //  element was removed.
    pub fn len(self, segments: NumberSegments, last: usize) -> usize {
        if segments.0 == 0 {
            0
        } else {
            self.max_segment_items * (segments.0 - 1) + last
        }
    }

    //  Returns the index of the Segment, and within the Segment.
    //
    //  The result may be out of bounds.
    pub fn indexes(self, index: ElementIndex) -> (SegmentIndex, InnerIndex) {
        (
            SegmentIndex(index.0 / self.max_segment_items),
            InnerIndex(index.0 % self.max_segment_items),
        )
    }

    //  Returns the element index matching a Segment and an index within it.
    pub fn element(self, segment: SegmentIndex, inner: InnerIndex) -> ElementIndex {
        ElementIndex(segment.0 * self.max_segment_items + inner.0)
    }
}

/// The index of a segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SegmentIndex(pub usize);

/// The index of an element in the overall list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementIndex(pub usize);

/// The index of an element within a segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct InnerIndex(pub usize);

/// The number of segments.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NumberSegments(pub usize);

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn capacity_len() {
    fn len(segments: usize, last: usize) -> usize {
        let capacity = Capacity::new(10);
        capacity.len(NumberSegments(segments), last)
    }

    assert_eq!(0, len(0, 0));
    assert_eq!(0, len(1, 0));
    assert_eq!(3, len(1, 3));
    assert_eq!(10, len(1, 10));
    assert_eq!(11, len(2, 1));
    assert_eq!(30, len(3, 10));
}

#[test]
fn capacity_indexes() {
    fn indexes(n: usize) -> (usize, usize) {
        let capacity = Capacity::new(10);
        let (segment, inner) = capacity.indexes(ElementIndex(n));
        (segment.0, inner.0)
    }

    //  [0] = [XXXXXXXXXX]
    //  [1] = [XXXXXXXXXX]
    //  [2] = [XXX.......]

    assert_eq!((0, 0), indexes(0));
    assert_eq!((0, 9), indexes(9));
    assert_eq!((1, 0), indexes(10));
    assert_eq!((2, 2), indexes(22));
    assert_eq!((100, 0), indexes(1000));
}

#[test]
fn capacity_single_item_segments() {
    let capacity = Capacity::new(1);

    assert_eq!((SegmentIndex(5), InnerIndex(0)), capacity.indexes(ElementIndex(5)));
    assert_eq!(ElementIndex(5), capacity.element(SegmentIndex(5), InnerIndex(0)));
    assert_eq!(6, capacity.len(NumberSegments(6), 1));
}

}
