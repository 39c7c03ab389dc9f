//! The Cursor of the ChunkedList.

use std::fmt;

use crate::capacity::{Capacity, ElementIndex};

/// A restartable cursor over the elements of a `ChunkedList`.
///
/// The cursor addresses elements by their position, translated into a segment and an
/// index within it. It stops as soon as either does not exist, even if the nominal length
/// of the list suggests further elements: it never reads past a hole left by a removal.
pub struct Cursor<'a, T> {
    segments: &'a [Vec<T>],
    capacity: Capacity,
    //  Position of the next element to visit.
    position: ElementIndex,
    current: Option<&'a T>,
}

impl<'a, T> Cursor<'a, T> {
    //  Creates an instance, positioned before the first element.
    pub(crate) fn new(segments: &'a [Vec<T>], capacity: Capacity) -> Self {
        Self { segments, capacity, position: ElementIndex(0), current: None }
    }

    /// Advances to the next element.
    ///
    /// Returns `false`, leaving `current` untouched, if there is no such element.
    pub fn move_next(&mut self) -> bool {
        if !self.has_elements() {
            return false;
        }

        let (segment, inner) = self.capacity.indexes(self.position);

        let element = match self.segments.get(segment.0).and_then(|s| s.get(inner.0)) {
            Some(element) => element,
            None => return false,
        };

        self.current = Some(element);
        self.position.0 += 1;

        true
    }

    /// Returns the element the cursor is on, if any.
    pub fn current(&self) -> Option<&'a T> { self.current }

    /// Repositions the cursor before the first element.
    pub fn reset(&mut self) {
        self.position = ElementIndex(0);
        self.current = None;
    }

    fn has_elements(&self) -> bool {
        self.segments.first().map_or(false, |first| !first.is_empty())
    }
}

//  Manual implementation, the derive would require `T: Clone`.
impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments,
            capacity: self.capacity,
            position: self.position,
            current: self.current,
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position.0)
            .field("current", &self.current)
            .finish()
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.move_next() { self.current } else { None }
    }
}
