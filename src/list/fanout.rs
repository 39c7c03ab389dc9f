//! Data-parallel scans over the segments.
//!
//! One task is spawned per segment, each scanning its own segment only and reporting its
//! own result; the results are reduced, in segment order, once all tasks joined.

use rayon::prelude::*;

use crate::capacity::{InnerIndex, SegmentIndex};

//  Returns the location of the first element matching `predicate`, in segment order.
//
//  Segments after a matching one are not scanned to completion.
pub fn first_match<T, F>(segments: &[Vec<T>], predicate: F) -> Option<(SegmentIndex, InnerIndex)>
where
    T: Sync,
    F: Fn(&T) -> bool + Sync,
{
    segments
        .par_iter()
        .enumerate()
        .find_map_first(|(segment, elements)| {
            elements.iter()
                .position(&predicate)
                .map(|inner| (SegmentIndex(segment), InnerIndex(inner)))
        })
}
