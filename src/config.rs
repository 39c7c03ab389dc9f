//! Configuration of the collections.
//!
//! A `Config` gathers the construction-time knobs shared by `ChunkedList` and `ChunkedHashSet`:
//!
//! -   `capacity`: a hint, the number of segments to reserve for a list, or the minimum table size of a set.
//! -   `segment_bytes`: the memory footprint budget of a single segment.
//! -   `rehash_on_growth`: whether a set recomputes the hash of its elements when growing.
//!
//! ```
//! use chunked::config::Config;
//!
//! let config = Config::default().with_segment_bytes(40);
//!
//! assert_eq!(Ok(10), config.max_segment_items::<u32>());
//! assert!(config.max_segment_items::<[u8; 64]>().is_err());
//! ```

use std::mem;

use super::failure::{Failure, Result};

/// The default segment budget, in bytes.
///
/// Chosen just below the threshold at which many allocators switch to a dedicated mapping.
pub const DEFAULT_SEGMENT_BYTES: usize = 84_000;

/// Config
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Config {
    /// Capacity hint.
    pub capacity: usize,
    /// Budget of a segment, in bytes.
    pub segment_bytes: usize,
    /// Whether hashes are recomputed when a set grows.
    pub rehash_on_growth: bool,
}

impl Config {
    /// Sets the capacity hint.
    pub fn with_capacity(self, capacity: usize) -> Self { Self { capacity, ..self } }

    /// Sets the segment budget, in bytes.
    pub fn with_segment_bytes(self, segment_bytes: usize) -> Self { Self { segment_bytes, ..self } }

    /// Sets whether hashes are recomputed on growth.
    pub fn with_rehash_on_growth(self, rehash_on_growth: bool) -> Self { Self { rehash_on_growth, ..self } }

    /// Returns the maximum number of elements of type `T` a segment may hold.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `segment_bytes` is 0, or too small to hold a single `T`.
    pub fn max_segment_items<T>(&self) -> Result<usize> {
        if self.segment_bytes == 0 {
            return Err(Failure::InvalidArgument { name: "segment_bytes" });
        }

        //  Zero-sized types still count for one byte, lest a segment be infinite.
        let width = mem::size_of::<T>().max(1);
        let items = self.segment_bytes / width;

        if items == 0 {
            return Err(Failure::InvalidArgument { name: "segment_bytes" });
        }

        Ok(items)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { capacity: 0, segment_bytes: DEFAULT_SEGMENT_BYTES, rehash_on_growth: false }
    }
}
