//  Lints
#![allow(clippy::module_inception)]

//! #   The Chunked Library
//!
//! A collection of segmented data-structures.
//! -   The `ChunkedList`: a `Vec` split across fixed-capacity segments.
//! -   The `ChunkedHashSet`: an add-only `HashSet` whose tables are `ChunkedList`s.
//!
//! No single allocation ever exceeds the configured segment budget, in exchange for a
//! slightly more expensive indexing.

pub mod comparer;
pub mod config;
pub mod failure;
pub mod hashset;
pub mod list;

mod capacity;
mod utils;
