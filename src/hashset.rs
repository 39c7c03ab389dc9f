//! #   The ChunkedHashSet.
//!
//! The `ChunkedHashSet` is an add-only hash set, whose tables are `ChunkedList`s rather
//! than monolithic arrays.
//!
//! ##  Under the covers.
//!
//! Under the covers the `ChunkedHashSet` is a table of chains:
//!
//! -   A head table, of prime size, indexed by the 31-bit hash of an element modulo the size.
//! -   A slot table, of the same size, each slot holding an element, its hash, and the link
//!     to the next slot of its chain.
//!
//! Once the slot table is exhausted, both tables are rebuilt at the next prime size of about
//! twice the number of elements, and every element is re-chained.
//!
//! Only adding elements is supported at the moment: all other operations of a set report
//! `Failure::Unsupported`.
//!
//! #   Example: basic
//!
//! ```
//! use chunked::hashset::ChunkedHashSet;
//!
//! let mut set: ChunkedHashSet<_> = ChunkedHashSet::new();
//!
//! assert!(set.add(1));
//! assert!(!set.add(1));
//! assert_eq!(1, set.len());
//!
//! set.extend(2..10);
//! assert_eq!(9, set.len());
//! ```
//!
//! #   Example: managing capacity
//!
//! ```
//! use chunked::hashset::ChunkedHashSet;
//!
//! //  The capacity requested is rounded-up to the closest prime.
//! let mut set: ChunkedHashSet<_> = ChunkedHashSet::with_capacity(4);
//! assert_eq!(7, set.capacity());
//!
//! set.extend(0..8);
//! assert_eq!(17, set.capacity());
//! ```
//!
//! #   Example: unsupported operations
//!
//! ```
//! use chunked::failure::Failure;
//! use chunked::hashset::ChunkedHashSet;
//!
//! let mut set: ChunkedHashSet<_> = ChunkedHashSet::new();
//! set.add(1);
//!
//! assert_eq!(Err(Failure::Unsupported { operation: "contains" }), set.contains(&1));
//! assert_eq!(Err(Failure::Unsupported { operation: "union_with" }), set.union_with([2, 3]));
//! ```

pub mod primes;

mod hashset;
mod slot;

pub use self::hashset::ChunkedHashSet;
