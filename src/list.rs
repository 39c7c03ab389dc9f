//! #   The ChunkedList.
//!
//! The `ChunkedList` is an ordered sequence, much like `Vec`, whose storage is split
//! across fixed-capacity segments.
//!
//! ##  Under the covers.
//!
//! Under the covers the `ChunkedList` is a list of segments: vectors of at most
//! `max_segment_items` elements, where `max_segment_items` is derived once from the
//! configured segment budget, in bytes, and the size of the element.
//!
//! The main consequences are:
//!
//! -   No single allocation exceeds the segment budget (outside of the list of segments
//!     itself).
//! -   Appending never moves existing elements.
//! -   Indexing is arithmetic, as long as every segment but the last is full. Removing
//!     elements from a segment other than the last does not compact the segments, and
//!     indexing then skips over the holes left behind.
//!
//! #   Example: basic
//!
//! ```
//! use chunked::list::ChunkedList;
//!
//! let mut list: ChunkedList<_> = ChunkedList::new();
//! list.add(1);
//! list.add(2);
//!
//! assert_eq!(2, list.len());
//! assert_eq!(Ok(&1), list.get(0));
//!
//! list.extend([3, 4, 5].iter().copied());
//!
//! assert_eq!(5, list.len());
//! assert_eq!(4, list[3]);
//!
//! for x in &list {
//!     println!("{}", x);
//! }
//! ```
//!
//! #   Example: managing segments
//!
//! The segment budget governs how many elements each segment holds.
//!
//! ```
//! use chunked::list::ChunkedList;
//!
//! //  4 bytes per `u32`, hence 10 elements per segment.
//! let mut list: ChunkedList<u32> = ChunkedList::with_segment_bytes(40);
//! list.extend(0..25);
//!
//! assert_eq!(10, list.max_segment_items());
//! assert_eq!(3, list.number_segments());
//! assert_eq!(&[20, 21, 22, 23, 24], list.segment(2));
//! ```
//!
//! #   Example: cursors
//!
//! A `Cursor` can be cloned mid-iteration, and the clone resumes from the position of
//! the cursor it was cloned from.
//!
//! ```
//! use chunked::list::ChunkedList;
//!
//! let list: ChunkedList<_> = (0..5).collect();
//! let mut cursor = list.cursor();
//!
//! assert!(cursor.move_next());
//! assert!(cursor.move_next());
//!
//! let mut clone = cursor.clone();
//! assert_eq!(Some(&1), clone.current());
//!
//! assert_eq!(vec![2, 3, 4], cursor.copied().collect::<Vec<_>>());
//! assert!(clone.move_next());
//! assert_eq!(Some(&2), clone.current());
//! ```

mod cursor;
mod fanout;
mod list;

pub use self::cursor::Cursor;
pub use self::list::ChunkedList;
