//! A fixed-capacity, array-backed d-ary max-heap.
//!
//! ```
//! use dheap::DHeap;
//!
//! let mut heap = DHeap::new(8, 2);
//! for key in [3, 1, 4, 1, 5, 9, 2, 6] {
//!     heap.insert(key).unwrap();
//! }
//! let drained: Vec<i64> = heap.collect();
//! assert_eq!(drained, vec![9, 6, 5, 4, 3, 2, 1, 1]);
//! ```

mod d_way_heap;
mod error;
mod render;

#[cfg(test)]
mod proptests;

pub use d_way_heap::DHeap;
pub use error::HeapError;
pub use render::Levels;
