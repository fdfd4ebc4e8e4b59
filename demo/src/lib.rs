//! Command-line collaborators around [`dheap::DHeap`]: reading keys from a
//! file, asking for the branching factor, and printing the heap and its
//! drained order.

pub mod input;
pub mod report;
