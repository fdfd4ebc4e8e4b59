use thiserror::Error;

/// Failures reported by [`DHeap`](crate::DHeap) operations.
///
/// A failed call never touches the elements that were valid before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("heap is empty")]
    EmptyHeap,

    #[error("index {index} is outside the heap (size {size})")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("branching factor must be at least 2, got {0}")]
    InvalidBranchingFactor(usize),
}
