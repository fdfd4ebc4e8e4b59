use crate::error::HeapError;

/// A max-heap with branching factor `d` over a fixed-capacity buffer.
///
/// Slots `[0, size)` hold the heap; slots `[size, capacity)` are unused and may
/// hold stale keys. The buffer is allocated once and never grows.
#[derive(Debug, Clone)]
pub struct DHeap<T> {
    data: Box<[T]>,
    size: usize,
    d: usize,
}

impl<T: Ord + Copy + Default> DHeap<T> {
    /// Creates an empty heap holding at most `max_size` keys.
    ///
    /// # Panics
    ///
    /// Panics if `d < 2`. Use [`DHeap::try_new`] for unchecked input.
    pub fn new(max_size: usize, d: usize) -> Self {
        if d < 2 {
            panic!("DHeap requires a branching factor of at least 2, got {d}")
        }
        DHeap {
            data: vec![T::default(); max_size].into_boxed_slice(),
            size: 0,
            d,
        }
    }

    pub fn try_new(max_size: usize, d: usize) -> Result<Self, HeapError> {
        if d < 2 {
            return Err(HeapError::InvalidBranchingFactor(d));
        }
        Ok(Self::new(max_size, d))
    }

    /// Builds a full heap out of `vec` in linear time. The capacity equals `vec.len()`.
    pub fn from_vec(vec: Vec<T>, d: usize) -> Self {
        if d < 2 {
            panic!("DHeap requires a branching factor of at least 2, got {d}")
        }
        let size = vec.len();
        let mut h = DHeap {
            data: vec.into_boxed_slice(),
            size,
            d,
        };
        if size > 1 {
            for i in (0..=h.parent(size - 1)).rev() {
                h.max_heapify(i)
            }
        }
        h
    }

    /// Index of the parent of `i`. The root is its own parent.
    pub fn parent(&self, i: usize) -> usize {
        if i == 0 {
            0
        } else {
            (i - 1) / self.d
        }
    }

    /// Index of the `k`-th child of `i`, `k` in `[0, d)`. Saturates instead of overflowing.
    pub fn child(&self, i: usize, k: usize) -> usize {
        self.d.saturating_mul(i).saturating_add(k + 1)
    }

    fn index_in_range(&self, i: usize) -> bool {
        i < self.data.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        debug_assert!(self.index_in_range(i) && self.index_in_range(j));
        if self.index_in_range(i) && self.index_in_range(j) {
            self.data.swap(i, j)
        }
    }

    /// Places `key` in the first free slot and sifts it up.
    pub fn insert(&mut self, key: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let i = self.size;
        self.data[i] = key;
        self.size += 1;
        self.bubble_up(i);
        Ok(())
    }

    /// Raises the key at `index` to `key` and restores order towards the root.
    ///
    /// Lowering a key is not supported: when `key` is smaller than the current
    /// key the call succeeds without changing anything.
    pub fn increase_key(&mut self, index: usize, key: T) -> Result<(), HeapError> {
        if index >= self.size {
            return Err(HeapError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        if key < self.data[index] {
            return Ok(());
        }
        self.data[index] = key;
        self.bubble_up(index);
        Ok(())
    }

    fn bubble_up(&mut self, mut i: usize) {
        let key = self.data[i];
        while i > 0 {
            let pi = self.parent(i);
            if self.data[pi] >= key {
                break;
            }
            self.swap(i, pi);
            i = pi;
        }
    }

    /// Removes and returns the largest key.
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        if self.size == 0 {
            return Err(HeapError::EmptyHeap);
        }
        let max = self.data[0];
        self.size -= 1;
        self.data[0] = self.data[self.size];
        self.max_heapify(0);
        Ok(max)
    }

    /// Index of the largest key among `i` and its children. Ties keep `i`,
    /// then the lowest-numbered child.
    fn highest_priority_index(&self, i: usize) -> usize {
        let mut ret = i;
        for k in 0..self.d {
            let ci = match self.d.checked_mul(i).and_then(|x| x.checked_add(k + 1)) {
                Some(ci) if ci < self.size => ci,
                _ => break,
            };
            if self.data[ci] > self.data[ret] {
                ret = ci;
            }
        }
        ret
    }

    /// Sifts the key at `from_index` down, assuming both subtrees below are heaps.
    /// Indices past the valid region are ignored.
    pub fn max_heapify(&mut self, from_index: usize) {
        let mut i = from_index;
        while i < self.size {
            let ci = self.highest_priority_index(i);
            if ci == i {
                break;
            }
            self.swap(i, ci);
            i = ci;
        }
    }

    /// Height of the complete `d`-ary tree holding `len()` keys, or `None` for an empty heap.
    ///
    /// Equals `ceil(log_d(len * (d - 1) + 1)) - 1`, computed without floating point.
    pub fn height(&self) -> Option<usize> {
        if self.size == 0 {
            return None;
        }
        // size * (d - 1) + 1 always fits in u128
        let nodes = self.size as u128 * (self.d as u128 - 1) + 1;
        let mut levels = 0;
        let mut reach: u128 = 1;
        while reach < nodes {
            levels += 1;
            reach = match reach.checked_mul(self.d as u128) {
                Some(r) => r,
                None => break,
            };
        }
        Some(levels - 1)
    }

    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The valid region of the backing buffer, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.data.len()
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn branching_factor(&self) -> usize {
        self.d
    }
}

/// Drains the heap in non-increasing order.
impl<T: Ord + Copy + Default> Iterator for DHeap<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T: Ord + Copy + Default> ExactSizeIterator for DHeap<T> {}
