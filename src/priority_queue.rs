use std::collections::BinaryHeap;

/// Max-heap wrapper: `top` is always the greatest element.
///
/// Wrap elements in `std::cmp::Reverse` for min-heap ordering.
#[derive(Debug)]
pub struct PriorityQueue<T: Ord> {
    heap: BinaryHeap<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, value: T) {
        self.heap.push(value);
    }

    /// Removes and returns the greatest element. Does nothing on an empty queue.
    pub fn remove_top(&mut self) -> Option<T> {
        self.heap.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
