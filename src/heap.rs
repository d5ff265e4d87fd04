//! Array-backed binary max-heap and the top-k selection built on it.
//!
//! Elements live in a flat `Vec` and the tree shape is pure index
//! arithmetic. The greatest element sits at the root, so selecting the `k`
//! smallest elements either heap-sorts everything and reads the front, or
//! streams through a heap bounded to `k` entries, evicting the current
//! greatest whenever something smaller arrives.

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    items: Vec<T>,
    heap_size: usize,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        MaxHeap {
            items: Vec::new(),
            heap_size: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MaxHeap {
            items: Vec::with_capacity(capacity),
            heap_size: 0,
        }
    }

    /// Takes ownership of `items` and arranges them into a heap in O(n).
    pub fn from_vec(items: Vec<T>) -> Self {
        let heap_size = items.len();
        let mut heap = MaxHeap { items, heap_size };
        heap.build();
        heap
    }

    fn build(&mut self) {
        for i in (0..self.heap_size / 2).rev() {
            self.heapify(i);
        }
    }

    /// Sifts the element at `i` down until neither child is greater.
    ///
    /// Both subtrees of `i` must already be heaps.
    pub fn heapify(&mut self, mut i: usize) {
        loop {
            let l = left(i);
            let r = right(i);
            let mut largest = i;

            if l < self.heap_size && self.items[l] > self.items[largest] {
                largest = l;
            }
            if r < self.heap_size && self.items[r] > self.items[largest] {
                largest = r;
            }

            if largest == i {
                return;
            }

            self.items.swap(i, largest);
            i = largest;
        }
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.heap_size += 1;

        let mut i = self.heap_size - 1;
        while i > 0 && self.items[parent(i)] < self.items[i] {
            self.items.swap(i, parent(i));
            i = parent(i);
        }
    }

    /// Removes and returns the greatest element, or `None` once empty.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.heap_size == 0 {
            return None;
        }

        let last = self.heap_size - 1;
        self.items.swap(0, last);
        self.heap_size = last;
        let max = self.items.pop();
        self.heapify(0);
        max
    }

    /// Swaps in `item` for the current root and restores the heap.
    /// Returns the evicted root; on an empty heap `item` is simply inserted.
    pub fn replace_max(&mut self, item: T) -> Option<T> {
        if self.heap_size == 0 {
            self.insert(item);
            return None;
        }

        let old = std::mem::replace(&mut self.items[0], item);
        self.heapify(0);
        Some(old)
    }

    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn len(&self) -> usize {
        self.heap_size
    }

    pub fn is_empty(&self) -> bool {
        self.heap_size == 0
    }

    /// The logical heap in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.heap_size]
    }

    /// At most `limit` entries from the front of storage, root first.
    pub fn preview(&self, limit: usize) -> &[T] {
        &self.as_slice()[..limit.min(self.heap_size)]
    }

    /// Sorts ascending in place by repeatedly moving the root behind the
    /// shrinking logical end.
    pub fn heap_sort(mut self) -> Vec<T> {
        let original_size = self.heap_size;
        for i in (1..original_size).rev() {
            self.items.swap(0, i);
            self.heap_size -= 1;
            self.heapify(0);
        }
        self.heap_size = original_size;
        self.items.truncate(original_size);
        self.items
    }

    /// The `k` smallest elements in ascending order.
    pub fn top_k(self, k: usize) -> Vec<T> {
        let mut sorted = self.heap_sort();
        sorted.truncate(k);
        sorted
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        MaxHeap::new()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(items: Vec<T>) -> Self {
        MaxHeap::from_vec(items)
    }
}

/// The `k` smallest elements of `items` in ascending order, holding no more
/// than `k` of them at any time.
pub fn smallest_k<T, I>(items: I, k: usize) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Vec::new();
    }

    let items = items.into_iter();
    let mut heap = MaxHeap::with_capacity(k.min(items.size_hint().0));
    for item in items {
        if heap.len() < k {
            heap.insert(item);
        } else if heap.peek().is_some_and(|max| item < *max) {
            heap.replace_max(item);
        }
    }

    heap.heap_sort()
}
