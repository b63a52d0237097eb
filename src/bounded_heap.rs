/// A min-heap with a fixed maximum capacity, backed by a flat buffer.
///
/// The buffer is read as a binary tree: the children of slot `i` live at
/// `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Every parent is `<=`
/// its children, so the root is the smallest item retained so far.
///
/// Once the heap is full, an incoming item is admitted only if it is strictly
/// greater than the root; it then overwrites the root and is sifted down.
/// This keeps the `capacity` largest items seen:
/// - Push: O(log N) where N is the capacity
/// - Memory: O(N) regardless of how many items are pushed
pub struct BoundedMinHeap<T: Ord> {
    buf: Vec<T>,
    capacity: usize,
}

/// What [`BoundedMinHeap::push`] did with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Appended while the heap was still filling up.
    Filled,
    /// Replaced the root of a full heap.
    Replaced,
    /// Not retained: the heap is full and the item is `<=` the root,
    /// or the capacity is zero.
    Discarded,
}

impl<T: Ord> BoundedMinHeap<T> {
    /// Creates a new bounded min-heap with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Offers an item to the heap.
    ///
    /// If the heap is not full, the item is added.
    /// If the heap is full and the item is larger than the minimum,
    /// the minimum is overwritten and the item sifted into place.
    /// Otherwise, the item is dropped. Ties with the minimum are dropped too.
    pub fn push(&mut self, item: T) -> Admission {
        if self.buf.len() < self.capacity {
            self.buf.push(item);
            let tail = self.buf.len() - 1;
            sift_up(&mut self.buf, tail);
            return Admission::Filled;
        }

        match self.buf.first_mut() {
            Some(root) if item > *root => {
                *root = item;
                sift_down(&mut self.buf, 0, self.capacity);
                Admission::Replaced
            }
            _ => Admission::Discarded,
        }
    }

    /// Returns true if `push(item)` would retain the item.
    ///
    /// Lets callers holding borrowed data skip cloning items that would be
    /// discarded anyway.
    pub fn admits(&self, item: &T) -> bool {
        if self.buf.len() < self.capacity {
            return true;
        }
        matches!(self.buf.first(), Some(root) if item > root)
    }

    /// Returns the smallest retained item.
    pub fn peek(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Consumes the heap and returns the items in buffer order.
    ///
    /// No sorting happens here: the order is whatever the heap layout left.
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    /// Consumes the heap and returns the items in descending order (largest first).
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.buf;
        vec.sort_by(|a, b| b.cmp(a));
        vec
    }

    /// Returns the number of items currently in the heap.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the maximum number of items the heap retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true once `len() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.capacity
    }

    #[cfg(test)]
    fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

/// Moves the item at `index` towards the root until its parent is `<=` it.
fn sift_up<T: Ord>(heap: &mut [T], mut index: usize) {
    debug_assert!(index < heap.len());

    while index > 0 {
        let parent = (index - 1) >> 1;
        if heap[index] < heap[parent] {
            heap.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Moves the item at `index` towards the leaves until both children within
/// the first `size` slots are `>=` it.
fn sift_down<T: Ord>(heap: &mut [T], mut index: usize, size: usize) {
    debug_assert!(size <= heap.len());

    loop {
        let left = (index << 1) + 1;
        if left >= size {
            break;
        }
        let right = left + 1;

        // Only compare against the right child when it exists.
        let smallest = if right < size && heap[right] < heap[left] {
            right
        } else {
            left
        };

        if heap[smallest] < heap[index] {
            heap.swap(smallest, index);
            index = smallest;
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_invariant<T: Ord + std::fmt::Debug>(heap: &[T]) {
        for i in 1..heap.len() {
            let parent = (i - 1) / 2;
            assert!(
                heap[parent] <= heap[i],
                "heap invariant broken at {}: parent {:?} > child {:?}",
                i,
                heap[parent],
                heap[i]
            );
        }
    }

    #[test]
    fn test_bounded_heap_basic() {
        let mut heap = BoundedMinHeap::new(3);

        heap.push(5);
        heap.push(2);
        heap.push(8);

        assert_eq!(heap.peek(), Some(&2));
        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec![8, 5, 2]);
    }

    #[test]
    fn test_bounded_heap_eviction() {
        let mut heap = BoundedMinHeap::new(3);

        // Fill heap with [5, 2, 8]
        heap.push(5);
        heap.push(2);
        heap.push(8);

        // Push 10 - should overwrite 2 (smallest)
        assert_eq!(heap.push(10), Admission::Replaced);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec![10, 8, 5]);
    }

    #[test]
    fn test_bounded_heap_no_eviction_if_smaller() {
        let mut heap = BoundedMinHeap::new(3);

        heap.push(5);
        heap.push(8);
        heap.push(10);

        assert_eq!(heap.push(1), Admission::Discarded);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec![10, 8, 5]);
    }

    #[test]
    fn test_bounded_heap_tie_with_root_is_discarded() {
        let mut heap = BoundedMinHeap::new(2);

        assert_eq!(heap.push(4), Admission::Filled);
        assert_eq!(heap.push(7), Admission::Filled);
        assert!(!heap.admits(&4));
        assert_eq!(heap.push(4), Admission::Discarded);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_bounded_heap_capacity() {
        let mut heap = BoundedMinHeap::new(5);

        for i in 0..100 {
            heap.push(i);
        }

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.capacity(), 5);
        assert!(heap.is_full());

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, vec![99, 98, 97, 96, 95]);
    }

    #[test]
    fn test_bounded_heap_zero_capacity() {
        let mut heap = BoundedMinHeap::new(0);

        assert!(heap.is_full());
        assert!(!heap.admits(&1));
        assert_eq!(heap.push(1), Admission::Discarded);
        assert_eq!(heap.peek(), None);
        assert!(heap.into_vec().is_empty());
    }

    #[test]
    fn test_bounded_heap_empty() {
        let heap: BoundedMinHeap<i32> = BoundedMinHeap::new(10);
        assert!(heap.is_empty());
        assert!(!heap.is_full());
        assert_eq!(heap.len(), 0);

        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted, Vec::<i32>::new());
    }

    #[test]
    fn test_bounded_heap_single_item() {
        let mut heap = BoundedMinHeap::new(5);
        assert_eq!(heap.push(42), Admission::Filled);

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.into_vec(), vec![42]);
    }

    #[test]
    fn test_bounded_heap_invariant_after_every_push() {
        let mut heap = BoundedMinHeap::new(7);
        let input = [15, 3, 22, 8, 8, 1, 30, 12, 4, 27, 19, 5, 30, 2, 16, 9];

        for x in input {
            heap.push(x);
            assert_heap_invariant(heap.as_slice());
        }

        assert_eq!(heap.into_sorted_vec(), vec![30, 30, 27, 22, 19, 16, 15]);
    }

    #[test]
    fn test_sift_up_moves_new_minimum_to_root() {
        let mut buf = vec![2, 5, 3, 9, 6, 1];
        sift_up(&mut buf, 5);
        assert_eq!(buf[0], 1);
        assert_heap_invariant(&buf);
    }

    #[test]
    fn test_bounded_heap_invariant_across_capacities() {
        let mut state: u32 = 0x9e37_79b9;
        for capacity in 0..40 {
            let mut heap = BoundedMinHeap::new(capacity);
            for _ in 0..500 {
                // xorshift32
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                heap.push(state % 97);
                assert!(heap.len() <= capacity);
                assert_heap_invariant(heap.as_slice());
            }
            assert_eq!(heap.len(), capacity);
        }
    }

    #[test]
    fn test_sift_down_with_only_left_child() {
        // size 2: root has a left child and no right child in range
        let mut buf = vec![9, 4, 0];
        sift_down(&mut buf, 0, 2);
        assert_eq!(buf, vec![4, 9, 0]);
    }

    #[test]
    fn test_sift_down_picks_smaller_child() {
        let mut buf = vec![10, 6, 3, 7, 8, 4, 5];
        let size = buf.len();
        sift_down(&mut buf, 0, size);
        assert_eq!(buf[0], 3);
        assert_heap_invariant(&buf);
    }
}
