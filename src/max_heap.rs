use crate::ClavisError;

/// Binary max-heap stored in a dense vector, where every element at `i` is at least as large as
/// its children at `2i + 1` and `2i + 2`.
///
/// # Examples
/// ```
///use clavis::MaxHeap;
///
///let mut heap = MaxHeap::new();
///heap.push(5);
///heap.push(10);
///heap.push(3);
///assert_eq!(&10, heap.top().unwrap());
///assert_eq!(10, heap.pop().unwrap());
///assert_eq!(&5, heap.top().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MaxHeap<T> {
    data: Vec<T>,
}

impl<T: PartialOrd> MaxHeap<T> {

    pub fn new() -> Self {
        MaxHeap { data: Vec::new() }
    }

    /// Builds a heap from arbitrary values in O(n) by sifting down every internal node.
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = MaxHeap { data };
        for idx in (0..heap.data.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    /// Appends `value` and sifts it up while it exceeds its parent. O(log n).
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the largest element. The last element takes the root's place and
    /// is sifted down. O(log n).
    pub fn pop(&mut self) -> Result<T, ClavisError> {
        if self.data.is_empty() {
            return Err(ClavisError::EmptyContainer(String::from("Cannot pop from an empty heap")));
        }
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// The largest element, without removing it.
    pub fn top(&self) -> Result<&T, ClavisError> {
        self.data.first().ok_or_else(|| {
            ClavisError::EmptyContainer(String::from("An empty heap has no top element"))
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drains the heap into ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted.reverse();
        sorted
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] > self.data[parent] {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left_child = 2 * idx + 1;
            let right_child = 2 * idx + 2;
            let mut largest = idx;

            if left_child < len && self.data[left_child] > self.data[largest] {
                largest = left_child;
            }
            if right_child < len && self.data[right_child] > self.data[largest] {
                largest = right_child;
            }
            if largest == idx {
                break;
            }
            self.data.swap(idx, largest);
            idx = largest;
        }
    }
}

impl<T: PartialOrd> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
