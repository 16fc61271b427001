/// Heap sort: builds a max-heap in place, then repeatedly swaps the root behind the shrinking
/// heap. Not stable, O(n log n) with no extra memory.
pub fn heap_sort<T: PartialOrd>(arr: &mut [T]) {
    log::debug!("Heap sorting {} elements", arr.len());
    let len = arr.len();
    for idx in (0..len / 2).rev() {
        sift_down(arr, idx, len);
    }
    for end in (1..len).rev() {
        arr.swap(0, end);
        sift_down(arr, 0, end);
    }
}

fn sift_down<T: PartialOrd>(arr: &mut [T], mut idx: usize, heap_len: usize) {
    loop {
        let left = 2 * idx + 1;
        let right = 2 * idx + 2;
        let mut largest = idx;
        if left < heap_len && arr[left] > arr[largest] {
            largest = left;
        }
        if right < heap_len && arr[right] > arr[largest] {
            largest = right;
        }
        if largest == idx {
            return;
        }
        log::trace!("Swapping heap positions {idx} and {largest}");
        arr.swap(idx, largest);
        idx = largest;
    }
}
