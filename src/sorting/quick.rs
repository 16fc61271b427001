/// Quick sort with a Lomuto partition around the last element. Not stable.
///
/// Only the smaller side of each partition is sorted recursively, the larger side is handled
/// by the loop, which keeps the recursion depth logarithmic.
pub fn quick_sort<T: PartialOrd>(arr: &mut [T]) {
    log::debug!("Quick sorting {} elements", arr.len());
    sort_partition(arr);
}

fn sort_partition<T: PartialOrd>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_partition(left);
            arr = right;
        } else {
            sort_partition(right);
            arr = left;
        }
    }
}

/// Moves everything not greater than the pivot to its left and returns the pivot's final index.
fn partition<T: PartialOrd>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut i = 0;
    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, high);
    log::trace!("Partitioned {} elements around position {i}", arr.len());
    i
}
