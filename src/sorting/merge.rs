/// Top-down merge sort. Stable: on equal keys the element from the left run is taken first.
pub fn merge_sort<T: PartialOrd + Clone>(arr: &mut [T]) {
    log::debug!("Merge sorting {} elements", arr.len());
    sort_run(arr);
}

fn sort_run<T: PartialOrd + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    sort_run(&mut arr[..mid]);
    sort_run(&mut arr[mid..]);
    merge(arr, mid);
}

fn merge<T: PartialOrd + Clone>(arr: &mut [T], mid: usize) {
    log::trace!("Merging runs of length {mid} and {}", arr.len() - mid);
    let mut merged = Vec::with_capacity(arr.len());
    let (left, right) = arr.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    arr.clone_from_slice(&merged);
}
