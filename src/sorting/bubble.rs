/// Bubble sort with an early exit once a full pass makes no swap. Stable, O(n²).
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    log::debug!("Bubble sorting {} elements", arr.len());
    let len = arr.len();
    for i in 0..len {
        let mut swapped = false;
        for j in 1..len - i {
            if arr[j - 1] > arr[j] {
                log::trace!("Swapping positions {} and {j}", j - 1);
                arr.swap(j - 1, j);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
