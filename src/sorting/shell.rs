use crate::ShellSortParams;

/// Shell sort: insertion sort over elements `gap` apart, with the gap shrinking by the
/// configured divisor after every pass. The last pass always uses a gap of 1.
pub fn shell_sort<T: PartialOrd>(arr: &mut [T], params: &ShellSortParams) {
    log::debug!("Shell sorting {} elements", arr.len());
    let len = arr.len();
    if len < 2 {
        return;
    }
    let mut gap = (len / params.gap_divisor).max(1);
    loop {
        log::trace!("Current gap size: {gap}");
        for i in gap..len {
            let mut j = i;
            while j >= gap && arr[j - gap] > arr[j] {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        if gap == 1 {
            break;
        }
        gap = (gap / params.gap_divisor).max(1);
    }
}
