//! Binary search variants over sorted slices and monotone predicates. Slice midpoints are
//! computed as `lo + (hi - lo) / 2` and integer midpoints as a floor average, so neither
//! overflows.

use num_traits::PrimInt;
use std::cmp::Ordering;

/// Finds the index of an element equal to `target` in the sorted slice `arr`. With duplicates,
/// any one of the matching indices may be returned.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// First index whose element is not less than `target`, or `arr.len()` if there is none.
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// First index whose element is greater than `target`, or `arr.len()` if there is none.
pub fn upper_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if arr[mid] <= *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Smallest integer in `[lo, hi)` for which `predicate` holds, or `hi` if it holds nowhere.
/// `predicate` must be monotone: once true, it stays true for every larger input.
///
/// # Examples
/// ```
///use clavis::partition_point_by;
///
///// Smallest x with x * x >= 50
///assert_eq!(8, partition_point_by(0_i64, 100, |x| x * x >= 50));
/// ```
pub fn partition_point_by<T, P>(mut lo: T, mut hi: T, mut predicate: P) -> T
where
    T: PrimInt,
    P: FnMut(T) -> bool,
{
    while lo < hi {
        let mid = floor_average(lo, hi);
        if predicate(mid) {
            hi = mid;
        } else {
            lo = mid + T::one();
        }
    }
    lo
}

/// `floor((a + b) / 2)` without forming `a + b` or `b - a`, so it holds over the whole range of
/// signed types too. `>>` is arithmetic on signed integers.
fn floor_average<T: PrimInt>(a: T, b: T) -> T {
    (a & b) + ((a ^ b) >> 1)
}
