use crate::RadixSortParams;
use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Least-significant-digit radix sort for unsigned integers. Each pass is a stable counting
/// sort on one digit in the configured base, so the whole sort is stable.
///
/// # Examples
/// ```
///use clavis::{radix_sort, RadixSortParams};
///
///let mut values: Vec<u32> = vec![170, 45, 75, 90, 802, 24, 2, 66];
///radix_sort(&mut values, &RadixSortParams::builder().radix(16).build());
///assert_eq!(vec![2, 24, 45, 66, 75, 90, 170, 802], values);
/// ```
pub fn radix_sort<T>(arr: &mut [T], params: &RadixSortParams)
where
    T: PrimInt + Unsigned + AsPrimitive<u128>,
{
    log::debug!("Radix sorting {} elements in base {}", arr.len(), params.radix);
    let max: u128 = match arr.iter().max() {
        Some(max) => max.as_(),
        None => return,
    };
    let radix = params.radix as u128;
    let mut output = arr.to_vec();
    let mut count = vec![0_usize; params.radix];

    let mut exp: u128 = 1;
    while max / exp > 0 {
        log::trace!("Processing digit position {exp}");
        let digit = |value: &T| ((value.as_() / exp) % radix) as usize;

        count.iter_mut().for_each(|c| *c = 0);
        for value in arr.iter() {
            count[digit(value)] += 1;
        }
        for d in 1..count.len() {
            count[d] += count[d - 1];
        }
        for value in arr.iter().rev() {
            let d = digit(value);
            count[d] -= 1;
            output[count[d]] = *value;
        }
        arr.copy_from_slice(&output);

        exp = match exp.checked_mul(radix) {
            Some(next) => next,
            None => break,
        };
    }
}
