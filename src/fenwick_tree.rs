use crate::validation::IndexValidator;
use crate::ClavisError;
use num_traits::Num;

/// Fenwick tree (binary indexed tree) over a fixed number of elements, all initially zero.
///
/// Internally 1-indexed: slot `i` holds the sum of the logical elements in
/// `(i - lowbit(i), i]`, so both point updates and prefix sums touch O(log n) slots.
///
/// # Examples
/// ```
///use clavis::FenwickTree;
///
///let mut fenw = FenwickTree::new(10);
///fenw.update(3, 5).unwrap();
///fenw.update(5, 2).unwrap();
///assert_eq!(5, fenw.query(3).unwrap());
///assert_eq!(7, fenw.query(5).unwrap());
///assert_eq!(7, fenw.range_query(3, 5).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FenwickTree<T> {
    n: usize,
    fenw: Vec<T>,
}

impl<T: Num + Copy> FenwickTree<T> {

    pub fn new(n: usize) -> Self {
        FenwickTree { n, fenw: vec![T::zero(); n + 1] }
    }

    /// Builds the tree from initial values in O(n), pushing each slot's total into the one
    /// slot that covers it next.
    pub fn from_slice(values: &[T]) -> Self {
        let n = values.len();
        let mut fenw = vec![T::zero(); n + 1];
        fenw[1..].copy_from_slice(values);
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                fenw[parent] = fenw[parent] + fenw[i];
            }
        }
        FenwickTree { n, fenw }
    }

    /// Adds `delta` to the element at `idx`.
    pub fn update(&mut self, idx: usize, delta: T) -> Result<(), ClavisError> {
        self.validator("update").validate(idx)?;
        let mut i = idx + 1;
        while i <= self.n {
            self.fenw[i] = self.fenw[i] + delta;
            i += lowbit(i);
        }
        Ok(())
    }

    /// Sum of the elements `[0..=idx]`.
    pub fn query(&self, idx: usize) -> Result<T, ClavisError> {
        self.validator("query").validate(idx)?;
        Ok(self.prefix_sum(idx + 1))
    }

    /// Sum of the elements `[left..=right]`, or zero when `left > right`.
    pub fn range_query(&self, left: usize, right: usize) -> Result<T, ClavisError> {
        if left > right {
            return Ok(T::zero());
        }
        let upto_right = self.query(right)?;
        Ok(upto_right - self.prefix_sum(left))
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Sum of the first `count` elements.
    fn prefix_sum(&self, count: usize) -> T {
        let mut i = count;
        let mut result = T::zero();
        while i > 0 {
            result = result + self.fenw[i];
            i -= lowbit(i);
        }
        result
    }

    fn validator(&self, operation: &'static str) -> IndexValidator {
        IndexValidator::new(self.n, operation)
    }
}

fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}
