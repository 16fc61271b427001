use crate::validation::IndexValidator;
use crate::ClavisError;
use std::fmt::{Debug, Formatter};

/// Range-query, point-update tree over any associative binary operator.
///
/// Leaves are padded up to the next power of two with the operator's identity. The tree lives in
/// a dense vector of `2 * n` slots where slot `n + i` is leaf `i` and every internal slot `k` is
/// `op(tree[2k], tree[2k + 1])`.
///
/// The caller must supply an associative `op` and an `identity` with `op(identity, x) == x`.
/// Neither law is checked; violating them produces wrong aggregates, not errors.
///
/// # Examples
/// ```
///use clavis::SegmentTree;
///
///let mut tree = SegmentTree::new(&[1, 2, 3, 4, 5], |a: &i32, b: &i32| a + b, 0);
///assert_eq!(15, tree.query(0, 5).unwrap());
///assert_eq!(5, tree.query(1, 3).unwrap());
///tree.update(2, 10).unwrap();
///assert_eq!(22, tree.query(0, 5).unwrap());
/// ```
pub struct SegmentTree<T, F> {
    len: usize,
    n: usize,
    tree: Vec<T>,
    op: F,
    identity: T,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    pub fn new(data: &[T], op: F, identity: T) -> Self {
        let len = data.len();
        let n = len.next_power_of_two();
        let mut tree = vec![identity.clone(); 2 * n];
        tree[n..n + len].clone_from_slice(data);
        for k in (1..n).rev() {
            tree[k] = op(&tree[2 * k], &tree[2 * k + 1]);
        }
        SegmentTree { len, n, tree, op, identity }
    }

    /// Folds `op` over the half-open range `[l, r)` from left to right. An empty range
    /// (`l >= r`) yields the identity.
    pub fn query(&self, l: usize, r: usize) -> Result<T, ClavisError> {
        let validator = self.validator("SegmentTree query");
        validator.validate_bound(l)?;
        validator.validate_bound(r)?;

        let mut res_left = self.identity.clone();
        let mut res_right = self.identity.clone();
        let mut l = l + self.n;
        let mut r = r + self.n;
        while l < r {
            if l & 1 == 1 {
                res_left = (self.op)(&res_left, &self.tree[l]);
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                res_right = (self.op)(&self.tree[r], &res_right);
            }
            l >>= 1;
            r >>= 1;
        }
        Ok((self.op)(&res_left, &res_right))
    }

    /// Overwrites element `idx` and recomputes every ancestor up to the root.
    pub fn update(&mut self, idx: usize, value: T) -> Result<(), ClavisError> {
        self.validator("SegmentTree update").validate(idx)?;
        let mut k = idx + self.n;
        self.tree[k] = value;
        while k > 1 {
            k >>= 1;
            self.tree[k] = (self.op)(&self.tree[2 * k], &self.tree[2 * k + 1]);
        }
        Ok(())
    }

    pub fn get(&self, idx: usize) -> Result<&T, ClavisError> {
        self.validator("SegmentTree get").validate(idx)?;
        Ok(&self.tree[idx + self.n])
    }

    /// Number of logical elements, excluding padding.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn validator(&self, context: &'static str) -> IndexValidator {
        IndexValidator::new(self.len, context)
    }
}

impl<T: Debug, F> Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("leaves", &&self.tree[self.n..self.n + self.len])
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
