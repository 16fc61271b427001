use crate::validation::IndexValidator;
use crate::ClavisError;

/// Disjoint set union over the elements `0..n`, using path compression in `find` and union by
/// rank in `unite`.
///
/// # Examples
/// ```
///use clavis::UnionFind;
///
///let mut uf = UnionFind::new(10);
///uf.unite(1, 2).unwrap();
///uf.unite(2, 3).unwrap();
///assert!(uf.same(1, 3).unwrap());
///assert_eq!(8, uf.groups());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    group_count: usize,
}

impl UnionFind {

    /// Creates `n` singleton groups.
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        UnionFind { parent, rank, group_count: n }
    }

    /// Finds the root of the group containing `x`, re-pointing every element on the way
    /// directly at that root.
    ///
    /// # Returns
    /// * The root element, or an `IndexOutOfRange` error if `x` is not in `[0, n)`.
    pub fn find(&mut self, x: usize) -> Result<usize, ClavisError> {
        self.validator().validate(x)?;
        Ok(self.find_root(x))
    }

    /// Merges the groups of `x` and `y`. On a rank tie `y`'s root is attached under `x`'s root.
    ///
    /// # Returns
    /// * `true` if two groups were merged, `false` if `x` and `y` already shared a group.
    ///   Neither element is touched if either index is out of range.
    pub fn unite(&mut self, x: usize, y: usize) -> Result<bool, ClavisError> {
        self.validator().validate_pair(x, y)?;

        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return Ok(false);
        }

        log::debug!(
            "Uniting groups: {root_x} and {root_y} (ranks: {}, {})",
            self.rank[root_x], self.rank[root_y]
        );

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else {
            self.parent[root_y] = root_x;
            if self.rank[root_x] == self.rank[root_y] {
                self.rank[root_x] += 1;
            }
        }
        self.group_count -= 1;
        Ok(true)
    }

    pub fn same(&mut self, x: usize, y: usize) -> Result<bool, ClavisError> {
        self.validator().validate_pair(x, y)?;
        Ok(self.find_root(x) == self.find_root(y))
    }

    /// Number of disjoint groups. O(1).
    pub fn groups(&self) -> usize {
        self.group_count
    }

    /// Number of elements sharing a group with `x`. This is recomputed by scanning every
    /// element, so it costs O(n) per call.
    pub fn group_size(&mut self, x: usize) -> Result<usize, ClavisError> {
        self.validator().validate(x)?;
        let root = self.find_root(x);
        let n_elements = self.parent.len();
        Ok((0..n_elements).filter(|&i| self.find_root(i) == root).count())
    }

    /// Number of elements, i.e. the `n` given at construction.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn find_root(&mut self, mut n: usize) -> usize {
        let mut p = n;
        while self.parent[n] != n {
            n = self.parent[n];
        }
        while self.parent[p] != n {
            let next = self.parent[p];
            self.parent[p] = n;
            p = next;
        }
        n
    }

    fn validator(&self) -> IndexValidator {
        IndexValidator::new(self.parent.len(), "UnionFind")
    }
}
