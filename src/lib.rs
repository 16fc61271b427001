//! Classic algorithms and data structures in pure Rust.
//!
//! The core of the crate is a family of independent containers, each keeping its own
//! invariant after every operation:
//!  1. [`UnionFind`] - a partition of `0..n` into disjoint groups, with path compression and
//!     union by rank;
//!  2. [`MaxHeap`] - a vector backed binary heap handing out its largest element first;
//!  3. [`FenwickTree`] - point updates and prefix sums over a fixed number of elements;
//!  4. [`SegmentTree`] - point updates and range folds under any associative operator; and
//!  5. [`BinarySearchTree`] - an unbalanced ordered tree with successor-splicing removal.
//!
//! Alongside these sit in-place sorts ([`bubble_sort`], [`merge_sort`], [`quick_sort`],
//! [`heap_sort`], [`radix_sort`], [`shell_sort`]), binary search variants over sorted slices,
//! and graph algorithms: traversals over a [`DirectedGraph`], [`dijkstra`],
//! [`floyd_warshall`] and [`kruskal`].
//!
//! Invalid arguments, such as an index outside a structure or a pop from an empty heap, are
//! reported as a [`ClavisError`] and leave the structure untouched. Nothing is ever clamped or
//! replaced by a sentinel value.
//!
//! Diagnostic events are emitted through the [`log`](https://docs.rs/log) facade and are
//! silent unless the application installs a logger.
//!
//! None of the types synchronise internally. Share an instance between threads behind a lock.
//!
//! # Examples
//! ```
//!use clavis::{FenwickTree, MaxHeap, SegmentTree, UnionFind};
//!
//!let mut uf = UnionFind::new(10);
//!uf.unite(1, 2).unwrap();
//!uf.unite(2, 3).unwrap();
//!assert!(uf.same(1, 3).unwrap());
//!assert_eq!(8, uf.groups());
//!
//!let mut heap = MaxHeap::new();
//!for value in [5, 10, 3] {
//!    heap.push(value);
//!}
//!assert_eq!(10, heap.pop().unwrap());
//!assert_eq!(&5, heap.top().unwrap());
//!
//!let mut fenw = FenwickTree::new(10);
//!fenw.update(3, 5).unwrap();
//!fenw.update(5, 2).unwrap();
//!assert_eq!(7, fenw.range_query(3, 5).unwrap());
//!
//!let tree = SegmentTree::new(&[5, 4, 3, 2, 1], |a: &i32, b: &i32| *a.min(b), i32::MAX);
//!assert_eq!(2, tree.query(1, 4).unwrap());
//! ```

pub use crate::binary_search_tree::BinarySearchTree;
pub use crate::data_wrappers::{Edge, SpanningForest, WeightedEdge};
pub use crate::error::ClavisError;
pub use crate::fenwick_tree::FenwickTree;
pub use crate::graph::{dijkstra, floyd_warshall, has_negative_cycle, kruskal, DirectedGraph};
pub use crate::hyper_parameters::{
    RadixSortParams, RadixSortParamsBuilder, ShellSortParams, ShellSortParamsBuilder,
};
pub use crate::max_heap::MaxHeap;
pub use crate::search::{binary_search, lower_bound, partition_point_by, upper_bound};
pub use crate::segment_tree::SegmentTree;
pub use crate::sorting::{bubble_sort, heap_sort, merge_sort, quick_sort, radix_sort, shell_sort};
pub use crate::union_find::UnionFind;

mod binary_search_tree;
mod data_wrappers;
mod error;
mod fenwick_tree;
mod graph;
mod hyper_parameters;
mod max_heap;
mod search;
mod segment_tree;
mod sorting;
mod union_find;
mod validation;
