use clavis::{BinarySearchTree, ClavisError, FenwickTree, MaxHeap, SegmentTree, UnionFind};
use rand::Rng;
use std::collections::BTreeSet;

mod common;

#[test]
fn union_find_starts_with_singletons() {
    let mut uf = UnionFind::new(10);
    assert_eq!(10, uf.len());
    assert_eq!(10, uf.groups());
    for i in 0..10 {
        assert_eq!(i, uf.find(i).unwrap());
        assert_eq!(1, uf.group_size(i).unwrap());
    }
}

#[test]
fn union_find_unite_and_same() {
    let mut uf = UnionFind::new(10);
    assert!(uf.unite(1, 2).unwrap());
    assert!(uf.unite(2, 3).unwrap());
    assert!(uf.same(1, 3).unwrap());
    assert!(!uf.same(1, 4).unwrap());
    assert_eq!(8, uf.groups());
    assert_eq!(3, uf.group_size(2).unwrap());
}

#[test]
fn union_find_uniting_same_group_is_a_no_op() {
    let mut uf = UnionFind::new(5);
    assert!(uf.unite(0, 1).unwrap());
    assert!(!uf.unite(1, 0).unwrap());
    assert!(!uf.unite(3, 3).unwrap());
    assert_eq!(4, uf.groups());
}

#[test]
fn union_find_out_of_range() {
    let mut uf = UnionFind::new(3);
    assert!(matches!(uf.find(3), Err(ClavisError::IndexOutOfRange(_))));
    assert!(matches!(uf.unite(0, 3), Err(ClavisError::IndexOutOfRange(_))));
    assert!(matches!(uf.unite(5, 0), Err(ClavisError::IndexOutOfRange(_))));
    assert!(matches!(uf.group_size(10), Err(ClavisError::IndexOutOfRange(_))));
    assert!(uf.same(0, 9).is_err());
    assert_eq!(3, uf.groups());
}

#[test]
fn union_find_random_unions_keep_invariants() {
    let n = 200;
    let mut rng = common::seeded_rng(11);
    let mut uf = UnionFind::new(n);
    for _ in 0..150 {
        let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
        let groups_before = uf.groups();
        let was_same = uf.same(a, b).unwrap();
        let merged = uf.unite(a, b).unwrap();
        assert_eq!(!was_same, merged);
        assert_eq!(groups_before - usize::from(merged), uf.groups());
        assert!(uf.same(a, b).unwrap());
    }

    let mut roots = BTreeSet::new();
    for x in 0..n {
        let root = uf.find(x).unwrap();
        assert_eq!(root, uf.find(root).unwrap());
        roots.insert(root);
    }
    assert_eq!(uf.groups(), roots.len());
    let total: usize = roots.iter().map(|&root| uf.group_size(root).unwrap()).sum();
    assert_eq!(n, total);
}

#[test]
fn union_find_empty() {
    let mut uf = UnionFind::new(0);
    assert!(uf.is_empty());
    assert_eq!(0, uf.groups());
    assert!(uf.find(0).is_err());
}

#[test]
fn heap_is_initially_empty() {
    let heap: MaxHeap<i32> = MaxHeap::new();
    assert!(heap.is_empty());
    assert_eq!(0, heap.len());
}

#[test]
fn heap_push_increases_size() {
    let mut heap = MaxHeap::new();
    heap.push(10);
    assert!(!heap.is_empty());
    assert_eq!(1, heap.len());
    heap.push(20);
    assert_eq!(2, heap.len());
    assert_eq!(&20, heap.top().unwrap());
}

#[test]
fn heap_pop_returns_max() {
    let mut heap = MaxHeap::new();
    heap.push(5);
    heap.push(10);
    heap.push(3);
    assert_eq!(3, heap.len());
    assert_eq!(&10, heap.top().unwrap());
    assert_eq!(10, heap.pop().unwrap());
    assert_eq!(2, heap.len());
    assert_eq!(&5, heap.top().unwrap());
}

#[test]
fn heap_empty_access_is_an_error() {
    let mut heap: MaxHeap<i32> = MaxHeap::new();
    assert!(matches!(heap.top(), Err(ClavisError::EmptyContainer(_))));
    assert!(matches!(heap.pop(), Err(ClavisError::EmptyContainer(_))));
    heap.push(1);
    assert_eq!(1, heap.pop().unwrap());
    assert!(heap.pop().is_err());
}

#[test]
fn heap_pops_in_non_increasing_order() {
    let mut heap = MaxHeap::new();
    for value in [42, 15, 100, 7, 99] {
        heap.push(value);
    }
    let popped: Vec<i32> = std::iter::from_fn(|| heap.pop().ok()).collect();
    assert_eq!(vec![100, 99, 42, 15, 7], popped);
    assert!(heap.is_empty());
}

#[test]
fn heap_top_tracks_maximum_under_random_operations() {
    let mut rng = common::seeded_rng(3);
    let mut heap = MaxHeap::new();
    let mut shadow: Vec<i64> = Vec::new();
    for _ in 0..500 {
        if rng.gen_bool(0.6) || shadow.is_empty() {
            let value = rng.gen_range(-100..100);
            heap.push(value);
            shadow.push(value);
        } else {
            let max = *shadow.iter().max().unwrap();
            assert_eq!(max, heap.pop().unwrap());
            let pos = shadow.iter().position(|&v| v == max).unwrap();
            shadow.swap_remove(pos);
        }
        assert_eq!(shadow.len(), heap.len());
        assert_eq!(shadow.iter().max(), heap.top().ok());
    }
}

#[test]
fn heap_collects_and_sorts() {
    let heap: MaxHeap<i32> = vec![3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
    assert_eq!(&9, heap.top().unwrap());
    assert_eq!(vec![1, 1, 2, 3, 4, 5, 6, 9], heap.into_sorted_vec());
}

#[test]
fn fenwick_basic_operations() {
    let mut fenw = FenwickTree::new(10);
    for i in 0..10 {
        assert_eq!(0, fenw.query(i).unwrap());
    }

    fenw.update(3, 5).unwrap();
    assert_eq!(5, fenw.query(3).unwrap());
    assert_eq!(5, fenw.query(4).unwrap());

    fenw.update(5, 2).unwrap();
    assert_eq!(5, fenw.query(3).unwrap());
    assert_eq!(7, fenw.query(5).unwrap());
    assert_eq!(7, fenw.range_query(3, 5).unwrap());

    fenw.update(3, 2).unwrap();
    assert_eq!(7, fenw.query(3).unwrap());
    assert_eq!(9, fenw.query(5).unwrap());
}

#[test]
fn fenwick_prefix_sums_with_negative_values() {
    let values = [10, -5, 0, 5, 1];
    let mut fenw = FenwickTree::new(values.len());
    for (i, &value) in values.iter().enumerate() {
        fenw.update(i, value).unwrap();
    }
    let mut running_sum = 0;
    for (i, &value) in values.iter().enumerate() {
        running_sum += value;
        assert_eq!(running_sum, fenw.query(i).unwrap(), "prefix sum at {i}");
    }
    assert_eq!(0, fenw.range_query(1, 3).unwrap());
    assert_eq!(10, fenw.range_query(0, 0).unwrap());
}

#[test]
fn fenwick_empty_range_is_zero() {
    let mut fenw = FenwickTree::new(4);
    fenw.update(2, 8).unwrap();
    assert_eq!(0, fenw.range_query(3, 1).unwrap());
    // An inverted range is empty even when its ends are out of range.
    assert_eq!(0, fenw.range_query(9, 8).unwrap());
}

#[test]
fn fenwick_out_of_range_leaves_state_unchanged() {
    let mut fenw = FenwickTree::new(3);
    fenw.update(1, 4).unwrap();
    let before = fenw.clone();
    assert!(matches!(fenw.update(3, 1), Err(ClavisError::IndexOutOfRange(_))));
    assert!(matches!(fenw.query(3), Err(ClavisError::IndexOutOfRange(_))));
    assert!(fenw.range_query(0, 3).is_err());
    assert_eq!(before, fenw);
    assert!(FenwickTree::<i32>::new(0).query(0).is_err());
}

#[test]
fn fenwick_matches_naive_prefix_sums() {
    let n = 100;
    let mut rng = common::seeded_rng(5);
    let mut fenw = FenwickTree::new(n);
    let mut naive = vec![0_i64; n];
    for _ in 0..300 {
        let idx = rng.gen_range(0..n);
        let delta = rng.gen_range(-20..20);
        fenw.update(idx, delta).unwrap();
        naive[idx] += delta;
    }
    for i in 0..n {
        assert_eq!(naive[..=i].iter().sum::<i64>(), fenw.query(i).unwrap());
    }
    for _ in 0..100 {
        let (l, r) = (rng.gen_range(0..n), rng.gen_range(0..n));
        let expected = if l > r { 0 } else { naive[l..=r].iter().sum::<i64>() };
        assert_eq!(expected, fenw.range_query(l, r).unwrap());
    }
}

#[test]
fn fenwick_from_slice_and_floats() {
    let fenw = FenwickTree::from_slice(&[0.5, 1.5, 2.0]);
    assert_eq!(3, fenw.len());
    assert_eq!(4.0, fenw.query(2).unwrap());
    assert_eq!(3.5, fenw.range_query(1, 2).unwrap());
}

#[test]
fn segment_tree_sum() {
    let mut tree = SegmentTree::new(&[1, 2, 3, 4, 5], |a: &i32, b: &i32| a + b, 0);
    assert_eq!(15, tree.query(0, 5).unwrap());
    assert_eq!(5, tree.query(1, 3).unwrap());
    assert_eq!(12, tree.query(2, 5).unwrap());

    tree.update(2, 10).unwrap();
    assert_eq!(22, tree.query(0, 5).unwrap());
    assert_eq!(19, tree.query(2, 5).unwrap());
    assert_eq!(&10, tree.get(2).unwrap());
}

#[test]
fn segment_tree_min() {
    let mut tree = SegmentTree::new(&[5, 4, 3, 2, 1], |a: &i32, b: &i32| *a.min(b), i32::MAX);
    assert_eq!(1, tree.query(0, 5).unwrap());
    assert_eq!(2, tree.query(1, 4).unwrap());
    tree.update(4, 6).unwrap();
    assert_eq!(2, tree.query(0, 5).unwrap());
}

#[test]
fn segment_tree_preserves_left_to_right_order() {
    let words: Vec<String> = ["a", "b", "c", "d", "e", "f"].iter().map(|s| s.to_string()).collect();
    let mut tree = SegmentTree::new(&words, |a: &String, b: &String| format!("{a}{b}"), String::new());
    assert_eq!("abcdef", tree.query(0, 6).unwrap());
    assert_eq!("bcde", tree.query(1, 5).unwrap());
    assert_eq!("f", tree.query(5, 6).unwrap());
    tree.update(3, String::from("X")).unwrap();
    assert_eq!("cXe", tree.query(2, 5).unwrap());
}

#[test]
fn segment_tree_empty_range_is_identity() {
    let tree = SegmentTree::new(&[3, 1, 4], |a: &i64, b: &i64| a + b, 0);
    assert_eq!(0, tree.query(2, 2).unwrap());
    assert_eq!(0, tree.query(3, 1).unwrap());
}

#[test]
fn segment_tree_out_of_range() {
    let mut tree = SegmentTree::new(&[3, 1, 4], |a: &i64, b: &i64| a + b, 0);
    assert!(matches!(tree.query(0, 4), Err(ClavisError::IndexOutOfRange(_))));
    assert!(matches!(tree.update(3, 1), Err(ClavisError::IndexOutOfRange(_))));
    assert!(tree.get(3).is_err());
    assert_eq!(8, tree.query(0, 3).unwrap());
}

#[test]
fn segment_tree_matches_naive_fold() {
    let mut rng = common::seeded_rng(13);
    let mut values = common::random_values(&mut rng, 37, -50, 50);
    let mut tree = SegmentTree::new(&values, |a: &i64, b: &i64| *a.max(b), i64::MIN);
    for _ in 0..200 {
        if rng.gen_bool(0.3) {
            let idx = rng.gen_range(0..values.len());
            let value = rng.gen_range(-50..50);
            tree.update(idx, value).unwrap();
            values[idx] = value;
        }
        let l = rng.gen_range(0..values.len());
        let r = rng.gen_range(l..=values.len());
        let expected = values[l..r].iter().copied().fold(i64::MIN, i64::max);
        assert_eq!(expected, tree.query(l, r).unwrap());
    }
}

#[test]
fn bst_basic_operations() {
    let mut bst = BinarySearchTree::new();
    assert!(bst.is_empty());
    assert_eq!(0, bst.len());

    bst.insert(5);
    bst.insert(3);
    bst.insert(7);

    assert!(!bst.is_empty());
    assert_eq!(3, bst.len());
    assert!(bst.contains(&5));
    assert!(bst.contains(&3));
    assert!(bst.contains(&7));
    assert!(!bst.contains(&4));
}

#[test]
fn bst_duplicates_are_ignored() {
    let mut bst = BinarySearchTree::new();
    assert!(bst.insert(5));
    assert!(!bst.insert(5));
    assert_eq!(1, bst.len());
    assert_eq!(vec![5], bst.inorder());
}

#[test]
fn bst_min_max() {
    let mut bst = BinarySearchTree::new();
    assert_eq!(None, bst.minimum());
    assert_eq!(None, bst.maximum());
    for value in [5, 3, 7, 1, 9] {
        bst.insert(value);
    }
    assert_eq!(Some(&1), bst.minimum());
    assert_eq!(Some(&9), bst.maximum());
}

#[test]
fn bst_removal() {
    let mut bst: BinarySearchTree<i32> = [5, 3, 7, 1, 9].into_iter().collect();

    assert!(bst.remove(&3));
    assert!(!bst.contains(&3));
    assert!(bst.contains(&1));
    assert_eq!(4, bst.len());

    assert!(bst.remove(&5));
    assert!(!bst.contains(&5));
    assert_eq!(vec![1, 7, 9], bst.inorder());

    assert!(!bst.remove(&10));
    assert_eq!(3, bst.len());

    for value in [1, 7, 9] {
        assert!(bst.remove(&value));
    }
    assert!(bst.is_empty());
    assert_eq!(None, bst.minimum());
    assert!(!bst.remove(&1));
}

#[test]
fn bst_traversals() {
    let bst: BinarySearchTree<i32> = [5, 3, 7, 1, 9].into_iter().collect();

    let mut result = Vec::new();
    bst.inorder_traversal(|value| result.push(*value));
    assert_eq!(vec![1, 3, 5, 7, 9], result);

    result.clear();
    bst.level_order_traversal(|value| result.push(*value));
    assert_eq!(vec![5, 3, 7, 1, 9], result);
}

#[test]
fn bst_empty_traversals_visit_nothing() {
    let bst: BinarySearchTree<i32> = BinarySearchTree::default();
    let mut visits = 0;
    bst.inorder_traversal(|_| visits += 1);
    bst.level_order_traversal(|_| visits += 1);
    assert_eq!(0, visits);
}

#[test]
fn bst_matches_sorted_set_under_random_operations() {
    let mut rng = common::seeded_rng(17);
    let mut bst = BinarySearchTree::new();
    let mut shadow = BTreeSet::new();
    for _ in 0..1000 {
        let value = rng.gen_range(0..200);
        if rng.gen_bool(0.6) {
            assert_eq!(shadow.insert(value), bst.insert(value));
        } else {
            let len_before = bst.len();
            let removed = bst.remove(&value);
            assert_eq!(shadow.remove(&value), removed);
            assert!(!bst.contains(&value));
            assert_eq!(len_before - usize::from(removed), bst.len());
        }
    }
    assert_eq!(shadow.len(), bst.len());
    assert_eq!(shadow.iter().copied().collect::<Vec<_>>(), bst.inorder());
    assert_eq!(shadow.first(), bst.minimum());
    assert_eq!(shadow.last(), bst.maximum());
}

#[test]
fn bst_with_strings() {
    let mut bst = BinarySearchTree::new();
    for word in ["pear", "apple", "quince", "fig"] {
        bst.insert(word.to_string());
    }
    assert!(bst.remove(&String::from("pear")));
    assert_eq!(vec!["apple", "fig", "quince"], bst.inorder());
}
