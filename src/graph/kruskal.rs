use crate::data_wrappers::{SpanningForest, WeightedEdge};
use crate::validation::IndexValidator;
use crate::{ClavisError, UnionFind};
use num_traits::Num;
use std::cmp::Ordering;

/// Minimum spanning forest over the vertices `0..n` by Kruskal's algorithm: edges are taken in
/// order of weight (ties keep their input order) whenever they join two different trees, until
/// `n - 1` edges have been taken.
///
/// # Returns
/// * The chosen edges in the order they were taken and their total weight. For a disconnected
///   graph this is a spanning tree of each component. An error is returned if any edge
///   endpoint is not in `[0, n)`, or if a weight cannot be ordered (NaN).
///
/// # Examples
/// ```
///use clavis::{kruskal, WeightedEdge};
///
///let edges = vec![
///    WeightedEdge::new(0, 1, 1),
///    WeightedEdge::new(0, 2, 2),
///    WeightedEdge::new(2, 3, 3),
///    WeightedEdge::new(1, 3, 4),
///];
///let forest = kruskal(4, &edges).unwrap();
///assert_eq!(6, forest.total_weight);
///assert!(forest.is_connected(4));
/// ```
pub fn kruskal<T>(n: usize, edges: &[WeightedEdge<T>]) -> Result<SpanningForest<T>, ClavisError>
where
    T: Num + PartialOrd + Copy,
{
    let validator = IndexValidator::new(n, "Kruskal vertex");
    for edge in edges {
        validator.validate_pair(edge.from, edge.to)?;
        if edge.weight.partial_cmp(&edge.weight).is_none() {
            return Err(ClavisError::InvalidWeight(format!(
                "Edge {} - {} has a weight that cannot be ordered", edge.from, edge.to
            )));
        }
    }

    let mut sorted_edges = edges.to_vec();
    sort_edges_by_weight(&mut sorted_edges);

    let mut union_find = UnionFind::new(n);
    let mut forest = SpanningForest { edges: Vec::new(), total_weight: T::zero() };
    for edge in sorted_edges {
        if forest.edges.len() + 1 >= n {
            break;
        }
        if union_find.unite(edge.from, edge.to)? {
            forest.total_weight = forest.total_weight + edge.weight;
            forest.edges.push(edge);
        }
    }
    log::debug!("Spanning forest over {n} vertices has {} edges", forest.edges.len());
    Ok(forest)
}

fn sort_edges_by_weight<T: PartialOrd>(edges: &mut [WeightedEdge<T>]) {
    edges.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));
}
