use crate::data_wrappers::Edge;
use crate::validation::IndexValidator;
use crate::{ClavisError, MaxHeap};
use num_traits::Num;
use std::cmp::{Ordering, Reverse};

/// Single source shortest distances over non-negative edge costs.
///
/// # Parameters
/// * `graph` - adjacency list, `graph[u]` holds the edges leaving vertex `u`.
/// * `start` - the source vertex.
///
/// # Returns
/// * The distance from `start` to every vertex, `None` where a vertex is unreachable. An error
///   is returned if `start` or any edge target is not a vertex, or if any cost is negative
///   or NaN.
///
/// # Examples
/// ```
///use clavis::{dijkstra, Edge};
///
///let graph = vec![
///    vec![Edge::new(1, 4_u64), Edge::new(2, 1)],
///    vec![Edge::new(3, 1)],
///    vec![Edge::new(1, 2), Edge::new(3, 5)],
///    vec![],
///    vec![],
///];
///let dist = dijkstra(&graph, 0).unwrap();
///assert_eq!(vec![Some(0), Some(3), Some(1), Some(4), None], dist);
/// ```
pub fn dijkstra<T>(graph: &[Vec<Edge<T>>], start: usize) -> Result<Vec<Option<T>>, ClavisError>
where
    T: Num + PartialOrd + Copy,
{
    validate_graph(graph, start)?;

    let mut dist: Vec<Option<T>> = vec![None; graph.len()];
    dist[start] = Some(T::zero());

    // Reversed so the max-heap hands out the closest vertex first.
    let mut frontier = MaxHeap::new();
    frontier.push(Reverse((T::zero(), start)));

    while let Ok(Reverse((current, vertex))) = frontier.pop() {
        if dist[vertex].is_some_and(|best| current > best) {
            continue;
        }
        for edge in &graph[vertex] {
            let through_vertex = current + edge.cost;
            if dist[edge.to].map_or(true, |best| through_vertex < best) {
                dist[edge.to] = Some(through_vertex);
                frontier.push(Reverse((through_vertex, edge.to)));
            }
        }
    }
    Ok(dist)
}

fn validate_graph<T: Num + PartialOrd>(
    graph: &[Vec<Edge<T>>],
    start: usize,
) -> Result<(), ClavisError> {
    let validator = IndexValidator::new(graph.len(), "Dijkstra vertex");
    validator.validate(start)?;
    for (from, edges) in graph.iter().enumerate() {
        for edge in edges {
            validator.validate(edge.to)?;
            match edge.cost.partial_cmp(&T::zero()) {
                Some(Ordering::Less) => {
                    return Err(ClavisError::InvalidWeight(format!(
                        "Edge {from} -> {} has a negative cost", edge.to
                    )));
                }
                None => {
                    return Err(ClavisError::InvalidWeight(format!(
                        "Edge {from} -> {} has a cost that cannot be ordered", edge.to
                    )));
                }
                _ => {}
            }
        }
    }
    Ok(())
}
