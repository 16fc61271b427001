//! Graph traversal, shortest path and spanning tree algorithms.

mod dijkstra;
mod directed;
mod floyd_warshall;
mod kruskal;

pub use dijkstra::dijkstra;
pub use directed::DirectedGraph;
pub use floyd_warshall::{floyd_warshall, has_negative_cycle};
pub use kruskal::kruskal;
