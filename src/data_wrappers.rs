/// Outgoing edge in an adjacency list, as consumed by `dijkstra`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
    pub to: usize,
    pub cost: T,
}

impl<T> Edge<T> {
    pub fn new(to: usize, cost: T) -> Self {
        Edge { to, cost }
    }
}

/// Undirected weighted edge, as consumed and produced by `kruskal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<T> {
    pub from: usize,
    pub to: usize,
    pub weight: T,
}

impl<T> WeightedEdge<T> {
    pub fn new(from: usize, to: usize, weight: T) -> Self {
        WeightedEdge { from, to, weight }
    }
}

/// The edges chosen by `kruskal` and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<T> {
    pub edges: Vec<WeightedEdge<T>>,
    pub total_weight: T,
}

impl<T> SpanningForest<T> {
    /// Whether the forest is a single tree spanning all `n` vertices.
    pub fn is_connected(&self, n: usize) -> bool {
        n <= 1 || self.edges.len() + 1 == n
    }
}
