use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Directed graph stored as an adjacency list. Nodes are remembered in the order they were first
/// seen, so every traversal and whole-graph walk is deterministic.
///
/// Undirected graphs are modelled by adding each edge in both directions.
///
/// # Examples
/// ```
///use clavis::DirectedGraph;
///
///let mut graph = DirectedGraph::new();
///graph.add_edge(0, 1);
///graph.add_edge(0, 2);
///graph.add_edge(2, 3);
///graph.add_edge(2, 4);
///assert_eq!(vec![0, 1, 2, 3, 4], graph.bfs(&0));
///assert_eq!(vec![0, 2, 3], graph.shortest_path(&0, &3));
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N> {
    adjacency: HashMap<N, Vec<N>>,
    nodes: Vec<N>,
}

impl<N: Eq + Hash + Clone> DirectedGraph<N> {

    pub fn new() -> Self {
        DirectedGraph { adjacency: HashMap::new(), nodes: Vec::new() }
    }

    /// Adds the edge `from -> to`, registering both endpoints as nodes.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_node(from.clone());
        self.add_node(to.clone());
        if let Some(neighbours) = self.adjacency.get_mut(&from) {
            neighbours.push(to);
        }
    }

    /// Registers an isolated node. Adding a known node is a no-op.
    pub fn add_node(&mut self, node: N) {
        if let Entry::Vacant(entry) = self.adjacency.entry(node) {
            self.nodes.push(entry.key().clone());
            entry.insert(Vec::new());
        }
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Targets of the edges leaving `node`, in insertion order. Unknown nodes have none.
    pub fn neighbours(&self, node: &N) -> &[N] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Breadth first traversal from `start`, returning nodes in visiting order.
    pub fn bfs(&self, start: &N) -> Vec<N> {
        log::debug!("Starting BFS traversal over {} nodes", self.nodes.len());
        let mut visited = HashSet::from([start]);
        let mut process_queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(current) = process_queue.pop_front() {
            order.push(current.clone());
            for neighbour in self.neighbours(current) {
                if visited.insert(neighbour) {
                    process_queue.push_back(neighbour);
                }
            }
        }
        order
    }

    /// Path from `start` to `target` with the fewest edges, both ends included. Empty if
    /// `target` cannot be reached.
    pub fn shortest_path(&self, start: &N, target: &N) -> Vec<N> {
        let mut visited = HashSet::from([start]);
        let mut parents = HashMap::new();
        let mut process_queue = VecDeque::from([start]);

        while let Some(current) = process_queue.pop_front() {
            if current == target {
                return trace_path(&parents, start, target);
            }
            for neighbour in self.neighbours(current) {
                if visited.insert(neighbour) {
                    parents.insert(neighbour, current);
                    process_queue.push_back(neighbour);
                }
            }
        }
        Vec::new()
    }

    /// Iterative depth first traversal from `start`. Neighbours are explored in adjacency order.
    pub fn dfs(&self, start: &N) -> Vec<N> {
        log::debug!("Starting DFS traversal over {} nodes", self.nodes.len());
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current.clone());
            // Reversed so the first neighbour is popped first.
            for neighbour in self.neighbours(current).iter().rev() {
                if !visited.contains(neighbour) {
                    stack.push(neighbour);
                }
            }
        }
        order
    }

    /// Recursive depth first traversal from `start`.
    pub fn dfs_recursive(&self, start: &N) -> Vec<N> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.visit_recursive(start, &mut visited, &mut order);
        order
    }

    fn visit_recursive<'a>(&'a self, node: &'a N, visited: &mut HashSet<&'a N>, order: &mut Vec<N>) {
        visited.insert(node);
        log::trace!("Visiting node number {}", order.len());
        order.push(node.clone());
        for neighbour in self.neighbours(node) {
            if !visited.contains(neighbour) {
                self.visit_recursive(neighbour, visited, order);
            }
        }
    }

    /// Some path from `start` to `target` found depth first, not necessarily the shortest.
    /// Empty if `target` cannot be reached.
    pub fn find_path(&self, start: &N, target: &N) -> Vec<N> {
        let mut visited = HashSet::from([start]);
        let mut parents = HashMap::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if current == target {
                return trace_path(&parents, start, target);
            }
            for neighbour in self.neighbours(current) {
                if visited.insert(neighbour) {
                    parents.insert(neighbour, current);
                    stack.push(neighbour);
                }
            }
        }
        Vec::new()
    }

    /// Whether the graph contains a directed cycle. Self loops count as cycles.
    pub fn has_cycle(&self) -> bool {
        self.post_order().is_none()
    }

    /// Orders the nodes so every edge points forward, or `None` if the graph has a cycle.
    pub fn topological_sort(&self) -> Option<Vec<N>> {
        let Some(finished) = self.post_order() else {
            log::debug!("Graph has a cycle, topological sort not possible");
            return None;
        };
        Some(finished.into_iter().rev().cloned().collect())
    }

    /// Depth first walk from every unvisited node in first-seen order, with an explicit stack of
    /// `(node, next neighbour)` frames so long chains cannot overflow the call stack.
    ///
    /// # Returns
    /// * Every node in post-order, or `None` as soon as an edge leads back to a node that is
    ///   still on the walk.
    fn post_order(&self) -> Option<Vec<&N>> {
        let mut visited = HashSet::new();
        let mut on_stack = HashSet::new();
        let mut finished = Vec::with_capacity(self.nodes.len());

        for root in &self.nodes {
            if !visited.insert(root) {
                continue;
            }
            on_stack.insert(root);
            let mut stack = vec![(root, 0)];
            while let Some(frame) = stack.last_mut() {
                let (node, next) = *frame;
                match self.neighbours(node).get(next) {
                    Some(neighbour) => {
                        frame.1 += 1;
                        if on_stack.contains(neighbour) {
                            return None;
                        }
                        if visited.insert(neighbour) {
                            on_stack.insert(neighbour);
                            stack.push((neighbour, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        on_stack.remove(node);
                        finished.push(node);
                    }
                }
            }
        }
        Some(finished)
    }

    /// Counts groups of nodes by repeatedly traversing from the first node, in first-seen order,
    /// that no earlier traversal reached. Intended for graphs whose edges are all added in both
    /// directions, where this is the number of connected components.
    pub fn count_connected_components(&self) -> usize {
        let mut reached: HashSet<N> = HashSet::new();
        let mut components = 0;
        for node in &self.nodes {
            if reached.contains(node) {
                continue;
            }
            log::trace!("Starting component number {components}");
            reached.extend(self.bfs(node));
            components += 1;
        }
        components
    }
}

impl<N: Eq + Hash + Clone> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn trace_path<'a, N>(parents: &HashMap<&'a N, &'a N>, start: &N, target: &'a N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != start {
        match parents.get(current) {
            Some(&parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
