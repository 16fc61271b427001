#![allow(dead_code)]
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_values(rng: &mut StdRng, len: usize, low: i64, high: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(low..high)).collect()
}

pub fn random_unsigned(rng: &mut StdRng, len: usize, high: u64) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(0..high)).collect()
}

/// Slices worth running every sort against.
pub fn sort_cases() -> Vec<Vec<i64>> {
    let mut rng = seeded_rng(7);
    vec![
        vec![],
        vec![1],
        vec![2, 1],
        vec![64, 34, 25, 12, 22, 11, 90],
        vec![5, 5, 5, 5],
        vec![1, 2, 3, 4, 5, 6],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        vec![3, -1, 4, -1, 5, -9, 2, 6, -5, 3, 5],
        random_values(&mut rng, 257, -1000, 1000),
        random_values(&mut rng, 1000, 0, 10),
    ]
}

pub fn undirected_edges(graph: &mut clavis::DirectedGraph<i32>, edges: &[(i32, i32)]) {
    for &(a, b) in edges {
        graph.add_edge(a, b);
        graph.add_edge(b, a);
    }
}
