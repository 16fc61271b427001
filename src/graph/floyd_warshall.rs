use crate::validation::MatrixValidator;
use crate::ClavisError;
use num_traits::Float;

/// All pairs shortest paths, relaxing `dist` in place. On input `dist[i][j]` is the cost of the
/// edge `i -> j` (`T::infinity()` where there is none, zero on the diagonal). On return it is the
/// cost of the cheapest path. Negative edges are allowed, negative cycles are not; check the
/// result with `has_negative_cycle`.
///
/// # Examples
/// ```
///use clavis::floyd_warshall;
///
///let inf = f64::INFINITY;
///let mut dist = vec![
///    vec![0.0, 3.0, inf, 7.0],
///    vec![8.0, 0.0, 2.0, inf],
///    vec![5.0, inf, 0.0, 1.0],
///    vec![2.0, inf, inf, 0.0],
///];
///floyd_warshall(&mut dist).unwrap();
///assert_eq!(vec![0.0, 3.0, 5.0, 6.0], dist[0]);
/// ```
pub fn floyd_warshall<T: Float>(dist: &mut [Vec<T>]) -> Result<(), ClavisError> {
    MatrixValidator::new(dist).validate_square()?;
    let n = dist.len();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }
    Ok(())
}

/// Whether a matrix produced by `floyd_warshall` shows a negative cycle, i.e. some vertex can
/// reach itself at negative cost.
pub fn has_negative_cycle<T: Float>(dist: &[Vec<T>]) -> bool {
    dist.iter()
        .enumerate()
        .any(|(i, row)| row.get(i).is_some_and(|d| *d < T::zero()))
}
