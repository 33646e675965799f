use crate::point::Point;

/// Path Evaluator helpers shared by every strategy.
pub struct PathGeometry;

impl PathGeometry {
    /// Open path length: edges `i -> i+1` only, summed left to right.
    pub fn path_length(path: &[Point]) -> f64 {
        path.windows(2).fold(0.0, |total, w| total + w[0].dist(&w[1]))
    }

    pub fn legs(path: &[Point]) -> Vec<f64> {
        path.windows(2).map(|w| w[0].dist(&w[1])).collect()
    }
}
