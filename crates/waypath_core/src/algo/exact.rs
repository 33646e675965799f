use crate::{geometry::PathGeometry, point::Point};

/// Exhaustive search over every visiting order of `targets`.
///
/// Orders are enumerated lexicographically by input index, identity first, and
/// only a strictly shorter candidate replaces the incumbent, so ties resolve to
/// the earliest order. The identity order is always kept as the first
/// incumbent, so a complete path comes back even when every length is `inf`.
/// Returns the optimal path and its length.
pub(crate) fn solve_exact(start: Point, targets: &[Point]) -> (Vec<Point>, f64) {
    let n = targets.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut candidate = Vec::with_capacity(n + 1);
    let mut best_path = Vec::new();
    let mut best_distance = f64::INFINITY;
    let mut evaluated = 0usize;

    loop {
        candidate.clear();
        candidate.push(start);
        candidate.extend(order.iter().map(|&idx| targets[idx]));
        let distance = PathGeometry::path_length(&candidate);
        evaluated += 1;

        if best_path.is_empty() || distance < best_distance {
            best_distance = distance;
            best_path.clone_from(&candidate);
        }

        if !next_permutation(&mut order) {
            break;
        }
    }

    log::debug!("exact: n={n} permutations={evaluated} best={best_distance:.3}");

    (best_path, best_distance)
}

/// Advances `order` to its lexicographic successor. Returns `false` once the
/// last permutation has been reached.
fn next_permutation(order: &mut [usize]) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }

    let Some(pivot) = (0..n - 1).rev().find(|&i| order[i] < order[i + 1]) else {
        return false;
    };
    let Some(successor) = (pivot + 1..n).rev().find(|&j| order[j] > order[pivot]) else {
        return false;
    };
    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}
