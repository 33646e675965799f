use crate::point::Point;

/// Greedy construction: always extend the path to the closest unvisited target.
///
/// Ties go to the target that comes first in the remaining input order, and
/// removal keeps that order stable, so the result depends only on the input.
pub(crate) fn nearest_neighbor_path(start: Point, targets: &[Point]) -> Vec<Point> {
    let mut unvisited = targets.to_vec();
    let mut path = Vec::with_capacity(targets.len() + 1);
    path.push(start);
    let mut current = start;

    while !unvisited.is_empty() {
        let mut nearest_idx = 0usize;
        let mut nearest_dist = current.dist(&unvisited[0]);
        for (idx, candidate) in unvisited.iter().enumerate().skip(1) {
            let d = current.dist(candidate);
            if d < nearest_dist {
                nearest_idx = idx;
                nearest_dist = d;
            }
        }

        current = unvisited.remove(nearest_idx);
        path.push(current);
    }

    path
}
