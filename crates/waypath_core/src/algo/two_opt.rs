use crate::{geometry::PathGeometry, options::Improvement, point::Point};

/// Paths shorter than this have no movable segment of two or more points.
const MIN_PATH_SIZE_FOR_2OPT: usize = 3;

/// Summary of a 2-opt run, reported in debug logs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TwoOptStats {
    pub(crate) passes: usize,
    pub(crate) moves: usize,
    pub(crate) initial: f64,
    pub(crate) last: f64,
}

/// Improves an open path with segment reversals until no single reversal
/// `path[i..=k]` (`1 <= i < k < len`) makes it strictly shorter.
///
/// Index 0 is the fixed start and never moves. Returns the final length,
/// which is exactly `PathGeometry::path_length(path)`.
pub(crate) fn two_opt(path: &mut Vec<Point>, improvement: Improvement) -> f64 {
    let stats = match improvement {
        Improvement::First => first_improvement(path),
        Improvement::Best => best_improvement(path),
    };

    log::debug!(
        "2opt: done policy={improvement} n={} passes={} moves={} initial={:.3} final={:.3}",
        path.len(),
        stats.passes,
        stats.moves,
        stats.initial,
        stats.last
    );

    stats.last
}

/// Takes the first strictly shorter reversal and restarts the scan from the top.
fn first_improvement(path: &mut Vec<Point>) -> TwoOptStats {
    let mut best_distance = PathGeometry::path_length(path);
    let mut stats = TwoOptStats {
        initial: best_distance,
        last: best_distance,
        ..TwoOptStats::default()
    };
    let n = path.len();
    if n < MIN_PATH_SIZE_FOR_2OPT {
        return stats;
    }

    let mut candidate = Vec::with_capacity(n);
    let mut improved = true;
    while improved {
        improved = false;
        stats.passes += 1;

        'scan: for i in 1..(n - 1) {
            for k in (i + 1)..n {
                reversed_into(path, i, k, &mut candidate);
                let distance = PathGeometry::path_length(&candidate);
                if distance < best_distance {
                    std::mem::swap(path, &mut candidate);
                    best_distance = distance;
                    stats.moves += 1;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    stats.last = best_distance;
    stats
}

/// Applies the single shortest strictly-improving reversal per full pass.
fn best_improvement(path: &mut Vec<Point>) -> TwoOptStats {
    let mut best_distance = PathGeometry::path_length(path);
    let mut stats = TwoOptStats {
        initial: best_distance,
        last: best_distance,
        ..TwoOptStats::default()
    };
    let n = path.len();
    if n < MIN_PATH_SIZE_FOR_2OPT {
        return stats;
    }

    let mut candidate = Vec::with_capacity(n);
    loop {
        stats.passes += 1;
        let mut best_move: Option<(usize, usize, f64)> = None;

        for i in 1..(n - 1) {
            for k in (i + 1)..n {
                reversed_into(path, i, k, &mut candidate);
                let distance = PathGeometry::path_length(&candidate);
                let bar = best_move.map_or(best_distance, |(_, _, d)| d);
                if distance < bar {
                    best_move = Some((i, k, distance));
                }
            }
        }

        let Some((i, k, distance)) = best_move else {
            break;
        };
        path[i..=k].reverse();
        best_distance = distance;
        stats.moves += 1;
    }

    stats.last = best_distance;
    stats
}

/// Writes `path` with `path[i..=k]` reversed into `out`.
fn reversed_into(path: &[Point], i: usize, k: usize, out: &mut Vec<Point>) {
    out.clear();
    out.extend_from_slice(&path[..i]);
    out.extend(path[i..=k].iter().rev());
    out.extend_from_slice(&path[k + 1..]);
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::{reversed_into, two_opt};
    use crate::{geometry::PathGeometry, options::Improvement, point::Point};

    fn random_path(seed: u64, n: usize) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)))
            .collect()
    }

    fn assert_no_improving_reversal(path: &[Point]) {
        let total = PathGeometry::path_length(path);
        let mut candidate = Vec::new();
        for i in 1..(path.len() - 1) {
            for k in (i + 1)..path.len() {
                reversed_into(path, i, k, &mut candidate);
                assert!(
                    PathGeometry::path_length(&candidate) >= total,
                    "reversal ({i},{k}) improves {total}"
                );
            }
        }
    }

    #[test]
    fn reversed_into_keeps_prefix_and_suffix() {
        let path: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0)).collect();
        let mut out = Vec::new();
        reversed_into(&path, 1, 3, &mut out);

        let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 2.0, 1.0, 4.0]);
    }

    #[test]
    fn uncrosses_a_zigzag() {
        let mut path = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(4.0, 0.0),
        ];
        let distance = two_opt(&mut path, Improvement::First);

        assert_eq!(distance, 4.0);
        let xs: Vec<f64> = path.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn start_never_moves() {
        for improvement in [Improvement::First, Improvement::Best] {
            let mut path = random_path(7, 12);
            let start = path[0];
            two_opt(&mut path, improvement);
            assert_eq!(path[0], start);
        }
    }

    #[test]
    fn last_pair_swap_is_considered() {
        // Only reversing the final two points helps here.
        let mut path = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let distance = two_opt(&mut path, Improvement::First);
        assert_eq!(distance, 3.0);
        assert_eq!(path[3], Point::new(3.0, 0.0));
    }

    #[test]
    fn both_policies_reach_a_local_optimum() {
        for seed in 0..8 {
            for improvement in [Improvement::First, Improvement::Best] {
                let mut path = random_path(seed, 14);
                let before = PathGeometry::path_length(&path);
                let distance = two_opt(&mut path, improvement);

                assert!(distance <= before);
                assert_eq!(distance, PathGeometry::path_length(&path));
                assert_no_improving_reversal(&path);
            }
        }
    }

    #[test]
    fn short_paths_are_left_alone() {
        let mut path = vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)];
        let distance = two_opt(&mut path, Improvement::Best);
        assert_eq!(path, vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert_eq!(distance, PathGeometry::path_length(&path));
    }
}
