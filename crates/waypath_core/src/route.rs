use std::fmt;

use crate::{geometry::PathGeometry, point::Point};

/// Which strategy produced a route.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Exhaustive permutation search; the route is optimal.
    Exact,
    /// Nearest-neighbor construction refined by 2-opt; the route is a local optimum.
    Heuristic,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Exact => "exact",
            Self::Heuristic => "heuristic",
        };
        write!(f, "{value}")
    }
}

/// An open path beginning at the start point, plus its total length.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub path: Vec<Point>,
    pub total_distance: f64,
    pub strategy: Strategy,
}

impl Route {
    pub(crate) fn new(path: Vec<Point>, total_distance: f64, strategy: Strategy) -> Self {
        Self {
            path,
            total_distance,
            strategy,
        }
    }

    /// The visiting order without the start point.
    pub fn stops(&self) -> &[Point] {
        &self.path[1..]
    }

    /// Leg statistics over the open path.
    pub fn metrics(&self) -> RouteMetrics {
        let legs = PathGeometry::legs(&self.path);
        if legs.is_empty() {
            return RouteMetrics::default();
        }

        let total = self.total_distance;
        let average = total / (legs.len() as f64);
        let longest = legs.iter().copied().fold(0.0_f64, f64::max);

        RouteMetrics {
            legs: legs.len(),
            total,
            longest,
            average,
        }
    }

    /// Human-readable summary: total distance then the numbered path.
    pub fn report(&self) -> String {
        let mut out = format!(
            "Total distance: {:.2} units\n\nOptimal Path:\n",
            self.total_distance
        );
        for (i, point) in self.path.iter().enumerate() {
            out.push_str(&format!("{i}. {}\n", point.display_pair()));
        }
        out
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RouteMetrics {
    pub legs: usize,
    pub total: f64,
    pub longest: f64,
    pub average: f64,
}

impl fmt::Display for RouteMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "legs={} total={:.3} longest={:.3} avg={:.3}",
            self.legs, self.total, self.longest, self.average
        )
    }
}
