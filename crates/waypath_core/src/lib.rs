//! Open-path route planning on the plane: the shortest visiting order from a
//! fixed start through a set of targets.
//! Tiny inputs are solved exactly; larger ones with nearest-neighbor + 2-opt.

mod algo;
mod constants;
mod error;
mod geo;
mod io;
pub mod logging;
mod point;
mod route;

pub(crate) use algo::{exact, nearest_neighbor, two_opt};
pub(crate) use geo::geometry;
pub(crate) use io::options;

pub use algo::solver::{solve, solve_batch, solve_with_options};
pub use error::{Error, Result};
pub use geo::geometry::PathGeometry;
pub use io::input::{RouteRequest, parse_point, parse_requests};
pub use io::options::{Improvement, LogFormat, LogLevel, SolverOptions};
pub use point::Point;
pub use route::{Route, RouteMetrics, Strategy};
