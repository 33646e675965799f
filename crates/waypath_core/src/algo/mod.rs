pub(crate) mod exact;
pub(crate) mod nearest_neighbor;
pub mod solver;
pub(crate) mod two_opt;
