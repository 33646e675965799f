use std::time::Instant;

use rayon::prelude::*;

use crate::{
    Error, Result, RouteRequest, SolverOptions,
    constants::{ERR_INVALID_START, ERR_INVALID_TARGET, ERR_NO_TARGETS},
    exact::solve_exact,
    nearest_neighbor::nearest_neighbor_path,
    point::Point,
    route::{Route, Strategy},
    two_opt::two_opt,
};

/// Shortest open path from `start` through every target, with default options.
///
/// Up to three targets are solved exactly; larger inputs use nearest-neighbor
/// construction followed by 2-opt.
pub fn solve(start: Point, targets: &[Point]) -> Result<Route> {
    solve_with_options(start, targets, &SolverOptions::default())
}

pub fn solve_with_options(
    start: Point,
    targets: &[Point],
    options: &SolverOptions,
) -> Result<Route> {
    validate(start, targets)?;
    options.validate()?;

    let now = Instant::now();
    let n = targets.len();

    let route = if n <= options.exact_threshold {
        let (path, total_distance) = solve_exact(start, targets);
        Route::new(path, total_distance, Strategy::Exact)
    } else {
        let mut path = nearest_neighbor_path(start, targets);
        let total_distance = two_opt(&mut path, options.improvement);
        Route::new(path, total_distance, Strategy::Heuristic)
    };

    log::info!(
        "solver: done n={n} strategy={} total={:.3} time={:.3}s",
        route.strategy,
        route.total_distance,
        now.elapsed().as_secs_f32()
    );

    Ok(route)
}

/// Solves independent requests in parallel. Results keep request order, and a
/// failing request does not affect the others.
pub fn solve_batch(requests: &[RouteRequest], options: &SolverOptions) -> Vec<Result<Route>> {
    log::info!("solver.batch: start requests={}", requests.len());

    requests
        .par_iter()
        .map(|request| solve_with_options(request.start, &request.targets, options))
        .collect()
}

fn validate(start: Point, targets: &[Point]) -> Result<()> {
    if targets.is_empty() {
        return Err(Error::invalid_input(ERR_NO_TARGETS));
    }
    if !start.is_valid() {
        return Err(Error::invalid_input(format!("{ERR_INVALID_START}: {start}")));
    }
    if let Some((idx, target)) = targets.iter().enumerate().find(|(_, p)| !p.is_valid()) {
        return Err(Error::invalid_input(format!(
            "{ERR_INVALID_TARGET} at index {idx}: {target}"
        )));
    }
    Ok(())
}
