use std::{
    fs::File,
    io::{self, BufWriter, Write},
    time::Instant,
};

use log::info;

use waypath_core::{Error, Result, RouteRequest, SolverOptions, logging, solve_batch};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    let requests = RouteRequest::from_options(&options)?;

    info!("options: {options:?}");
    for (idx, request) in requests.iter().enumerate() {
        info!("input[{idx}]: start={} targets={}", request.start, request.n());
    }

    let routes = solve_batch(&requests, &options)
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    let mut out: Box<dyn Write> = match options.output_path() {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            Error::other(format!("failed to create output file {}: {e}", path.display()))
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for (idx, route) in routes.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", route.report())?;
        info!("metrics[{idx}]: strategy={} {}", route.strategy, route.metrics());
    }
    out.flush()?;

    info!(
        "output: routes={} time={:.2}s",
        routes.len(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
