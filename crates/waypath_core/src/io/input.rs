use std::{fs, io::Read};

use crate::{Error, Point, Result, SolverOptions};

/// One independent routing problem: a start point and the targets to visit.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequest {
    pub start: Point,
    pub targets: Vec<Point>,
}

impl RouteRequest {
    pub fn new(start: Point, targets: &[Point]) -> Self {
        Self {
            start,
            targets: targets.to_vec(),
        }
    }

    /// Reads every request from `--input` (or stdin when unset).
    pub fn from_options(options: &SolverOptions) -> Result<Vec<Self>> {
        let text = match options.input_path() {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::other(format!("failed to read input file {}: {e}", path.display()))
            })?,
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        parse_requests(&text, options.start)
    }

    /// Number of targets.
    pub fn n(&self) -> usize {
        self.targets.len()
    }
}

/// Parses blank-line separated blocks of `x,y` tokens.
///
/// Without an explicit `start`, the first token of each block is that block's
/// start point. With one, every token is a target and the start is shared.
pub fn parse_requests(input: &str, start: Option<Point>) -> Result<Vec<RouteRequest>> {
    let mut requests = Vec::new();
    let mut token_idx = 0usize;

    for (block_idx, block) in split_blocks(input).into_iter().enumerate() {
        let mut points = Vec::new();
        for tok in block.split_whitespace() {
            token_idx += 1;
            points.push(parse_point(tok, token_idx)?);
        }

        let request = match start {
            Some(start) => RouteRequest { start, targets: points },
            None => {
                let start = points.remove(0);
                if points.is_empty() {
                    return Err(Error::invalid_input(format!(
                        "Block {}: start point {start} has no targets",
                        block_idx + 1
                    )));
                }
                RouteRequest { start, targets: points }
            }
        };
        requests.push(request);
    }

    if requests.is_empty() {
        return Err(Error::invalid_input("No points provided."));
    }

    Ok(requests)
}

/// Parses a single `x,y` token; `idx` is the 1-based token position for errors.
pub fn parse_point(tok: &str, idx: usize) -> Result<Point> {
    parse_coords(tok).map_err(|e| Error::invalid_input(format!("Token {idx}: {e}")))
}

/// Coordinate parsing shared by input tokens and `--start`. Messages carry
/// no position so each caller can say where the value came from.
pub(crate) fn parse_coords(tok: &str) -> std::result::Result<Point, String> {
    let mut it = tok.split(',');
    let x_s = it
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing x".to_string())?;
    let y_s = it
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "missing y".to_string())?;

    if it.next().is_some() {
        return Err(format!("expected 'x,y' but got extra comma fields: {tok}"));
    }

    let x: f64 = x_s.parse().map_err(|_| format!("invalid x: {x_s}"))?;
    let y: f64 = y_s.parse().map_err(|_| format!("invalid y: {y_s}"))?;

    let point = Point::new(x, y);
    if !point.is_valid() {
        return Err(format!("coordinates must be finite: {tok}"));
    }
    Ok(point)
}

fn split_blocks(input: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    if !current.trim().is_empty() {
        blocks.push(current);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::{parse_coords, parse_point, parse_requests};
    use crate::Point;

    #[test]
    fn parse_point_reads_x_and_y() {
        let p = parse_point("1.5,-2", 1).expect("parse point");
        assert_eq!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn parse_point_rejects_extra_comma_fields() {
        let err = parse_point("1,2,3", 4).expect_err("extra fields should fail");
        assert!(err.to_string().contains("Token 4: expected 'x,y'"));
    }

    #[test]
    fn parse_point_rejects_missing_y() {
        let err = parse_point("7", 2).expect_err("missing y should fail");
        assert!(err.to_string().contains("Token 2: missing y"));

        let err = parse_point("7,", 2).expect_err("empty y should fail");
        assert!(err.to_string().contains("Token 2: missing y"));
    }

    #[test]
    fn parse_point_rejects_non_numeric_coordinates() {
        let err = parse_point("a,2", 1).expect_err("invalid x should fail");
        assert!(err.to_string().contains("invalid x: a"));

        let err = parse_point("1,b", 1).expect_err("invalid y should fail");
        assert!(err.to_string().contains("invalid y: b"));
    }

    #[test]
    fn parse_point_rejects_non_finite_coordinates() {
        let err = parse_point("inf,0", 3).expect_err("infinite x should fail");
        assert!(err.to_string().contains("coordinates must be finite"));

        let err = parse_point("0,NaN", 3).expect_err("NaN y should fail");
        assert!(err.to_string().contains("coordinates must be finite"));
    }

    #[test]
    fn coordinate_errors_carry_no_position() {
        assert_eq!(parse_coords("3,-4").expect("parse coords"), Point::new(3.0, -4.0));
        assert_eq!(parse_coords(",1").expect_err("missing x"), "missing x");
        assert_eq!(parse_coords("1,y").expect_err("bad y"), "invalid y: y");
    }

    #[test]
    fn first_token_of_a_block_is_the_start() {
        let requests = parse_requests("0,0 1,0\n2,0", None).expect("parse requests");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].start, Point::new(0.0, 0.0));
        assert_eq!(
            requests[0].targets,
            vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)]
        );
    }

    #[test]
    fn blank_lines_separate_requests() {
        let requests =
            parse_requests("0,0 1,1\n\n  \n5,5\n6,6 7,7\n", None).expect("parse requests");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].start, Point::new(5.0, 5.0));
        assert_eq!(requests[1].n(), 2);
    }

    #[test]
    fn explicit_start_makes_every_token_a_target() {
        let start = Point::new(-1.0, -1.0);
        let requests = parse_requests("0,0 1,1", Some(start)).expect("parse requests");
        assert_eq!(requests[0].start, start);
        assert_eq!(requests[0].n(), 2);
    }

    #[test]
    fn block_without_targets_is_rejected() {
        let err = parse_requests("0,0 1,1\n\n3,3\n", None).expect_err("lonely start");
        assert!(err.to_string().contains("Block 2: start point 3.0,3.0 has no targets"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_requests(" \n\t ", None).expect_err("empty input should fail");
        assert!(err.to_string().contains("No points provided."));
    }

    #[test]
    fn token_index_counts_across_blocks() {
        let err = parse_requests("0,0 1,1\n\n2,2 x,3", None).expect_err("bad token");
        assert!(err.to_string().contains("Token 4: invalid x: x"));
    }
}
