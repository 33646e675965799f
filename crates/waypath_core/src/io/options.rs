use std::{
    fmt,
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, ValueEnum, builder::BoolishValueParser};
use log::LevelFilter;

use crate::{
    Error, Point, Result,
    constants::{DEFAULT_EXACT_THRESHOLD, MAX_EXACT_THRESHOLD},
    io::input::parse_coords,
};

const INPUT_HELP: &str = "\
Input:
  Whitespace-separated x,y tokens. The first token of each block is the start
  point, the rest are targets. Blank lines separate independent blocks.

Examples:
  waypath < points.txt
  waypath --start 0,0 --input chests.txt --output route.txt
  waypath --improvement=best --log-level=debug < points.txt";

/// Runtime options for solving and for the command-line front end.
#[derive(Clone, Debug, PartialEq, Parser)]
#[command(name = "waypath", version, about, after_help = INPUT_HELP)]
pub struct SolverOptions {
    /// Largest target count solved exactly by permutation search.
    #[arg(long, default_value_t = DEFAULT_EXACT_THRESHOLD)]
    pub exact_threshold: usize,
    /// 2-opt move selection policy for the heuristic path.
    #[arg(long, value_enum, ignore_case = true, default_value_t = Improvement::First)]
    pub improvement: Improvement,
    /// Explicit start point. When set, every input token is a target.
    #[arg(long, value_name = "X,Y", value_parser = parse_coords, allow_hyphen_values = true)]
    pub start: Option<Point>,
    /// Structured logging level.
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
    /// Logging output format.
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    #[arg(
        long,
        action = ArgAction::Set,
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub log_timestamp: bool,
    /// Output file for logs. Unset or `-` means stderr.
    #[arg(long)]
    pub log_output: Option<PathBuf>,
    /// Input file with points. Unset or `-` means stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output file for the route report. Unset or `-` means stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Improvement {
    /// Apply the first shorter reversal found, then rescan from the top.
    #[value(alias = "first-improvement")]
    First,
    /// Apply the shortest reversal of each full pass.
    #[value(alias = "best-improvement")]
    Best,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
}

/// Renders a value enum by its command-line name.
macro_rules! display_as_value_name {
    ($($ty:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.to_possible_value() {
                    Some(value) => f.write_str(value.get_name()),
                    None => Ok(()),
                }
            }
        }
    )+};
}

display_as_value_name!(Improvement, LogLevel, LogFormat);

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            exact_threshold: DEFAULT_EXACT_THRESHOLD,
            improvement: Improvement::First,
            start: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: None,
            input: None,
            output: None,
        }
    }
}

impl SolverOptions {
    /// Parses the process arguments. Help, version and malformed flags are
    /// reported by clap, which exits the process.
    pub fn from_args() -> Result<Self> {
        let options = Self::parse();
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.exact_threshold > MAX_EXACT_THRESHOLD {
            return Err(Error::invalid_input(format!(
                "exact_threshold must be <= {MAX_EXACT_THRESHOLD} (got {})",
                self.exact_threshold
            )));
        }
        Ok(())
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        stdio_or_path(self.log_output.as_deref())
    }

    pub fn output_path(&self) -> Option<&Path> {
        stdio_or_path(self.output.as_deref())
    }

    pub fn input_path(&self) -> Option<&Path> {
        stdio_or_path(self.input.as_deref())
    }
}

fn stdio_or_path(raw: Option<&Path>) -> Option<&Path> {
    raw.filter(|path| !path.as_os_str().is_empty() && *path != Path::new("-"))
}
