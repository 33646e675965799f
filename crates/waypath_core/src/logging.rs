use std::{fs, io::Write};

use env_logger::{Builder, Target, WriteStyle, fmt::Formatter};
use log::Record;

use crate::options::{LogFormat, SolverOptions};
use crate::{Error, Result};

/// Installs the global logger described by `options`. Fails if a logger is
/// already installed or the log file cannot be created.
pub fn init_logger(options: &SolverOptions) -> Result<()> {
    let mut builder = build_logger(options);

    match options.log_output_path() {
        Some(log_path) => {
            if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let log_file = fs::File::create(log_path).map_err(|e| {
                Error::other(format!(
                    "failed to create log output file {}: {e}",
                    log_path.display()
                ))
            })?;
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn build_logger(options: &SolverOptions) -> Builder {
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .write_style(WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{}", render(log_format, record))
        });
    builder
}

fn render(format: LogFormat, record: &Record<'_>) -> String {
    match format {
        LogFormat::Compact => format!("{} {}", record.level().as_str(), record.args()),
        LogFormat::Pretty => format!(
            "{:<5} [{}] {}",
            record.level().as_str(),
            short_target(record.target()),
            record.args()
        ),
    }
}

/// `waypath_core::algo::two_opt` -> `two_opt`.
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use log::{Level, Record};

    use super::{render, short_target};
    use crate::options::LogFormat;

    #[test]
    fn short_target_keeps_last_module_segment() {
        assert_eq!(short_target("waypath_core::algo::two_opt"), "two_opt");
        assert_eq!(short_target("waypath"), "waypath");
    }

    #[test]
    fn compact_format_is_level_then_message() {
        let line = render(
            LogFormat::Compact,
            &Record::builder()
                .level(Level::Info)
                .target("waypath_core::algo::solver")
                .args(format_args!("solver: done n=4"))
                .build(),
        );
        assert_eq!(line, "INFO solver: done n=4");
    }

    #[test]
    fn pretty_format_pads_level_and_names_module() {
        let line = render(
            LogFormat::Pretty,
            &Record::builder()
                .level(Level::Warn)
                .target("waypath_core::algo::two_opt")
                .args(format_args!("2opt: done"))
                .build(),
        );
        assert_eq!(line, "WARN  [two_opt] 2opt: done");
    }
}
