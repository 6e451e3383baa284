//! Logger setup for the command-line tool.
//!
//! Logs go to stderr so they never mix with encoded output on stdout.
//! The level comes from `HELIXCODE_LOG` (env_logger filter syntax) and
//! defaults to `warn`, raised one step per `-v`.

use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::{debug, LevelFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HELIXCODE_LOG";

/// Maps the number of `-v` flags to a level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes logging.
///
/// `HELIXCODE_LOG` wins over the verbosity flags when set.
pub fn init_logging(verbosity: u8) {
    let default_level = level_for_verbosity(verbosity).to_string().to_lowercase();

    let result = Builder::from_env(Env::default().filter_or(LOG_ENV, default_level))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] [{}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        debug!("Logging initialized (version {})", env!("CARGO_PKG_VERSION"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(0);
        init_logging(2);
    }
}
