use std::str::FromStr;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Picks the log level, every `-v` on the command line raises the configured one by a step.
pub fn level(verbose: u8, configured: &str) -> LevelFilter {
    let base = LevelFilter::from_str(configured).unwrap_or_else(|_| {
        eprintln!("unknown log level {:?}, using warn", configured);
        LevelFilter::Warn
    });

    LevelFilter::iter()
        .skip_while(|&level| level < base)
        .nth(verbose as usize)
        .unwrap_or(LevelFilter::Trace)
}

/// Sends logs to stderr, so stdout only carries the maze or the path.
pub fn init(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .target(Target::Stderr);

    if builder.try_init().is_err() {
        log::warn!("logger was already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity() {
        assert_eq!(level(0, "warn"), LevelFilter::Warn);
        assert_eq!(level(1, "warn"), LevelFilter::Info);
        assert_eq!(level(2, "WARN"), LevelFilter::Debug);
        assert_eq!(level(9, "error"), LevelFilter::Trace);
        assert_eq!(level(0, "off"), LevelFilter::Off);
        assert_eq!(level(0, "loud"), LevelFilter::Warn);
    }
}
