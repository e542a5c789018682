//! Logger setup for the binary.
//!
//! Logs go to stderr so stdout stays parseable.

use log::LevelFilter;

/// Initializes `env_logger` once per process.
///
/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level, and
/// without them the config file's `log_level` (default `warn`).
pub fn init(verbose: u8, config_level: Option<&str>) {
    let default = default_filter(verbose, config_level);
    let env = env_logger::Env::default().default_filter_or(default);
    // A second init (tests calling `run` twice) keeps the first logger.
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

pub(crate) fn default_filter(verbose: u8, config_level: Option<&str>) -> String {
    let level = match verbose {
        0 => config_level
            .and_then(|l| l.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    level.to_string().to_lowercase()
}
