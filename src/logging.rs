//! Sets up [`log`] output through [`env_logger`].

use log::LevelFilter;

/// Picks the level to log at from the command line flags.
pub const fn level(debug: bool, dry_run: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if dry_run {
        // Dry runs report their commands at info level.
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Initializes the global logger. `RUST_LOG` still takes precedence over `level`.
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
