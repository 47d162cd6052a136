//! Stderr logging bridge for the `log` facade.
//!
//! Level precedence: the `--log-level` CLI flag, then `RUST_LOG`, then the
//! default (`warn`). Output goes to stderr so piped stdout stays clean for
//! the rendered content.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!(
            "[{:<5}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// Install the stderr logger. Safe to call more than once; only the first
/// call installs.
pub fn init(cli_level: Option<LevelFilter>) {
    let level = cli_level.or_else(env_level).unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`),
/// case-insensitively. Returns `None` for anything unrecognized.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

fn env_level() -> Option<LevelFilter> {
    parse_level(&std::env::var("RUST_LOG").ok()?)
}
