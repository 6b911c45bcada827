//! Log output setup
//!
//! Lines look like `2026-10-19 14:03:22.517 [main] [I] message`. The default
//! level is `debug` in debug builds and `info` in release builds; `RUST_LOG`
//! overrides it.

use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

/// Default level filter for this build profile
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Single-letter level tag
pub fn level_tag(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}

/// Installs the global logger; later calls are ignored
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level().as_str()));

    builder.format(|buf, record| {
        let thread = std::thread::current();
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            thread.name().unwrap_or("?"),
            level_tag(record.level()),
            record.args()
        )
    });

    let _ = builder.try_init();
}
