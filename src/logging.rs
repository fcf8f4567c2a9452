// src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the stderr logger. `RUST_LOG`, when set, overrides `level`.
pub fn init(level: LevelFilter) {
    let _ = Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
