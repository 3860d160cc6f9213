// src/core/logging.rs

use env_logger::Env;
use log::SetLoggerError;

use crate::config::GcdConfig;

/// Install `env_logger` as the global logger.
///
/// `GCD_LOG_LEVEL` overrides the configured level and `GCD_LOG_STYLE` the
/// color mode. Fails if a logger is already installed.
pub fn init_logging(config: &GcdConfig) -> Result<(), SetLoggerError> {
    let env = Env::default()
        .filter_or("GCD_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("GCD_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).try_init()
}
