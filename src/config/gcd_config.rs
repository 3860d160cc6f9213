// src/config/gcd_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// How the calculator treats the sign of a Euclidean result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignPolicy {
    /// Return the loop's final value unchanged (may be negative)
    #[default]
    Literal,
    /// Return the absolute value of the loop's final value
    Normalized,
}

/// Main calculator configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcdConfig {
    /// Sign handling applied by `GcdCalculator`
    pub sign_policy: SignPolicy,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for GcdConfig {
    fn default() -> Self {
        GcdConfig {
            sign_policy: SignPolicy::Literal,
            log_level: "info".to_string(),
        }
    }
}

impl GcdConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("gcd.toml").exists() {
            builder = builder.add_source(File::with_name("gcd.toml"));
        } else if Path::new("gcd.yaml").exists() {
            builder = builder.add_source(File::with_name("gcd.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("sign_policy", "literal")?
            .set_default("log_level", "info")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // GCD_SIGN_POLICY, GCD_LOG_LEVEL
        let config = builder
            .add_source(
                Environment::with_prefix("GCD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
