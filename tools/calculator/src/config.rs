//! Calculator configuration
//!
//! Priority (lowest to highest): built-in defaults, TOML file, `CALC_*`
//! environment variables, command-line flags.

use anyhow::{bail, Context, Result};
use calc::Locale;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "calculator.toml";

/// Environment variable prefix (`CALC_LOCALE`, `CALC_LOG_LEVEL`, `CALC_BANNER`)
pub const ENV_PREFIX: &str = "CALC_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display language for prompts and messages
    pub locale: Locale,
    /// tracing filter directive, overridden by RUST_LOG
    pub log_level: String,
    /// Print the menu banner before each calculation
    pub banner: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            log_level: "warn".to_string(),
            banner: true,
        }
    }
}

impl CalculatorConfig {
    /// Layered figment without command-line overrides
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(CalculatorConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration. An explicitly given file must exist; the default
    /// file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            if !p.exists() {
                bail!("Config file not found: {}", p.display());
            }
        }

        Self::figment(path)
            .extract()
            .context("Failed to load calculator configuration")
    }

    /// Apply command-line flags on top of the loaded values
    pub fn with_overrides(mut self, locale: Option<Locale>, verbose: bool, no_banner: bool) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if verbose {
            self.log_level = "debug".to_string();
        }
        if no_banner {
            self.banner = false;
        }
        self
    }
}
