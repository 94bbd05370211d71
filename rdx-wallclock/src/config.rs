//! Defines the configuration for the wallclock demonstration.
//!
//! `DemoConfig` is deserialized with `serde` from layered sources: an optional
//! `wallclock.toml` in the working directory, then `WALLCLOCK_*` environment
//! variables. Every field has a default, so with no sources at all the demo
//! runs the classic 23:58 scenario with all three loop styles.

use crate::clock::Clock;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Base name of the optional configuration file, without extension.
pub const DEFAULT_CONFIG_FILE: &str = "wallclock";

/// Prefix of the environment variables read by [`DemoConfig::load`].
pub const ENV_PREFIX: &str = "WALLCLOCK";

/// The top-level configuration for the demonstration driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoConfig {
    /// The time every run starts from. Stored verbatim, like `Clock::new`.
    #[serde(default = "default_seed")]
    pub seed: Clock,

    /// How many times each run prints and advances. Must be at least one so
    /// that every loop style executes the same number of iterations.
    #[serde(default = "default_advances")]
    pub advances: NonZeroUsize,

    /// The loop styles to run, in order.
    #[serde(default = "default_styles")]
    pub styles: Vec<LoopStyle>,
}

/// The loop construct that drives a single demo run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopStyle {
    /// A counted `for` loop over a range.
    For,
    /// A `while` loop over an explicit counter.
    While,
    /// A body-first loop whose condition is checked after each iteration.
    DoWhile,
}

impl LoopStyle {
    pub const ALL: [LoopStyle; 3] = [LoopStyle::For, LoopStyle::While, LoopStyle::DoWhile];

    /// The name printed in the run header.
    pub fn label(&self) -> &'static str {
        match self {
            LoopStyle::For => "FOR",
            LoopStyle::While => "WHILE",
            LoopStyle::DoWhile => "DO-WHILE",
        }
    }
}

impl fmt::Display for LoopStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DemoConfig {
    /// Loads the configuration from `wallclock.toml` (if present) and the
    /// `WALLCLOCK_*` environment, e.g. `WALLCLOCK_ADVANCES=10`,
    /// `WALLCLOCK_SEED__HOUR=7` or `WALLCLOCK_STYLES=for,do-while`.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("styles"),
            );
        Self::from_builder(builder)
    }

    /// Parses a configuration from TOML text, filling in defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            advances: default_advances(),
            styles: default_styles(),
        }
    }
}

// --- Default value functions for serde ---

fn default_seed() -> Clock {
    Clock::new(23, 58)
}

fn default_advances() -> NonZeroUsize {
    NonZeroUsize::new(5).unwrap_or(NonZeroUsize::MIN)
}

fn default_styles() -> Vec<LoopStyle> {
    LoopStyle::ALL.to_vec()
}
