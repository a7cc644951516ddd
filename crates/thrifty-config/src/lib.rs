//! # thrifty-config
//!
//! Layered configuration loading for thrifty using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`THRIFTY_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`--config`)
//! 3. Project-level `.thrifty/config.toml`
//! 4. User-level `~/.config/thrifty/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `THRIFTY_LOADER__STRICT_FIELDS` -> `loader.strict_fields`
//! and `THRIFTY_OUTPUT__FORMAT` -> `output.format`.
//!
//! ```toml
//! [loader]
//! strict_fields = true
//!
//! [output]
//! format = "summary"
//! ```

mod error;
mod loader;
mod output;

pub use error::ConfigError;
pub use loader::LoaderConfig;
pub use output::{OutputConfig, OutputFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThriftyConfig {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ThriftyConfig {
    /// Load configuration from the TOML files and environment variables.
    ///
    /// # Errors
    /// `ConfigError::Figment` if a source fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Like [`load`](Self::load), with `path` layered above the project
    /// file.
    ///
    /// # Errors
    /// `MissingFile` if `path` does not exist, otherwise as [`load`](Self::load).
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        Self::figment_with_file(Some(path))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the default provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_file(None)
    }

    fn figment_with_file(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".thrifty/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("THRIFTY_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("thrifty").join("config.toml"))
    }
}
