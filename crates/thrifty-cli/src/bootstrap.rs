use thrifty_config::ThriftyConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ThriftyConfig> {
    let config = match &flags.config {
        Some(path) => ThriftyConfig::load_with_file(path)?,
        None => ThriftyConfig::load()?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
