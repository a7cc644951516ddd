use std::path::PathBuf;

use clap::ValueEnum;

/// Output mode shared by all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
    Summary,
}

impl From<OutputFormat> for thrifty_config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Raw => Self::Raw,
            OutputFormat::Summary => Self::Summary,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

impl GlobalFlags {
    /// `--format` if given, otherwise the configured format.
    #[must_use]
    pub fn output_format(
        &self,
        config: &thrifty_config::ThriftyConfig,
    ) -> thrifty_config::OutputFormat {
        self.format.map_or(config.output.format, Into::into)
    }
}
