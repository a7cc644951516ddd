use thrifty_config::ThriftyConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod load;
pub mod schema;

pub fn dispatch(
    command: &Commands,
    flags: &GlobalFlags,
    config: &ThriftyConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Load(args) => load::handle(args, flags, config),
        Commands::Schema => schema::handle(),
    }
}
