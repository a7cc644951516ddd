use anyhow::Context;
use thrifty_config::ThriftyConfig;
use thrifty_loader::LoadOptions;

use crate::cli::{GlobalFlags, LoadArgs};
use crate::output;

/// Handle `thrifty load`.
pub fn handle(args: &LoadArgs, flags: &GlobalFlags, config: &ThriftyConfig) -> anyhow::Result<()> {
    println!("{}", render(args, flags, config)?.trim_end());
    Ok(())
}

fn render(args: &LoadArgs, flags: &GlobalFlags, config: &ThriftyConfig) -> anyhow::Result<String> {
    let options = LoadOptions {
        strict_fields: args.strict || config.loader.strict_fields,
    };

    let tree = thrifty_loader::read_tree(&args.tree)
        .with_context(|| format!("failed to read syntax tree {}", args.tree.display()))?;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| args.tree.display().to_string());
    let document = thrifty_loader::load_document(name, &tree, options)
        .with_context(|| format!("failed to build model from {}", args.tree.display()))?;

    tracing::info!(
        document = document.name(),
        declarations = document.len(),
        "model built"
    );
    output::render(&document, flags.output_format(config))
}
