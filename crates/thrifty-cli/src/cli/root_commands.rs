use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the document model from a serialized syntax tree.
    Load(LoadArgs),
    /// Print the JSON Schema of the document model.
    Schema,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Syntax tree JSON file produced by the IDL parser.
    pub tree: PathBuf,

    /// Document name (defaults to the tree path).
    #[arg(long)]
    pub name: Option<String>,

    /// Fail on fields outside any struct, exception or function.
    #[arg(long)]
    pub strict: bool,
}
