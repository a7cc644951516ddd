//! # thrifty-loader
//!
//! Builds a [`thrifty_model::Document`] from the syntax tree of one
//! Thrift-like IDL file.
//!
//! The tree comes from an external parser, either through the
//! [`SyntaxNode`] trait or as the JSON form of [`TreeNode`]. A single
//! depth-first walk drives [`ModelBuilder`], which tracks the open
//! declaration, routes fields to the right list and attaches leading
//! `/** ... */` comments to the next declaration, field or function.
//!
//! ```no_run
//! use thrifty_loader::{LoadOptions, load_document_from_path};
//!
//! let doc = load_document_from_path("calc.tree.json", LoadOptions::default())?;
//! for declaration in &doc {
//!     println!("{} {}", declaration.kind(), declaration.name());
//! }
//! # Ok::<(), thrifty_loader::LoadError>(())
//! ```

mod builder;
mod comment;
mod context;
mod error;
mod options;
mod syntax;
mod tree;
mod walker;

pub use builder::{ModelBuilder, Normalizer};
pub use comment::{CommentCarrier, normalize_comment};
pub use context::{AcceptorSlot, ContextTracker};
pub use error::LoadError;
pub use options::LoadOptions;
pub use syntax::{NodeKind, SyntaxNode, fields};
pub use tree::TreeNode;
pub use walker::{TreeListener, walk};

use std::path::Path;

use thrifty_model::Document;

/// Build the document for an in-memory tree.
///
/// # Errors
/// Any [`LoadError`] raised while walking `root`.
pub fn load_document<N: SyntaxNode>(
    name: impl Into<String>,
    root: &N,
    options: LoadOptions,
) -> Result<Document, LoadError> {
    ModelBuilder::new(name).with_options(options).build(root)
}

/// Read a JSON-serialized [`TreeNode`] from `path`.
///
/// # Errors
/// `Io` if the file cannot be read, `Json` if it is not a tree.
pub fn read_tree(path: impl AsRef<Path>) -> Result<TreeNode, LoadError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a serialized tree and build its document, named after `path`.
///
/// # Errors
/// Any error from [`read_tree`] or [`load_document`].
pub fn load_document_from_path(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let tree = read_tree(path)?;
    tracing::debug!(path = %path.display(), "loaded syntax tree");
    load_document(path.display().to_string(), &tree, options)
}
