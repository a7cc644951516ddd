//! Loader error types for thrifty-loader.

use thrifty_model::DeclarationKind;

/// Errors that abort a tree walk.
///
/// Structural variants indicate that the syntax tree does not follow the
/// IDL grammar contract; no partial document is returned when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Enum value `{value}` appears outside an enum declaration")]
    EnumValueOutsideEnum { value: String },

    #[error("Function `{name}` appears outside a service declaration")]
    FunctionOutsideService { name: String },

    #[error("Throws list appears outside a function")]
    ThrowsOutsideFunction,

    #[error("{kind} `{name}` opened while a {open} declaration is still open")]
    NestedDeclaration {
        kind: DeclarationKind,
        name: String,
        open: DeclarationKind,
    },

    #[error("Exit of `{node}` does not match the open context")]
    UnbalancedExit { node: String },

    #[error("`{node}` node is missing its `{field}`")]
    MissingField {
        node: &'static str,
        field: &'static str,
    },

    #[error("Field `{name}` has no enclosing struct, exception or function")]
    OrphanField { name: String },

    #[error("Open context refers to an entity that is not in the document")]
    StaleContext,

    #[error("Expected exactly one document node, found {0}")]
    DocumentCount(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid syntax tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}
