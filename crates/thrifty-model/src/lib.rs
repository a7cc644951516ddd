//! # thrifty-model
//!
//! Strongly-typed document model for Thrift-like IDL files.
//!
//! A [`Document`] owns its [`Declaration`]s in source order. Every nested
//! collection (enum values, struct/exception attributes, service methods,
//! method parameters and throws lists) is insertion-ordered as well; the
//! model performs no validation and no type resolution.
//!
//! All types derive `serde` and `schemars` so downstream generators can
//! consume the model as JSON or check it against a schema.

mod acceptor;
mod attribute;
mod declaration;
mod document;
mod method;

pub use acceptor::{AttributeAcceptor, ThrowsRedirect};
pub use attribute::{Attribute, TypeRef};
pub use declaration::{Declaration, DeclarationKind, Enum, Exception, Service, Struct};
pub use document::Document;
pub use method::Method;
