//! Top-level IDL declarations: enums, structs, exceptions and services.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::acceptor::AttributeAcceptor;
use crate::attribute::Attribute;
use crate::method::Method;

/// An enumeration. Values carry names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Enum {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Enum {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            values: Vec::new(),
        }
    }

    pub fn push_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Struct {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Struct {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Exception {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Exception {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            attributes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Service {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Service {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            methods: Vec::new(),
        }
    }

    /// Look up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// A top-level named construct of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Enum(Enum),
    Struct(Struct),
    Exception(Exception),
    Service(Service),
}

impl Declaration {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => &e.name,
            Self::Struct(s) => &s.name,
            Self::Exception(e) => &e.name,
            Self::Service(s) => &s.name,
        }
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        match self {
            Self::Enum(e) => e.comment.as_deref(),
            Self::Struct(s) => s.comment.as_deref(),
            Self::Exception(e) => e.comment.as_deref(),
            Self::Service(s) => s.comment.as_deref(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match self {
            Self::Enum(_) => DeclarationKind::Enum,
            Self::Struct(_) => DeclarationKind::Struct,
            Self::Exception(_) => DeclarationKind::Exception,
            Self::Service(_) => DeclarationKind::Service,
        }
    }

    /// Struct and exception bodies accept attributes directly; enums and
    /// services do not.
    pub fn acceptor_mut(&mut self) -> Option<&mut dyn AttributeAcceptor> {
        match self {
            Self::Struct(s) => Some(s),
            Self::Exception(e) => Some(e),
            Self::Enum(_) | Self::Service(_) => None,
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<&Enum> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub const fn as_enum_mut(&mut self) -> Option<&mut Enum> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_struct(&self) -> Option<&Struct> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_exception(&self) -> Option<&Exception> {
        match self {
            Self::Exception(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_service(&self) -> Option<&Service> {
        match self {
            Self::Service(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_service_mut(&mut self) -> Option<&mut Service> {
        match self {
            Self::Service(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Enum> for Declaration {
    fn from(value: Enum) -> Self {
        Self::Enum(value)
    }
}

impl From<Struct> for Declaration {
    fn from(value: Struct) -> Self {
        Self::Struct(value)
    }
}

impl From<Exception> for Declaration {
    fn from(value: Exception) -> Self {
        Self::Exception(value)
    }
}

impl From<Service> for Declaration {
    fn from(value: Service) -> Self {
        Self::Service(value)
    }
}

/// Discriminant of a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Enum,
    Struct,
    Exception,
    Service,
}

impl DeclarationKind {
    /// IDL keyword for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Exception => "exception",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_accessors_cover_every_variant() {
        let mut color = Enum::new("Color");
        color.comment = Some("colors".into());
        let decls: Vec<Declaration> = vec![
            color.into(),
            Struct::new("Point").into(),
            Exception::new("Overflow").into(),
            Service::new("Calc").into(),
        ];

        let names: Vec<_> = decls.iter().map(Declaration::name).collect();
        assert_eq!(names, ["Color", "Point", "Overflow", "Calc"]);

        let kinds: Vec<_> = decls.iter().map(|d| d.kind().to_string()).collect();
        assert_eq!(kinds, ["enum", "struct", "exception", "service"]);

        assert_eq!(decls[0].comment(), Some("colors"));
        assert_eq!(decls[1].comment(), None);
    }

    #[test]
    fn only_structs_and_exceptions_accept_attributes() {
        let mut decls: Vec<Declaration> = vec![
            Enum::new("Color").into(),
            Struct::new("Point").into(),
            Exception::new("Overflow").into(),
            Service::new("Calc").into(),
        ];
        let accepting: Vec<bool> = decls
            .iter_mut()
            .map(|d| d.acceptor_mut().is_some())
            .collect();
        assert_eq!(accepting, [false, true, true, false]);
    }

    #[test]
    fn declaration_is_tagged_by_kind_in_json() {
        let json = serde_json::to_value(Declaration::from(Struct::new("Point"))).unwrap();
        assert_eq!(json["kind"], "struct");
        assert_eq!(json["name"], "Point");
    }
}
