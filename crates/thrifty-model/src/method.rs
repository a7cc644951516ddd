use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, TypeRef};

/// A service method (Thrift `function`).
///
/// `parameters` and `exceptions` are filled independently: field entries
/// inside the parameter list land in `parameters`, entries inside the
/// `throws (...)` clause contribute only their type to `exceptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Method {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Attribute>,
    #[serde(default)]
    pub exceptions: Vec<TypeRef>,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            return_type: return_type.into(),
            parameters: Vec::new(),
            exceptions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Look up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Attribute> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
