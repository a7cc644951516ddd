//! Owned syntax tree, the JSON interchange format between an external IDL
//! parser and the loader.
//!
//! ```json
//! {
//!   "kind": "struct_declaration",
//!   "fields": { "identifier": "Point" },
//!   "children": [
//!     { "kind": "field", "fields": { "identifier": "x", "field_type": "i32" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::syntax::{NodeKind, SyntaxNode, fields};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl TreeNode {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.insert(name.into(), text.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    fn named(kind: NodeKind, name: &str) -> Self {
        Self::new(kind.as_str()).with_field(fields::IDENTIFIER, name)
    }

    #[must_use]
    pub fn document(children: impl IntoIterator<Item = Self>) -> Self {
        Self::new(NodeKind::Document.as_str()).with_children(children)
    }

    #[must_use]
    pub fn enum_declaration(name: &str, children: impl IntoIterator<Item = Self>) -> Self {
        Self::named(NodeKind::EnumDeclaration, name).with_children(children)
    }

    #[must_use]
    pub fn enum_value(name: &str) -> Self {
        Self::named(NodeKind::EnumValue, name)
    }

    #[must_use]
    pub fn struct_declaration(name: &str, children: impl IntoIterator<Item = Self>) -> Self {
        Self::named(NodeKind::StructDeclaration, name).with_children(children)
    }

    #[must_use]
    pub fn exception_declaration(name: &str, children: impl IntoIterator<Item = Self>) -> Self {
        Self::named(NodeKind::ExceptionDeclaration, name).with_children(children)
    }

    #[must_use]
    pub fn service_declaration(name: &str, children: impl IntoIterator<Item = Self>) -> Self {
        Self::named(NodeKind::ServiceDeclaration, name).with_children(children)
    }

    #[must_use]
    pub fn field(name: &str, field_type: &str) -> Self {
        Self::named(NodeKind::Field, name).with_field(fields::FIELD_TYPE, field_type)
    }

    #[must_use]
    pub fn function(
        name: &str,
        return_type: &str,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self::named(NodeKind::Function, name)
            .with_field(fields::FUNCTION_TYPE, return_type)
            .with_children(children)
    }

    #[must_use]
    pub fn throws_list(children: impl IntoIterator<Item = Self>) -> Self {
        Self::new(NodeKind::ThrowsList.as_str()).with_children(children)
    }

    #[must_use]
    pub fn comment_multiline(raw: &str) -> Self {
        Self::new(NodeKind::CommentMultiline.as_str()).with_text(raw)
    }

    #[must_use]
    pub fn comment_singleline(raw: &str) -> Self {
        Self::new(NodeKind::CommentSingleline.as_str()).with_text(raw)
    }
}

impl SyntaxNode for TreeNode {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).map(|text| Cow::Borrowed(text.as_str()))
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}
